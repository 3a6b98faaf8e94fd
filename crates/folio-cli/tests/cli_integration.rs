//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::fs;

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("FOLIO_MODEL")
        .env_remove("FOLIO_API_BASE")
        .env_remove("RUST_LOG");
    cmd
}

/// Stdout of a successful run
fn run_ok(data_dir: &TempDir, args: &[&str]) -> String {
    let output = cli_cmd(data_dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "folio {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Value of a `key: value` line
fn field(output: &str, key: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix(&format!("{}: ", key)))
        .map(|v| v.trim().to_string())
}

const MINIMAL_DOC: &str = r##"{
  "personalInfo": {
    "name": "Sam Rivera",
    "title": "QA Engineer",
    "bio": "Breaks things for a living.",
    "contact": { "email": "sam@example.com", "linkedin": "https://example.com/in/sam", "github": "https://example.com/sam" }
  },
  "about": ["Hello."],
  "experience": [],
  "skills": [],
  "projects": [{ "title": "Orphan", "description": "No links", "tags": [] }],
  "certifications": [],
  "themeConfig": {
    "dark": {
      "bgColor": "#000000", "textPrimary": "#ffffff", "textSecondary": "#b3b3b3", "textTitle": "#e6e6e6",
      "borderColor": "#666666", "cardBg": "rgba(38, 38, 38, 0.75)", "cardBgHover": "rgba(77, 77, 77, 0.75)",
      "accentColor": "#ff0000", "accentColorTranslucent": "rgba(255, 0, 0, 0.5)",
      "accentGlow": "0 0 12px rgba(255, 0, 0, 0.4), 0 0 28px rgba(255, 0, 0, 0.2)",
      "accentShadow": "0 4px 14px 0 rgba(255, 0, 0, 0.15)", "accentHoverBg": "rgba(255, 0, 0, 0.1)",
      "scrollbarTrack": "#000000", "scrollbarThumb": "#666666", "scrollbarThumbHover": "#999999",
      "headerBg": "rgba(0, 0, 0, 0.85)", "vantaColor": "#ff0000", "vantaBgColor": "#000000"
    },
    "light": {
      "bgColor": "#ffffff", "textPrimary": "#000000", "textSecondary": "#333333", "textTitle": "#000000",
      "borderColor": "#e6e6e6", "cardBg": "#ffffff", "cardBgHover": "#f2f2f2",
      "accentColor": "#0000ff", "accentColorTranslucent": "rgba(0, 0, 255, 0.5)",
      "accentGlow": "0 0 12px rgba(0, 0, 255, 0.2)", "accentShadow": "0 4px 14px 0 rgba(0, 0, 255, 0.15)",
      "accentHoverBg": "rgba(0, 0, 255, 0.1)", "scrollbarTrack": "#e6e6e6", "scrollbarThumb": "#cccccc",
      "scrollbarThumbHover": "#999999", "headerBg": "rgba(255, 255, 255, 0.85)",
      "vantaColor": "not-a-color", "vantaBgColor": "#ffffff"
    }
  }
}"##;

fn write_doc(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("portfolio.json");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_validate_bundled_document() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio: Avery Quinn"))
        .stdout(predicate::str::contains("No issues found."));
}

#[test]
fn test_validate_reports_issues_without_failing() {
    let data_dir = TempDir::new().unwrap();
    let doc = write_doc(&data_dir, MINIMAL_DOC);

    cli_cmd(&data_dir)
        .args(["validate", &doc])
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio: Sam Rivera"))
        .stdout(predicate::str::contains("themeConfig.light.vantaColor"))
        .stdout(predicate::str::contains("projects[0]"));
}

#[test]
fn test_validate_malformed_document_fails() {
    let data_dir = TempDir::new().unwrap();
    let doc = write_doc(&data_dir, "{ \"personalInfo\": ");

    cli_cmd(&data_dir)
        .args(["validate", &doc])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_validate_missing_file_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["validate", "/nonexistent/portfolio.json"])
        .assert()
        .failure();
}

// ============================================================================
// Palette Command Tests
// ============================================================================

#[test]
fn test_palette_dark_derivation() {
    let data_dir = TempDir::new().unwrap();
    let out = run_ok(
        &data_dir,
        &["palette", "--mode", "dark", "--bg", "#000000", "--text", "#ffffff", "--accent", "#ff0000"],
    );

    assert_eq!(field(&out, "bgColor").as_deref(), Some("#000000"));
    assert_eq!(field(&out, "textSecondary").as_deref(), Some("#b3b3b3"));
    assert_eq!(field(&out, "textTitle").as_deref(), Some("#e6e6e6"));
    assert_eq!(field(&out, "borderColor").as_deref(), Some("#666666"));
    assert_eq!(field(&out, "accentHoverBg").as_deref(), Some("rgba(255, 0, 0, 0.1)"));
    assert_eq!(field(&out, "headerBg").as_deref(), Some("rgba(0, 0, 0, 0.85)"));
    assert_eq!(out.lines().count(), 18);
}

#[test]
fn test_palette_light_card_is_white() {
    let data_dir = TempDir::new().unwrap();
    let out = run_ok(
        &data_dir,
        &["palette", "--mode", "light", "--bg", "#808080", "--text", "#000000", "--accent", "#0000ff"],
    );

    assert_eq!(field(&out, "cardBg").as_deref(), Some("#ffffff"));
    assert_eq!(
        field(&out, "accentGlow").as_deref(),
        Some("0 0 12px rgba(0, 0, 255, 0.2)")
    );
}

#[test]
fn test_palette_rejects_bad_color() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["palette", "--bg", "navy", "--text", "#ffffff", "--accent", "#ff0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid background color"));
}

#[test]
fn test_palette_rejects_bad_mode() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["palette", "--mode", "sepia", "--bg", "#000000", "--text", "#ffffff", "--accent", "#ff0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mode"));
}

// ============================================================================
// Css Command Tests
// ============================================================================

#[test]
fn test_css_has_both_scopes() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("css")
        .assert()
        .success()
        .stdout(predicate::str::contains(":root {"))
        .stdout(predicate::str::contains("html.light {"))
        .stdout(predicate::str::contains("    --bg-color: #0a192f;"));
}

#[test]
fn test_css_from_document() {
    let data_dir = TempDir::new().unwrap();
    let doc = write_doc(&data_dir, MINIMAL_DOC);

    cli_cmd(&data_dir)
        .args(["css", &doc])
        .assert()
        .success()
        .stdout(predicate::str::contains("    --accent-color: #ff0000;"))
        .stdout(predicate::str::contains("    --vanta-bg-color: #ffffff;"));
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_defaults_to_light() {
    let data_dir = TempDir::new().unwrap();
    let out = run_ok(&data_dir, &["theme", "show"]);

    assert_eq!(field(&out, "Mode").as_deref(), Some("light"));
    assert_eq!(field(&out, "Effect").as_deref(), Some("FOG"));
    assert_eq!(field(&out, "Customized").as_deref(), Some("no"));
}

#[test]
fn test_theme_toggle_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    let out = run_ok(&data_dir, &["theme", "show"]);
    assert_eq!(field(&out, "Mode").as_deref(), Some("dark"));

    cli_cmd(&data_dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn test_theme_set_mode() {
    let data_dir = TempDir::new().unwrap();

    run_ok(&data_dir, &["theme", "set", "dark"]);
    let out = run_ok(&data_dir, &["theme", "show"]);
    assert_eq!(field(&out, "Mode").as_deref(), Some("dark"));

    cli_cmd(&data_dir)
        .args(["theme", "set", "purple"])
        .assert()
        .failure();
}

#[test]
fn test_theme_color_rederives_and_persists() {
    let data_dir = TempDir::new().unwrap();

    let out = run_ok(&data_dir, &["theme", "color", "dark", "accentColor", "#ff0000"]);
    assert_eq!(field(&out, "accentColor").as_deref(), Some("#ff0000"));
    assert_eq!(field(&out, "accentHoverBg").as_deref(), Some("rgba(255, 0, 0, 0.1)"));
    // vantaColor tracked the old accent, so it follows
    assert_eq!(field(&out, "vantaColor").as_deref(), Some("#ff0000"));

    let show = run_ok(&data_dir, &["theme", "show"]);
    assert_eq!(field(&show, "Customized").as_deref(), Some("yes"));

    let css = run_ok(&data_dir, &["css"]);
    assert!(css.contains("    --accent-color: #ff0000;"));
}

#[test]
fn test_theme_color_rejects_unknown_key() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "color", "dark", "glowFactor", "#ff0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme key: glowFactor"));
}

#[test]
fn test_theme_color_rejects_non_hex_value() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "color", "dark", "bgColor", "black"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color: black"));

    let show = run_ok(&data_dir, &["theme", "show"]);
    assert_eq!(field(&show, "Customized").as_deref(), Some("no"));
}

#[test]
fn test_theme_reset_restores_defaults() {
    let data_dir = TempDir::new().unwrap();

    run_ok(&data_dir, &["theme", "color", "light", "bgColor", "#123456"]);
    cli_cmd(&data_dir)
        .args(["theme", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme reset to defaults."));

    let show = run_ok(&data_dir, &["theme", "show"]);
    assert_eq!(field(&show, "Customized").as_deref(), Some("no"));
    assert_eq!(field(&show, "bgColor").as_deref(), Some("#f8fafc"));
}

// ============================================================================
// Effect Command Tests
// ============================================================================

#[test]
fn test_effect_list_marks_current() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["effect", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* FOG"))
        .stdout(predicate::str::contains("  NET"))
        .stdout(predicate::str::contains("BIRDS (not offered in the customizer)"));
}

#[test]
fn test_effect_set_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["effect", "set", "waves"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Effect: WAVES"));

    cli_cmd(&data_dir)
        .args(["effect", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Effect: WAVES"));
}

#[test]
fn test_effect_set_unknown_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["effect", "set", "lava"])
        .assert()
        .failure();

    cli_cmd(&data_dir)
        .args(["effect", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Effect: FOG"));
}

// ============================================================================
// Ask Command Tests
// ============================================================================

#[test]
fn test_ask_without_key_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["ask", "What does Avery do?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_ask_prints_model_reply() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/cli-model:generateContent")
            .header("x-goog-api-key", "test-key")
            .body_contains("Avery Quinn")
            .body_contains("What does Avery do?");
        then.status(200).json_body(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Avery builds test automation." }] }
            }]
        }));
    });

    cli_cmd(&data_dir)
        .env("GEMINI_API_KEY", "test-key")
        .env("FOLIO_API_BASE", server.base_url())
        .args(["ask", "What does Avery do?", "--model", "cli-model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Avery builds test automation."));

    mock.assert();
}

#[test]
fn test_ask_rejects_blank_question() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "answered blank" }] } }]
        }));
    });

    cli_cmd(&data_dir)
        .env("GEMINI_API_KEY", "test-key")
        .env("FOLIO_API_BASE", server.base_url())
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Question is empty"))
        .stdout(predicate::str::contains("answered blank").not());

    mock.assert_hits(0);
}

#[test]
fn test_ask_reports_model_failure() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(500).body("backend unavailable");
    });

    cli_cmd(&data_dir)
        .env("GEMINI_API_KEY", "test-key")
        .env("FOLIO_API_BASE", server.base_url())
        .args(["ask", "Hello?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"));
}
