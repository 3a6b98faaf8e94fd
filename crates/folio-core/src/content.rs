//! Portfolio content model.
//!
//! The data document is loaded once at startup and never written back. Key
//! names match the JSON document (camelCase).

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::is_hex_color;
use crate::error::FolioError;
use crate::theme::{ThemeConfig, ThemeKey, ThemeMode};

/// The document compiled into the binary.
pub const BUNDLED_DATA: &str = include_str!("../assets/portfolio-data.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    /// Image URL; empty renders a placeholder.
    #[serde(default)]
    pub headshot: String,
    /// Downloadable CV, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    pub contact: ContactInfo,
}

impl PersonalInfo {
    /// First word of the name, used by the assistant persona.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<SkillItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// The whole data document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub about: Vec<String>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub certifications: Vec<CertificationItem>,
    pub theme_config: ThemeConfig,
}

impl PortfolioData {
    pub fn from_json_str(json: &str) -> Result<Self, FolioError> {
        serde_json::from_str(json).map_err(|e| FolioError::Content(e.to_string()))
    }

    /// Read and parse a data document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), name = %data.personal_info.name, "Loaded portfolio data");
        Ok(data)
    }

    /// The document compiled into the binary.
    pub fn bundled() -> Result<Self, FolioError> {
        Self::from_json_str(BUNDLED_DATA)
    }

    /// Non-fatal problems worth telling the author about.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        if self.personal_info.name.trim().is_empty() {
            issues.push(ContentIssue::new("personalInfo.name", "name is empty"));
        }

        for mode in ThemeMode::ALL {
            let colors = self.theme_config.colors(mode);
            for key in ThemeKey::BASE.iter().chain(ThemeKey::ANIMATION.iter()) {
                let value = colors.get(*key);
                if !is_hex_color(value) {
                    issues.push(ContentIssue::new(
                        format!("themeConfig.{}.{}", mode, key),
                        format!("'{}' is not a #rrggbb color; derived colors will not follow it", value),
                    ));
                }
            }
        }

        for (i, project) in self.projects.iter().enumerate() {
            if project.repo_url.is_none() && project.live_url.is_none() {
                issues.push(ContentIssue::new(
                    format!("projects[{}]", i),
                    format!("'{}' has neither repoUrl nor liveUrl", project.title),
                ));
            }
        }

        let mut seen = HashSet::new();
        for category in &self.skills {
            if !seen.insert(category.title.as_str()) {
                issues.push(ContentIssue::new(
                    "skills",
                    format!("duplicate category '{}'", category.title),
                ));
            }
        }

        issues
    }
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentIssue {
    pub path: String,
    pub message: String,
}

impl ContentIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Page sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    /// Navbar label
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    /// Element id the navbar links to
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Section heading
    pub fn heading(&self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Experience => "Work Experience",
            Section::Skills => "Technical Skills",
            Section::Projects => "Featured Projects",
            Section::Certifications => "Licenses & Certifications",
            Section::Contact => "Get In Touch",
        }
    }
}

/// Icon shown on a skill tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillIcon {
    Python,
    JavaScript,
    Java,
    TypeScript,
    Selenium,
    Cypress,
    Playwright,
    Pytest,
    Docker,
    Jenkins,
    Git,
    Aws,
    Sql,
    RobotFramework,
    Appium,
    Boto3,
    Jira,
    Placeholder,
}

impl SkillIcon {
    /// Whitespace is ignored, so "Robot Framework" finds `RobotFramework`.
    pub fn for_skill(name: &str) -> SkillIcon {
        let normalized: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        match normalized.as_str() {
            "Python" => SkillIcon::Python,
            "JavaScript" => SkillIcon::JavaScript,
            "Java" => SkillIcon::Java,
            "TypeScript" => SkillIcon::TypeScript,
            "Selenium" => SkillIcon::Selenium,
            "Cypress" => SkillIcon::Cypress,
            "Playwright" => SkillIcon::Playwright,
            "Pytest" => SkillIcon::Pytest,
            "Docker" => SkillIcon::Docker,
            "Jenkins" => SkillIcon::Jenkins,
            "Git" => SkillIcon::Git,
            "AWS" => SkillIcon::Aws,
            "SQL" => SkillIcon::Sql,
            "RobotFramework" => SkillIcon::RobotFramework,
            "Appium" => SkillIcon::Appium,
            "Boto3" => SkillIcon::Boto3,
            "JIRA" => SkillIcon::Jira,
            _ => SkillIcon::Placeholder,
        }
    }

    /// Short glyph drawn inside the tile badge.
    pub fn glyph(&self) -> &'static str {
        match self {
            SkillIcon::Python => "Py",
            SkillIcon::JavaScript => "JS",
            SkillIcon::Java => "Jv",
            SkillIcon::TypeScript => "TS",
            SkillIcon::Selenium => "Se",
            SkillIcon::Cypress => "Cy",
            SkillIcon::Playwright => "Pw",
            SkillIcon::Pytest => "Pt",
            SkillIcon::Docker => "Dk",
            SkillIcon::Jenkins => "Jk",
            SkillIcon::Git => "Git",
            SkillIcon::Aws => "AWS",
            SkillIcon::Sql => "SQL",
            SkillIcon::RobotFramework => "RF",
            SkillIcon::Appium => "Ap",
            SkillIcon::Boto3 => "B3",
            SkillIcon::Jira => "Ji",
            SkillIcon::Placeholder => "\u{2726}",
        }
    }

    /// Brand color for the badge; the placeholder uses the accent.
    pub fn tint(&self) -> &'static str {
        match self {
            SkillIcon::Python => "#3776ab",
            SkillIcon::JavaScript => "#f7df1e",
            SkillIcon::Java => "#e76f00",
            SkillIcon::TypeScript => "#3178c6",
            SkillIcon::Selenium => "#43b02a",
            SkillIcon::Cypress => "#69d3a7",
            SkillIcon::Playwright => "#2ead33",
            SkillIcon::Pytest => "#0a9edc",
            SkillIcon::Docker => "#2496ed",
            SkillIcon::Jenkins => "#d24939",
            SkillIcon::Git => "#f05032",
            SkillIcon::Aws => "#ff9900",
            SkillIcon::Sql => "#336791",
            SkillIcon::RobotFramework => "#00c0b5",
            SkillIcon::Appium => "#662d91",
            SkillIcon::Boto3 => "#ff9900",
            SkillIcon::Jira => "#0052cc",
            SkillIcon::Placeholder => "var(--accent-color)",
        }
    }
}
