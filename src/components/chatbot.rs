//! AI assistant panel.
//!
//! The visible transcript is kept separately from the model session: the
//! session only holds turns the model actually answered, the transcript also
//! shows greetings and apologies.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::assistant::greeting;
use folio_core::{ChatMessage, PortfolioData, Transcript};
use folio_ui::{CloseButton, Input};
use pulldown_cmark::{html, Event, Options, Parser};

use crate::components::{PaperAirplaneIcon, SparklesIcon};
use crate::context::use_session;

/// Element the transcript scrolls to after every update.
const TRANSCRIPT_END_ID: &str = "chat-end";

/// Render a model reply as HTML.
///
/// Raw HTML in the reply is shown as text, never as markup.
fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn panel_class(open: bool) -> &'static str {
    if open {
        "chat-panel open"
    } else {
        "chat-panel"
    }
}

#[component]
fn Bubble(message: ChatMessage) -> Element {
    if message.is_user() {
        rsx! {
            div { class: "bubble-row user",
                div { class: "bubble user", p { "{message.content}" } }
            }
        }
    } else {
        let html = render_markdown(&message.content);
        rsx! {
            div { class: "bubble-row model",
                div { class: "bubble model markdown", dangerous_inner_html: "{html}" }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "bubble-row model",
            div { class: "bubble model",
                div { class: "typing",
                    span { class: "typing-dot" }
                    span { class: "typing-dot" }
                    span { class: "typing-dot" }
                }
            }
        }
    }
}

#[component]
pub fn Chatbot(open: Signal<bool>, data: Arc<PortfolioData>) -> Element {
    let mut open = open;
    let session = use_session();
    let mut transcript = use_signal(|| Transcript::new(greeting(&data)));
    let mut input = use_signal(String::new);

    // Keep the newest message in view
    use_effect(move || {
        let _ = transcript.read();
        let _ = document::eval(&format!(
            "var end = document.getElementById('{}'); if (end) {{ end.scrollIntoView({{ behavior: 'smooth' }}); }}",
            TRANSCRIPT_END_ID
        ));
    });

    let mut send = move || {
        let Some(text) = transcript.write().begin(&input()) else {
            return;
        };
        input.set(String::new());

        spawn(async move {
            let shared = session();
            let mut guard = shared.lock().await;
            let reply = match guard.as_mut() {
                Some(chat) => Some(chat.reply(&text).await),
                None => None,
            };
            drop(guard);
            match reply {
                Some(reply) => transcript.write().finish(reply),
                None => {
                    tracing::warn!("Assistant asked a question but no model is configured");
                    transcript.write().fail();
                }
            }
        });
    };

    let pending = transcript.read().is_pending();
    let can_send = transcript.read().can_send(&input());

    rsx! {
        div {
            class: panel_class(open()),
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "chatbot-title",
            div { class: "chat-card",
                header { class: "chat-header",
                    div { class: "chat-title-row",
                        SparklesIcon { class: "icon-md accent-text" }
                        h2 { id: "chatbot-title", class: "chat-title", "AI Assistant" }
                    }
                    CloseButton { label: "Close chat".to_string(), onclick: move |_| open.set(false) }
                }

                div { class: "chat-messages",
                    for (index, message) in transcript.read().messages().iter().enumerate() {
                        Bubble { key: "{index}", message: message.clone() }
                    }
                    if pending {
                        TypingIndicator {}
                    }
                    div { id: TRANSCRIPT_END_ID }
                }

                footer { class: "chat-footer",
                    form {
                        class: "chat-form",
                        onsubmit: move |e: FormEvent| {
                            e.prevent_default();
                            send();
                        },
                        Input {
                            value: input(),
                            oninput: move |s| input.set(s),
                            placeholder: "Ask about projects...".to_string(),
                            aria_label: "Chat input".to_string(),
                            disabled: pending,
                            class: "chat-input".to_string(),
                        }
                        button {
                            class: "send-btn",
                            r#type: "submit",
                            disabled: !can_send,
                            "aria-label": "Send message",
                            PaperAirplaneIcon { class: "icon-sm" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_render_markdown_lists_and_emphasis() {
        let html = render_markdown("**Skills**\n\n- Python\n- Rust");
        assert!(html.contains("<strong>Skills</strong>"));
        assert!(html.contains("<li>Python</li>"));
    }

    #[test]
    fn raw_html_in_replies_is_escaped() {
        let html = render_markdown("Sure! <img src=x onerror=\"dioxus.send('x')\"> **done**");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x"));
        assert!(html.contains("<strong>done</strong>"));

        let block = render_markdown("<script>alert(1)</script>\n\nafter");
        assert!(!block.contains("<script>"));
        assert!(block.contains("&lt;script&gt;"));
    }

    #[test]
    fn panel_is_hidden_until_opened() {
        assert_eq!(panel_class(false), "chat-panel");
        assert_eq!(panel_class(true), "chat-panel open");
    }
}
