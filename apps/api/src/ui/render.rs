//! HTML for the remix page.
//!
//! Rendered with maud; every dynamic value is escaped. Input and candidates
//! travel inside one form that every button submits, so each page is
//! complete on its own.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::post::SavedPost;
use crate::workspace::{share_intent_url, Workspace};

const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:#1f2937;background:#f0fdf4;padding:2rem 1rem}
.layout{max-width:1100px;margin:0 auto;display:flex;gap:2rem;align-items:flex-start}
main{flex:1;min-width:0}
aside{width:320px;flex-shrink:0}
h1{font-size:2.25rem;text-align:center}
.tagline{text-align:center;color:#4b5563;margin-bottom:2rem}
.card{background:#fff;border-radius:12px;padding:1.5rem;margin-bottom:1.5rem}
label{display:block;font-size:.9rem;font-weight:500;margin-bottom:.75rem}
textarea{width:100%;padding:1rem;border:1px solid #e5e7eb;border-radius:8px;font:inherit;min-height:150px}
.candidate textarea{min-height:90px}
button{border:none;border-radius:8px;color:#fff;background:#16a34a;font:inherit;font-weight:500;cursor:pointer;padding:.6rem 1.2rem}
button:disabled{background:#4ade80;cursor:not-allowed}
.submit{width:100%;padding:1rem}
.error{background:#fef2f2;color:#b91c1c;padding:1rem;border-radius:8px;margin-bottom:1.5rem;font-size:.9rem}
.placeholder{color:#6b7280;font-style:italic}
.actions{display:flex;gap:.75rem;margin-top:.75rem;align-items:center}
.share{color:#1d9bf0;text-decoration:none;font-weight:500}
.saved{border-bottom:1px solid #e5e7eb;padding:.75rem 0;white-space:pre-wrap;word-break:break-word}
.saved time{display:block;font-size:.75rem;color:#6b7280}
.danger{background:#dc2626;padding:.3rem .8rem;font-size:.8rem;margin-top:.4rem}
"#;

/// Id of the one form that carries the whole workspace on every submit.
const WORKSPACE_FORM: &str = "workspace";

/// Makes the input read-only, then disables every submit control. The disable
/// runs after the entry list is built so the pressed button's value is sent.
const ON_SUBMIT: &str = "this.elements.text.readOnly=true;var f=this;\
setTimeout(function(){for(var e of f.elements){if(e.type==='submit')e.disabled=true}},0)";

pub fn page(ws: &Workspace) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Content Remixer" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div.layout {
                    main {
                        h1 { "Content Remixer" }
                        p.tagline { "Transform your text into something creative and engaging" }
                        form id=(WORKSPACE_FORM) method="post" action="/" onsubmit=(ON_SUBMIT) {
                            (input_card(ws))
                            @if let Some(error) = &ws.error {
                                div.error role="alert" { (error) }
                            }
                            (candidates(ws))
                        }
                    }
                    (saved_panel(ws))
                }
            }
        }
    }
}

fn input_card(ws: &Workspace) -> Markup {
    html! {
        section.card {
            label for="text" { "Input Text" }
            textarea id="text" name="text" placeholder="Paste your text here..." readonly[ws.loading] { (ws.input) }
            div.actions {
                button.submit type="submit" disabled[ws.loading] { "Remix Text" }
            }
        }
    }
}

// Every candidate is posted back as a repeated `candidate` field in page
// order; a Save button names its index.
fn candidates(ws: &Workspace) -> Markup {
    html! {
        section.card {
            label { "Remixed Output" }
            @if ws.candidates.is_empty() {
                p.placeholder { "Your remixed posts will appear here..." }
            }
            @for (index, candidate) in ws.candidates.iter().enumerate() {
                div.candidate {
                    textarea name="candidate" aria-label=(format!("Candidate {}", index + 1)) readonly[ws.loading] { (candidate) }
                    div.actions {
                        button type="submit" formaction="/posts" name="save" value=(index) disabled[ws.loading] { "Save" }
                        a.share href=(share_intent_url(candidate)) target="_blank" rel="noopener noreferrer" { "Share" }
                    }
                }
            }
        }
    }
}

fn saved_panel(ws: &Workspace) -> Markup {
    html! {
        aside.card {
            label { "Saved Posts" }
            @if ws.saved.is_empty() {
                p.placeholder { "Nothing saved yet." }
            }
            @for post in &ws.saved {
                div.saved {
                    (post.text)
                    (created_at(post))
                    // Submits the workspace form so input and candidates survive the delete
                    button.danger type="submit" form=(WORKSPACE_FORM) formaction=(format!("/posts/{}/delete", post.id)) disabled[ws.loading] { "Delete" }
                }
            }
        }
    }
}

fn created_at(post: &SavedPost) -> Markup {
    html! {
        time datetime=(post.created_at.to_rfc3339()) {
            (post.created_at.format("%Y-%m-%d %H:%M UTC").to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_empty_workspace_shows_placeholders() {
        let html = page(&Workspace::default()).into_string();
        assert!(html.contains("Your remixed posts will appear here..."));
        assert!(html.contains("Nothing saved yet."));
        assert!(!html.contains("role=\"alert\""));
    }

    fn three_candidates() -> Workspace {
        Workspace::restore(
            "draft post",
            vec!["one".to_string(), "two".to_string(), "three".to_string()],
        )
    }

    #[test]
    fn test_one_save_button_per_candidate() {
        let html = page(&three_candidates()).into_string();
        assert_eq!(html.matches("<form").count(), 1);
        assert_eq!(html.matches("name=\"candidate\"").count(), 3);
        assert_eq!(html.matches("formaction=\"/posts\"").count(), 3);
        assert!(html.contains("name=\"save\" value=\"2\""));
        assert!(html.contains(">draft post</textarea>"));
        assert!(html.contains("intent/tweet?text=three"));
    }

    #[test]
    fn test_blank_candidate_keeps_its_slot() {
        let ws = Workspace::restore(
            "",
            vec!["one".to_string(), String::new(), "three".to_string()],
        );
        let html = page(&ws).into_string();
        assert_eq!(html.matches("name=\"candidate\"").count(), 3);
        assert!(html.contains("aria-label=\"Candidate 2\"></textarea>"));
    }

    #[test]
    fn test_submit_script_locks_input() {
        let html = page(&Workspace::default()).into_string();
        assert!(html.contains("this.elements.text.readOnly=true"));
        assert!(html.contains("e.disabled=true"));
    }

    #[test]
    fn test_loading_workspace_renders_read_only() {
        let mut ws = three_candidates();
        assert!(!page(&ws).into_string().contains("readonly"));

        ws.begin_submit();
        assert!(ws.loading);
        let html = page(&ws).into_string();
        assert_eq!(html.matches("readonly").count(), 4);
        assert!(html.contains("type=\"submit\" disabled>Remix Text"));
    }

    #[test]
    fn test_dynamic_text_is_escaped() {
        let mut ws = Workspace::with_input("<script>alert(1)</script>");
        ws.fail("bad <b>input</b>");
        let html = page(&ws).into_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("bad &lt;b&gt;input&lt;/b&gt;"));
    }

    #[test]
    fn test_saved_posts_delete_through_workspace_form() {
        let mut ws = Workspace::default();
        let post = SavedPost {
            id: Uuid::new_v4(),
            text: "kept post".to_string(),
            created_at: Utc::now(),
        };
        ws.set_saved(vec![post.clone()]);
        let html = page(&ws).into_string();
        assert!(html.contains("kept post"));
        assert!(html.contains(&format!(
            "form=\"workspace\" formaction=\"/posts/{}/delete\"",
            post.id
        )));
    }
}
