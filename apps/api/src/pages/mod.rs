//! Minimal HTML shells for the builder pages.
//!
//! Each page embeds its document as JSON in a `<script type="application/json">`
//! block for the client-side editors; the portfolio view also renders the
//! visible fields server-side.

use anyhow::{Context, Result};
use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_script, encode_text};
use serde::Serialize;

use crate::models::portfolio::PortfolioDocument;
use crate::resume::template::ResumeTemplate;

const LANDING: &str = include_str!("../../templates/index.html");
const PORTFOLIO_EDITOR: &str = include_str!("../../templates/portfolio_editor.html");
const PORTFOLIO_VIEW: &str = include_str!("../../templates/portfolio.html");
const RESUME_TEMPLATES: &str = include_str!("../../templates/resume_templates.html");
const RESUME_EDITOR: &str = include_str!("../../templates/resume_editor.html");

pub fn landing() -> Html<&'static str> {
    Html(LANDING)
}

pub fn portfolio_editor() -> Html<&'static str> {
    Html(PORTFOLIO_EDITOR)
}

pub fn portfolio_view(portfolio: &PortfolioDocument) -> Result<Html<String>> {
    let contact = [
        ("email", &portfolio.email),
        ("linkedin", &portfolio.linkedin),
        ("github", &portfolio.github),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(class, value)| format!("        <li class=\"{class}\">{}</li>", encode_text(value)))
    .collect::<Vec<_>>()
    .join("\n");

    let skills = portfolio
        .skills
        .iter()
        .map(|skill| format!("        <li>{}</li>", encode_text(skill)))
        .collect::<Vec<_>>()
        .join("\n");

    let projects = portfolio
        .projects
        .iter()
        .map(|p| {
            format!(
                "      <article class=\"project\">\n        <h4>{}</h4>\n        <p>{}</p>\n      </article>",
                encode_text(&p.title),
                encode_text(&p.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let name = encode_text(&portfolio.name);
    let title = encode_text(&portfolio.title);
    let bio = encode_text(&portfolio.bio);
    let theme = encode_double_quoted_attribute(&portfolio.theme);
    let data = embed_json(portfolio)?;
    Ok(Html(fill(
        PORTFOLIO_VIEW,
        &[
            ("name", &*name),
            ("title", &*title),
            ("bio", &*bio),
            ("theme", &*theme),
            ("contact", contact.as_str()),
            ("skills", skills.as_str()),
            ("projects", projects.as_str()),
            ("data", data.as_str()),
        ],
    )))
}

pub fn resume_templates() -> Html<String> {
    let templates = ResumeTemplate::ALL
        .iter()
        .map(|t| {
            format!(
                "      <li><a href=\"{}\">{}</a></li>",
                t.editor_path(),
                t.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    Html(fill(RESUME_TEMPLATES, &[("templates", templates.as_str())]))
}

pub fn resume_editor<T: Serialize>(template: ResumeTemplate, resume: &T) -> Result<Html<String>> {
    let data = embed_json(resume)?;
    Ok(Html(fill(
        RESUME_EDITOR,
        &[
            ("template", template.as_str()),
            ("label", template.label()),
            ("data", data.as_str()),
        ],
    )))
}

/// JSON safe to place inside a `<script>` element.
fn embed_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("Failed to encode page data")?;
    Ok(encode_script(&json).into_owned())
}

/// Replaces each `{{key}}` in one pass, so substituted values are never
/// rescanned. Unknown keys are left in place.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::Project;

    #[test]
    fn test_fill_does_not_rescan_values() {
        let out = fill("{{a}}-{{b}}", &[("a", "{{b}}"), ("b", "x")]);
        assert_eq!(out, "{{b}}-x");
    }

    #[test]
    fn test_fill_keeps_unknown_and_unclosed_markers() {
        assert_eq!(fill("{{nope}} {{a", &[("a", "x")]), "{{nope}} {{a");
    }

    #[test]
    fn test_portfolio_view_escapes_user_content() {
        let doc = PortfolioDocument {
            name: "<script>alert(1)</script>".to_string(),
            projects: vec![Project {
                title: "A & B".to_string(),
                description: String::new(),
            }],
            ..PortfolioDocument::default()
        };
        let Html(page) = portfolio_view(&doc).unwrap();
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("A &amp; B"));
        // Only the page's own two script elements close.
        assert_eq!(page.matches("</script>").count(), 2);
        assert!(page.contains("data-theme=\"modern\""));
    }

    #[test]
    fn test_resume_editor_embeds_data_and_template() {
        let data = serde_json::json!({"personalInfo": {"name": "Ada"}});
        let Html(page) = resume_editor(ResumeTemplate::Technical, &data).unwrap();
        assert!(page.contains("data-template=\"technical\""));
        assert!(page.contains("Technical resume"));
        assert!(page.contains(r#""personalInfo":{"name":"Ada"}"#));
    }

    #[test]
    fn test_gallery_links_every_template() {
        let Html(page) = resume_templates();
        for t in ResumeTemplate::ALL {
            assert!(page.contains(&t.editor_path()));
        }
    }
}
