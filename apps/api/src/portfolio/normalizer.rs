//! Form submission → `PortfolioDocument`. Pure: no I/O, no side effects.

use crate::models::portfolio::{PortfolioDocument, Project, DEFAULT_THEME};
use crate::portfolio::form::{FormFields, PortfolioForm};

pub fn normalize_portfolio(fields: &FormFields) -> PortfolioDocument {
    normalize_form(PortfolioForm::extract(fields))
}

pub fn normalize_form(form: PortfolioForm) -> PortfolioDocument {
    let PortfolioForm {
        name,
        title,
        bio,
        email,
        linkedin,
        github,
        theme,
        skills,
        project_titles,
        project_descriptions,
    } = form;

    PortfolioDocument {
        name: name.unwrap_or_default(),
        title: title.unwrap_or_default(),
        bio: bio.unwrap_or_default(),
        email: email.unwrap_or_default(),
        linkedin: linkedin.unwrap_or_default(),
        github: github.unwrap_or_default(),
        theme: theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
        skills,
        projects: zip_projects(project_titles, project_descriptions),
    }
}

/// Pairs `titles[i]` with `descriptions[i]` (missing → empty) and drops pairs
/// whose title is blank. Titles are kept as submitted.
fn zip_projects(titles: Vec<String>, descriptions: Vec<String>) -> Vec<Project> {
    let mut descriptions = descriptions.into_iter();
    titles
        .into_iter()
        .map(|title| Project {
            title,
            description: descriptions.next().unwrap_or_default(),
        })
        .filter(Project::has_title)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, description: &str) -> Project {
        Project {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_empty_form_yields_defaults() {
        let doc = normalize_portfolio(&FormFields::default());
        assert_eq!(doc, PortfolioDocument::default());
        assert_eq!(doc.theme, "modern");
    }

    #[test]
    fn test_blank_title_project_is_dropped() {
        let fields = FormFields::from_pairs([
            ("projects[][title]", ""),
            ("projects[][description]", "x"),
            ("projects[][title]", "A"),
            ("projects[][description]", "y"),
        ]);
        let doc = normalize_portfolio(&fields);
        assert_eq!(doc.projects, vec![project("A", "y")]);
    }

    #[test]
    fn test_whitespace_only_title_is_blank() {
        let fields = FormFields::from_pairs([
            ("projects[][title]", "   \t"),
            ("projects[][title]", "Kept"),
            ("projects[][description]", "dropped with its title"),
            ("projects[][description]", "kept"),
        ]);
        let doc = normalize_portfolio(&fields);
        assert_eq!(doc.projects, vec![project("Kept", "kept")]);
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let fields = FormFields::from_pairs([
            ("projects[][title]", "A"),
            ("projects[][description]", "a"),
            ("projects[][title]", "B"),
            ("projects[][title]", "C"),
        ]);
        let doc = normalize_portfolio(&fields);
        assert_eq!(
            doc.projects,
            vec![project("A", "a"), project("B", ""), project("C", "")]
        );
    }

    #[test]
    fn test_extra_descriptions_are_ignored() {
        let fields = FormFields::from_pairs([
            ("projects[][title]", "A"),
            ("projects[][description]", "a"),
            ("projects[][description]", "orphan"),
        ]);
        assert_eq!(normalize_portfolio(&fields).projects, vec![project("A", "a")]);
    }

    #[test]
    fn test_title_is_not_trimmed_when_kept() {
        let fields = FormFields::from_pairs([("projects[][title]", "  Padded  ")]);
        assert_eq!(normalize_portfolio(&fields).projects[0].title, "  Padded  ");
    }

    #[test]
    fn test_scalars_take_first_value_and_theme_default() {
        let fields = FormFields::from_pairs([
            ("name", "Ada"),
            ("name", "Grace"),
            ("email", ""),
            ("skills[]", "Rust"),
            ("skills[]", "Math"),
        ]);
        let doc = normalize_portfolio(&fields);
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.email, "");
        assert_eq!(doc.theme, "modern");
        assert_eq!(doc.skills, ["Rust", "Math"]);
    }

    #[test]
    fn test_explicit_empty_theme_is_kept() {
        let fields = FormFields::from_pairs([("theme", "")]);
        assert_eq!(normalize_portfolio(&fields).theme, "");
    }

    #[test]
    fn test_same_input_same_output() {
        let fields = FormFields::from_pairs([
            ("name", "Ada"),
            ("projects[][title]", "A"),
            ("skills[]", "Rust"),
        ]);
        assert_eq!(normalize_portfolio(&fields), normalize_portfolio(&fields));
    }
}
