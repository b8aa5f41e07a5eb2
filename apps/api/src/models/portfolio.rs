use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "modern";

/// The single persisted portfolio. Overwritten on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioDocument {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub theme: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

impl Default for PortfolioDocument {
    fn default() -> Self {
        PortfolioDocument {
            name: String::new(),
            title: String::new(),
            bio: String::new(),
            email: String::new(),
            linkedin: String::new(),
            github: String::new(),
            theme: DEFAULT_THEME.to_string(),
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Project {
    /// A project is kept only if its title has visible content.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

impl PortfolioDocument {
    /// Drops projects with a blank title, keeping the rest in order.
    pub fn without_untitled_projects(mut self) -> Self {
        self.projects.retain(Project::has_title);
        self
    }
}
