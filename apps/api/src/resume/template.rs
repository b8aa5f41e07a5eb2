use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Resume editor layouts a user can pick from the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeTemplate {
    Professional,
    Creative,
    Modern,
    Technical,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown resume template: {0}")]
pub struct UnknownTemplate(pub String);

impl ResumeTemplate {
    pub const ALL: [ResumeTemplate; 4] = [
        ResumeTemplate::Professional,
        ResumeTemplate::Creative,
        ResumeTemplate::Modern,
        ResumeTemplate::Technical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResumeTemplate::Professional => "professional",
            ResumeTemplate::Creative => "creative",
            ResumeTemplate::Modern => "modern",
            ResumeTemplate::Technical => "technical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResumeTemplate::Professional => "Professional",
            ResumeTemplate::Creative => "Creative",
            ResumeTemplate::Modern => "Modern",
            ResumeTemplate::Technical => "Technical",
        }
    }

    pub fn editor_path(self) -> String {
        format!("/resume/create/{}", self.as_str())
    }
}

impl fmt::Display for ResumeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the path segment.
impl FromStr for ResumeTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResumeTemplate::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}
