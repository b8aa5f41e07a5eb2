use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shape returned by `/api/get-resume` before anything has been saved.
///
/// Saved resumes are never parsed into this type: the store keeps the
/// submitted JSON verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: Map<String, Value>,
    pub experience: Vec<Value>,
    pub education: Vec<Value>,
    pub skills: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resume_serializes_to_empty_shape() {
        let value = serde_json::to_value(ResumeDocument::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "personalInfo": {},
                "experience": [],
                "education": [],
                "skills": [],
            })
        );
    }
}
