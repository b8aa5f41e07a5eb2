use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

use crate::errors::AppError;
use crate::models::portfolio::PortfolioDocument;
use crate::portfolio::normalizer::normalize_portfolio;

pub const FIELD_NAME: &str = "name";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_BIO: &str = "bio";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_LINKEDIN: &str = "linkedin";
pub const FIELD_GITHUB: &str = "github";
pub const FIELD_THEME: &str = "theme";
pub const FIELD_SKILLS: &str = "skills[]";
pub const FIELD_PROJECT_TITLES: &str = "projects[][title]";
pub const FIELD_PROJECT_DESCRIPTIONS: &str = "projects[][description]";

/// Submitted form fields, each name mapped to every value sent for it in
/// submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, Vec<String>)>,
}

impl FormFields {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = FormFields::default();
        for (name, value) in pairs {
            form.push(name.into(), value.into());
        }
        form
    }

    fn push(&mut self, name: String, value: String) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value),
            None => self.fields.push((name, vec![value])),
        }
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.all(name).first().map(String::as_str)
    }

    pub fn all(&self, name: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }
}

/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
/// File parts of a multipart body are skipped.
#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let mut multipart = Multipart::from_request(req, state).await?;
            let mut pairs = Vec::new();
            while let Some(field) = multipart.next_field().await? {
                if field.file_name().is_some() {
                    continue;
                }
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                pairs.push((name, field.text().await?));
            }
            return Ok(FormFields::from_pairs(pairs));
        }

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
        Ok(FormFields::from_pairs(pairs))
    }
}

fn is_multipart(req: &Request) -> bool {
    content_type_starts_with(req, "multipart/form-data")
}

fn content_type_starts_with(req: &Request, prefix: &str) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with(prefix))
}

/// A normalized portfolio from either a form body or a JSON body.
///
/// JSON documents may omit any field; missing fields take their defaults and
/// untitled projects are dropped, same as for form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSubmission(pub PortfolioDocument);

#[async_trait]
impl<S> FromRequest<S> for PortfolioSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if content_type_starts_with(&req, "application/json") {
            let Json(document) = Json::<PortfolioDocument>::from_request(req, state).await?;
            return Ok(PortfolioSubmission(document.without_untitled_projects()));
        }

        let fields = FormFields::from_request(req, state).await?;
        Ok(PortfolioSubmission(normalize_portfolio(&fields)))
    }
}

/// Typed view of a portfolio form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioForm {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub theme: Option<String>,
    pub skills: Vec<String>,
    pub project_titles: Vec<String>,
    pub project_descriptions: Vec<String>,
}

impl PortfolioForm {
    pub fn extract(fields: &FormFields) -> Self {
        let scalar = |name: &str| fields.first(name).map(str::to_owned);
        PortfolioForm {
            name: scalar(FIELD_NAME),
            title: scalar(FIELD_TITLE),
            bio: scalar(FIELD_BIO),
            email: scalar(FIELD_EMAIL),
            linkedin: scalar(FIELD_LINKEDIN),
            github: scalar(FIELD_GITHUB),
            theme: scalar(FIELD_THEME),
            skills: fields.all(FIELD_SKILLS).to_vec(),
            project_titles: fields.all(FIELD_PROJECT_TITLES).to_vec(),
            project_descriptions: fields.all(FIELD_PROJECT_DESCRIPTIONS).to_vec(),
        }
    }
}
