// src/edgar/session.rs
use crate::utils::error::EdgarError;
use reqwest::header::{self, HeaderMap, HeaderValue};

pub const SEC_SEARCH_URL: &str = "https://www.sec.gov/cgi-bin/browse-edgar";
pub const SEC_SUBMISSIONS_URL: &str = "https://data.sec.gov/submissions";
pub const SEC_ARCHIVE_URL: &str = "https://www.sec.gov/Archives/edgar/data";

pub const ORGANIZATION_ENV: &str = "SEC_API_ORGANIZATION";
pub const EMAIL_ENV: &str = "SEC_API_EMAIL";

/// Organization and contact email sent in the User-Agent.
/// SEC rejects requests without them, see https://www.sec.gov/os/accessing-edgar-data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgarIdentity {
    organization: String,
    email: String,
}

impl EdgarIdentity {
    pub fn new(organization: Option<String>, email: Option<String>) -> Result<Self, EdgarError> {
        let organization = required(organization, "organization", ORGANIZATION_ENV)?;
        let email = required(email, "contact email", EMAIL_ENV)?;
        Ok(Self { organization, email })
    }

    pub fn user_agent(&self) -> String {
        format!("{} {}", self.organization, self.email)
    }
}

fn required(value: Option<String>, what: &str, env_var: &str) -> Result<String, EdgarError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EdgarError::Configuration(format!(
            "missing SEC API {} (pass it explicitly or set {})",
            what, env_var
        ))),
    }
}

/// Base URLs of the three EDGAR services. Overridable for tests and mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgarEndpoints {
    pub search_url: String,
    pub submissions_url: String,
    pub archive_url: String,
}

impl Default for EdgarEndpoints {
    fn default() -> Self {
        Self {
            search_url: SEC_SEARCH_URL.to_string(),
            submissions_url: SEC_SUBMISSIONS_URL.to_string(),
            archive_url: SEC_ARCHIVE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EdgarConfig {
    pub identity: EdgarIdentity,
    pub endpoints: EdgarEndpoints,
}

impl EdgarConfig {
    pub fn new(identity: EdgarIdentity) -> Self {
        Self {
            identity,
            endpoints: EdgarEndpoints::default(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: EdgarEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

/// Creates a reqwest client configured for EDGAR interaction. No request is sent.
pub fn build_session(identity: &EdgarIdentity) -> Result<reqwest::Client, EdgarError> {
    let user_agent = HeaderValue::from_str(&identity.user_agent()).map_err(|e| {
        EdgarError::Configuration(format!("invalid User-Agent '{}': {}", identity.user_agent(), e))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, user_agent);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));

    tracing::debug!("Using User-Agent: {}", identity.user_agent());

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(EdgarError::from)
}
