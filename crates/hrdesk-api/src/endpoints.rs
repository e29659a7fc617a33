use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://hr-all-in-one-api-5.onrender.com";
pub const ENV_API_BASE_URL: &str = "HRDESK_API_BASE_URL";

pub const BASE_URL_SOURCE_ENV: &str = "env";
pub const BASE_URL_SOURCE_DEFAULT: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseUrlError {
    #[error("base url must not be empty")]
    EmptyBaseUrl,
    #[error("base url must use http:// or https:// and include a host")]
    InvalidBaseUrl,
}

pub fn normalize_base_url(raw: &str) -> Result<String, BaseUrlError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(BaseUrlError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(BaseUrlError::InvalidBaseUrl);
    }
    let Some((_, remainder)) = trimmed.split_once("://") else {
        return Err(BaseUrlError::InvalidBaseUrl);
    };
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(BaseUrlError::InvalidBaseUrl);
    }
    Ok(trimmed.to_string())
}

/// Resolve the backend origin, preferring the environment override.
///
/// Returns the normalized origin plus a tag naming where it came from.
pub fn resolve_api_base_url() -> Result<(String, &'static str), BaseUrlError> {
    if let Some(base_url) = env_non_empty(ENV_API_BASE_URL) {
        return normalize_base_url(&base_url).map(|normalized| (normalized, BASE_URL_SOURCE_ENV));
    }
    normalize_base_url(DEFAULT_API_BASE_URL)
        .map(|normalized| (normalized, BASE_URL_SOURCE_DEFAULT))
}

/// The single source of truth for backend URLs.
///
/// Other crates reference operations by name only; URL literals live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, BaseUrlError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Build the registry from the environment override or the default origin.
    pub fn resolve() -> Result<Self, BaseUrlError> {
        let (base_url, _source) = resolve_api_base_url()?;
        Ok(Self { base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[must_use]
    pub fn register(&self) -> String {
        self.url("/register")
    }

    #[must_use]
    pub fn login(&self) -> String {
        self.url("/login")
    }

    #[must_use]
    pub fn update_user(&self) -> String {
        self.url("/users/update")
    }

    /// Session-authenticated profile of the current user.
    #[must_use]
    pub fn protected(&self) -> String {
        self.url("/protected")
    }

    #[must_use]
    pub fn profiles(&self) -> String {
        self.url("/profiles/")
    }

    #[must_use]
    pub fn update_profile(&self) -> String {
        self.url("/profiles/update-profile")
    }

    #[must_use]
    pub fn create_profile(&self) -> String {
        self.url("/profiles/create")
    }

    #[must_use]
    pub fn feedback_add(&self) -> String {
        self.url("/feedback/add")
    }

    #[must_use]
    pub fn feedback_view(&self) -> String {
        self.url("/feedback/view-feedback")
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
