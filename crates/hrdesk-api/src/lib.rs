//! Endpoint registry and JSON client for the hrdesk HR backend.
//!
//! Every component of the front-end resolves backend URLs through
//! [`Endpoints`]; nothing else hardcodes an origin or a path.

mod client;
mod endpoints;

pub use client::{
    ApiError, DEFAULT_TIMEOUT_MS, HrApiClient, ProtectedProfile, UserUpdatePayload,
};
pub use endpoints::{
    BASE_URL_SOURCE_DEFAULT, BASE_URL_SOURCE_ENV, BaseUrlError, DEFAULT_API_BASE_URL,
    ENV_API_BASE_URL, Endpoints, normalize_base_url, resolve_api_base_url,
};
