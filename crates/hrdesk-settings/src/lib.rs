//! Account-settings screen state for the hrdesk front-end.
//!
//! The [`SettingsController`] owns everything the settings screen renders:
//! the editable form draft, per-field validation errors, the transient
//! success/error banner, and the in-memory mirror of the authenticated user.
//! It talks to the backend through the [`SettingsTransport`] seam so tests
//! can drive it without a network.

mod controller;
mod form;
mod session;
mod transport;

pub use controller::{SettingsController, SettingsPhase, SurfaceRoute};
pub use form::{
    MSG_INVALID_EMAIL, MSG_NEW_PASSWORD_REQUIRED, MSG_NO_CHANGES, MSG_OLD_PASSWORD_REQUIRED,
    MSG_PASSWORD_TOO_SHORT, MSG_PHONE_TOO_LONG, MSG_UPDATE_FAILURE_FALLBACK,
    MSG_UPDATE_SUCCESS_FALLBACK, PASSWORD_MIN_LEN, PHONE_MAX_LEN, SettingsField, SettingsForm,
    SettingsTab, ValidationErrors, build_update_payload, is_plausible_email, validate,
};
pub use session::SessionUser;
pub use transport::SettingsTransport;
