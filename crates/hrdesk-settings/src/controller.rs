use hrdesk_api::ApiError;
use tracing::warn;

use crate::form::{
    MSG_NO_CHANGES, MSG_UPDATE_FAILURE_FALLBACK, MSG_UPDATE_SUCCESS_FALLBACK, SettingsField,
    SettingsForm, SettingsTab, ValidationErrors, build_update_payload, validate,
};
use crate::session::SessionUser;
use crate::transport::SettingsTransport;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingsPhase {
    /// Initial profile fetch in flight; the form is not interactive yet.
    LoadingUser,
    Idle,
    /// An update request is in flight; the submit control is disabled.
    Submitting,
}

/// Screens the settings surface can request navigation to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SurfaceRoute {
    Profile,
}

/// State machine behind the account-settings screen.
///
/// Single owner of all session-derived state: the auth collaborator supplies
/// only the bearer token, and the session mirror is reconciled through
/// exactly one fetch on load plus a silent refresh after each successful
/// update. Methods take `&mut self`, so a completion can never write into a
/// screen that no longer exists.
pub struct SettingsController<T> {
    transport: T,
    token: Option<String>,
    pub phase: SettingsPhase,
    pub active_tab: SettingsTab,
    pub form: SettingsForm,
    pub errors: ValidationErrors,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    pub session: Option<SessionUser>,
}

impl<T: SettingsTransport> SettingsController<T> {
    /// An empty or absent token means "not authenticated": no initial fetch
    /// happens and the controller starts idle.
    pub fn new(transport: T, token: Option<String>) -> Self {
        let token = token
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let phase = if token.is_some() {
            SettingsPhase::LoadingUser
        } else {
            SettingsPhase::Idle
        };

        Self {
            transport,
            token,
            phase,
            active_tab: SettingsTab::Personal,
            form: SettingsForm::default(),
            errors: ValidationErrors::default(),
            success_message: None,
            error_message: None,
            session: None,
        }
    }

    /// Fetch the authenticated profile and seed the form from it.
    ///
    /// A fetch failure is logged and leaves the form at its defaults; the
    /// screen still becomes interactive so the user can attempt updates.
    pub async fn load(&mut self) {
        let Some(token) = self.token.clone() else {
            self.phase = SettingsPhase::Idle;
            return;
        };

        match self.transport.fetch_profile(&token).await {
            Ok(profile) => {
                let user = SessionUser::from(profile);
                self.form.email = user.email.clone();
                self.form.phone = user.phone.clone();
                self.session = Some(user);
            }
            Err(error) => {
                warn!(error = %error, "failed to load user profile");
            }
        }

        self.phase = SettingsPhase::Idle;
    }

    /// Apply a keystroke: update the draft and clear that field's error only.
    pub fn set_field(&mut self, field: SettingsField, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
        self.errors.clear(field);
    }

    /// Switch tabs. Clears the banner; the draft and any validation errors
    /// from the other tab survive.
    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
        self.clear_messages();
    }

    pub fn clear_messages(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }

    /// Pure navigation request; no local state effect.
    #[must_use]
    pub fn back_route(&self) -> SurfaceRoute {
        SurfaceRoute::Profile
    }

    /// Validate the active tab and, if clean, send the minimal diff.
    pub async fn submit(&mut self) {
        let errors = validate(self.active_tab, &self.form, self.session.as_ref());
        let valid = errors.is_empty();
        self.errors = errors;
        if !valid {
            return;
        }

        self.clear_messages();
        self.phase = SettingsPhase::Submitting;

        let payload = build_update_payload(&self.form, self.session.as_ref());
        if payload.is_empty() {
            self.error_message = Some(MSG_NO_CHANGES.to_string());
            self.phase = SettingsPhase::Idle;
            return;
        }

        let token = self.token.clone().unwrap_or_default();
        match self.transport.update_user(&token, &payload).await {
            Ok(message) => {
                self.success_message =
                    Some(message.unwrap_or_else(|| MSG_UPDATE_SUCCESS_FALLBACK.to_string()));

                if self.active_tab == SettingsTab::Security {
                    self.form.old_password.clear();
                    self.form.new_password.clear();
                }

                self.refresh_session(&token).await;
            }
            Err(error) => {
                self.error_message = Some(update_error_message(&error));
            }
        }

        self.phase = SettingsPhase::Idle;
    }

    /// Silent refresh of the session mirror after a successful update.
    /// Failures are logged and never touch the banner already shown.
    async fn refresh_session(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        match self.transport.fetch_profile(token).await {
            Ok(profile) => self.session = Some(SessionUser::from(profile)),
            Err(error) => {
                warn!(error = %error, "post-update profile refresh failed");
            }
        }
    }
}

fn update_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http {
            detail: Some(detail),
            ..
        } => detail.clone(),
        ApiError::Http { .. } => MSG_UPDATE_FAILURE_FALLBACK.to_string(),
        other => other.to_string(),
    }
}
