use std::collections::BTreeMap;

use hrdesk_api::UserUpdatePayload;

use crate::session::SessionUser;

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PHONE_TOO_LONG: &str = "Phone number is too long";
pub const MSG_OLD_PASSWORD_REQUIRED: &str = "Old password is required when setting new password";
pub const MSG_NEW_PASSWORD_REQUIRED: &str = "New password is required";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MSG_NO_CHANGES: &str = "No changes detected";
pub const MSG_UPDATE_SUCCESS_FALLBACK: &str = "Information updated successfully!";
pub const MSG_UPDATE_FAILURE_FALLBACK: &str = "Failed to update user information";

pub const PHONE_MAX_LEN: usize = 15;
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingsTab {
    Personal,
    Security,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum SettingsField {
    Email,
    Phone,
    OldPassword,
    NewPassword,
}

impl SettingsField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::OldPassword => "old_password",
            Self::NewPassword => "new_password",
        }
    }
}

/// Editable draft of the settings form.
///
/// Starts empty and is overwritten with the fetched session values on load;
/// afterwards it only changes through user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub email: String,
    pub phone: String,
    pub old_password: String,
    pub new_password: String,
}

impl SettingsForm {
    pub fn field_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::Email => &mut self.email,
            SettingsField::Phone => &mut self.phone,
            SettingsField::OldPassword => &mut self.old_password,
            SettingsField::NewPassword => &mut self.new_password,
        }
    }
}

/// Field-scoped validation messages, recomputed wholesale at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<SettingsField, String>,
}

impl ValidationErrors {
    pub fn set(&mut self, field: SettingsField, message: &str) {
        self.entries.insert(field, message.to_string());
    }

    #[must_use]
    pub fn get(&self, field: SettingsField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Editing a field clears its error only; other fields keep theirs.
    pub fn clear(&mut self, field: SettingsField) {
        self.entries.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Validate the draft for the active tab against the session mirror.
///
/// Runs only at submit time; success means the returned map is empty.
#[must_use]
pub fn validate(
    tab: SettingsTab,
    form: &SettingsForm,
    session: Option<&SessionUser>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    match tab {
        SettingsTab::Personal => {
            // An email identical to the session value is never re-validated.
            if !form.email.is_empty()
                && session.map(|user| user.email.as_str()) != Some(form.email.as_str())
                && !is_plausible_email(&form.email)
            {
                errors.set(SettingsField::Email, MSG_INVALID_EMAIL);
            }

            if !form.phone.is_empty() && form.phone.chars().count() > PHONE_MAX_LEN {
                errors.set(SettingsField::Phone, MSG_PHONE_TOO_LONG);
            }
        }
        SettingsTab::Security => {
            if !form.old_password.is_empty() || !form.new_password.is_empty() {
                if form.old_password.is_empty() && !form.new_password.is_empty() {
                    errors.set(SettingsField::OldPassword, MSG_OLD_PASSWORD_REQUIRED);
                }
                if !form.old_password.is_empty() && form.new_password.is_empty() {
                    errors.set(SettingsField::NewPassword, MSG_NEW_PASSWORD_REQUIRED);
                }
                // Applies even when the old password is also missing.
                if !form.new_password.is_empty()
                    && form.new_password.chars().count() < PASSWORD_MIN_LEN
                {
                    errors.set(SettingsField::NewPassword, MSG_PASSWORD_TOO_SHORT);
                }
            }
        }
    }

    errors
}

/// Shape check: one or more non-whitespace/non-`@` characters, an `@`, one or
/// more, a `.`, one or more. Deliverability is the backend's problem.
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    let Some((local, rest)) = value.split_once('@') else {
        return false;
    };
    let Some((domain, tld)) = rest.rsplit_once('.') else {
        return false;
    };
    for part in [local, domain, tld] {
        if part.is_empty() || part.chars().any(|ch| ch.is_whitespace() || ch == '@') {
            return false;
        }
    }
    true
}

/// Build the minimal diff the user-update endpoint expects.
///
/// Email rides only when non-empty and different from the session value;
/// phone rides whenever it differs (clearing a phone is a real change);
/// each password rides independently when populated.
#[must_use]
pub fn build_update_payload(
    form: &SettingsForm,
    session: Option<&SessionUser>,
) -> UserUpdatePayload {
    let mut payload = UserUpdatePayload::default();

    if !form.email.is_empty()
        && session.map(|user| user.email.as_str()) != Some(form.email.as_str())
    {
        payload.email = Some(form.email.clone());
    }

    if session.map(|user| user.phone.as_str()) != Some(form.phone.as_str()) {
        payload.phone = Some(form.phone.clone());
    }

    if !form.old_password.is_empty() {
        payload.old_password = Some(form.old_password.clone());
    }
    if !form.new_password.is_empty() {
        payload.new_password = Some(form.new_password.clone());
    }

    payload
}
