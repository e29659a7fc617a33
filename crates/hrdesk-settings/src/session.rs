use hrdesk_api::ProtectedProfile;

/// In-memory mirror of the authenticated identity.
///
/// Owned by the settings controller and refreshed only through profile
/// fetches; the auth collaborator contributes the bearer token, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub phone: String,
}

impl From<ProtectedProfile> for SessionUser {
    fn from(profile: ProtectedProfile) -> Self {
        Self {
            id: profile.user_id,
            email: profile.email,
            phone: profile.phone,
        }
    }
}
