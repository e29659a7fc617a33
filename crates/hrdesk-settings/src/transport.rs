use async_trait::async_trait;
use hrdesk_api::{ApiError, HrApiClient, ProtectedProfile, UserUpdatePayload};

/// Backend seam for the settings screen.
///
/// The production implementation is [`HrApiClient`]; tests supply fakes that
/// script responses and record calls.
#[async_trait]
pub trait SettingsTransport {
    async fn fetch_profile(&self, token: &str) -> Result<ProtectedProfile, ApiError>;

    async fn update_user(
        &self,
        token: &str,
        payload: &UserUpdatePayload,
    ) -> Result<Option<String>, ApiError>;
}

#[async_trait]
impl SettingsTransport for HrApiClient {
    async fn fetch_profile(&self, token: &str) -> Result<ProtectedProfile, ApiError> {
        self.fetch_protected_profile(token).await
    }

    async fn update_user(
        &self,
        token: &str,
        payload: &UserUpdatePayload,
    ) -> Result<Option<String>, ApiError> {
        HrApiClient::update_user(self, token, payload).await
    }
}
