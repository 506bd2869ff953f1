//! Destination credentials

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Token-based credentials for the destination system
///
/// Produced by the surrounding auth flow and handed to the importer with
/// every orchestration call; the credential factory turns these into an
/// authenticated storage client. Refresh policy lives outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokensAndUrlAuthData {
    /// OAuth access token
    pub access_token: String,
    /// OAuth refresh token, when the grant included one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token endpoint used to mint the tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_server_url: Option<String>,
}

impl TokensAndUrlAuthData {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            token_server_url: None,
        }
    }
}
