use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
}
