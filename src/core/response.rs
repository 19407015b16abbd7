//! Immutable snapshots of the native AppAuth response records.
//!
//! Field names follow AppAuth's own JSON serialization so a snapshot can be
//! captured on the device and replayed through the mapper unchanged.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::core::timestamp::{instant_from_epoch_millis, instant_from_epoch_secs};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default, rename = "access_token", alias = "accessToken")]
    pub access_token: Option<String>,
    #[serde(default, rename = "refresh_token", alias = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(default, rename = "id_token", alias = "idToken")]
    pub id_token: Option<String>,
    #[serde(default, rename = "token_type", alias = "tokenType")]
    pub token_type: Option<String>,
    /// Stored by AppAuth as epoch milliseconds under `expires_at`.
    #[serde(
        default,
        rename = "expires_at",
        alias = "accessTokenExpirationTime",
        deserialize_with = "epoch_millis"
    )]
    pub access_token_expiration_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "additionalParameters",
        alias = "additional_parameters"
    )]
    pub additional_parameters: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorizationResponse {
    #[serde(default, rename = "code", alias = "authorizationCode")]
    pub authorization_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Granted scopes as a single space-delimited string.
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(
        default,
        rename = "additional_parameters",
        alias = "additionalParameters"
    )]
    pub additional_parameters: HashMap<String, String>,
}

/// Dynamic client registration result (RFC 7591).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationResponse {
    #[serde(rename = "client_id", alias = "clientId")]
    pub client_id: String,
    #[serde(
        default,
        rename = "client_id_issued_at",
        alias = "clientIdIssuedAt",
        deserialize_with = "epoch_secs"
    )]
    pub client_id_issued_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "client_secret", alias = "clientSecret")]
    pub client_secret: Option<String>,
    /// `None` both when absent and when the server sent `0` ("never expires").
    #[serde(
        default,
        rename = "client_secret_expires_at",
        alias = "clientSecretExpiresAt",
        deserialize_with = "epoch_secs_nonzero"
    )]
    pub client_secret_expires_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "registration_access_token",
        alias = "registrationAccessToken"
    )]
    pub registration_access_token: Option<String>,
    #[serde(
        default,
        rename = "registration_client_uri",
        alias = "registrationClientUri"
    )]
    pub registration_client_uri: Option<String>,
    #[serde(
        default,
        rename = "token_endpoint_auth_method",
        alias = "tokenEndpointAuthMethod"
    )]
    pub token_endpoint_auth_method: Option<String>,
    #[serde(
        default,
        rename = "additionalParameters",
        alias = "additional_parameters"
    )]
    pub additional_parameters: HashMap<String, String>,
}

fn epoch_millis<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.and_then(instant_from_epoch_millis))
}

fn epoch_secs<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.and_then(instant_from_epoch_secs))
}

fn epoch_secs_nonzero<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.filter(|secs| *secs != 0).and_then(instant_from_epoch_secs))
}
