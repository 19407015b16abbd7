//! Conversion of native AppAuth responses into bridge maps.
//!
//! The free functions reproduce the shipped bridge output exactly. A
//! [`ResponseMapper`] carries the opt-in policies that correct its two
//! quirks: the dropped last scope and the omitted expiration key.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::bridge::{additional_parameters_map, string_list, string_or_null, OutputMap};
use crate::core::response::{AuthorizationResponse, RegistrationResponse, TokenResponse};
use crate::core::scopes::{scope_string_to_list_with, ScopeSplit};
use crate::core::timestamp::format_timestamp;

pub const KEY_ACCESS_TOKEN: &str = "accessToken";
pub const KEY_ADDITIONAL_PARAMETERS: &str = "additionalParameters";
pub const KEY_ID_TOKEN: &str = "idToken";
pub const KEY_REFRESH_TOKEN: &str = "refreshToken";
pub const KEY_TOKEN_TYPE: &str = "tokenType";
pub const KEY_ACCESS_TOKEN_EXPIRATION_TIME: &str = "accessTokenExpirationTime";
pub const KEY_SCOPES: &str = "scopes";
pub const KEY_AUTHORIZATION_CODE: &str = "authorizationCode";
pub const KEY_STATE: &str = "state";
pub const KEY_CLIENT_ID: &str = "clientId";
pub const KEY_CLIENT_ID_ISSUED_AT: &str = "clientIdIssuedAt";
pub const KEY_CLIENT_SECRET: &str = "clientSecret";
pub const KEY_CLIENT_SECRET_EXPIRES_AT: &str = "clientSecretExpiresAt";
pub const KEY_REGISTRATION_ACCESS_TOKEN: &str = "registrationAccessToken";
pub const KEY_REGISTRATION_CLIENT_URI: &str = "registrationClientUri";
pub const KEY_TOKEN_ENDPOINT_AUTH_METHOD: &str = "tokenEndpointAuthMethod";

/// What to emit for `accessTokenExpirationTime` when the token has no expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpirationPolicy {
    /// Leave the key out, unlike the other nullable token fields.
    #[default]
    Omit,
    /// Emit the key with a null value.
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseMapper {
    pub scope_split: ScopeSplit,
    pub expiration: ExpirationPolicy,
}

impl ResponseMapper {
    pub fn new(scope_split: ScopeSplit, expiration: ExpirationPolicy) -> Self {
        Self {
            scope_split,
            expiration,
        }
    }

    pub fn token_response_to_map(&self, response: &TokenResponse) -> OutputMap {
        let mut map = OutputMap::new();
        map.insert(
            KEY_ACCESS_TOKEN.to_string(),
            string_or_null(response.access_token.as_deref()),
        );
        map.insert(
            KEY_ADDITIONAL_PARAMETERS.to_string(),
            Value::Object(additional_parameters_map(&response.additional_parameters)),
        );
        map.insert(
            KEY_ID_TOKEN.to_string(),
            string_or_null(response.id_token.as_deref()),
        );
        map.insert(
            KEY_REFRESH_TOKEN.to_string(),
            string_or_null(response.refresh_token.as_deref()),
        );
        map.insert(
            KEY_TOKEN_TYPE.to_string(),
            string_or_null(response.token_type.as_deref()),
        );

        match (&response.access_token_expiration_time, self.expiration) {
            (Some(expires_at), _) => {
                map.insert(
                    KEY_ACCESS_TOKEN_EXPIRATION_TIME.to_string(),
                    Value::String(format_timestamp(expires_at)),
                );
            }
            (None, ExpirationPolicy::Null) => {
                map.insert(KEY_ACCESS_TOKEN_EXPIRATION_TIME.to_string(), Value::Null);
            }
            (None, ExpirationPolicy::Omit) => {}
        }

        debug!(
            keys = map.len(),
            additional_parameters = response.additional_parameters.len(),
            "mapped token response"
        );
        map
    }

    pub fn authorization_response_to_map(&self, response: &AuthorizationResponse) -> OutputMap {
        let scopes = scope_string_to_list_with(response.scope.as_deref(), self.scope_split);
        debug!(
            scopes = scopes.len(),
            split = ?self.scope_split,
            "mapped authorization scopes"
        );

        let mut map = OutputMap::new();
        map.insert(
            KEY_ADDITIONAL_PARAMETERS.to_string(),
            Value::Object(additional_parameters_map(&response.additional_parameters)),
        );
        map.insert(KEY_SCOPES.to_string(), string_list(scopes));
        map.insert(
            KEY_AUTHORIZATION_CODE.to_string(),
            string_or_null(response.authorization_code.as_deref()),
        );
        map.insert(
            KEY_STATE.to_string(),
            string_or_null(response.state.as_deref()),
        );
        map
    }

    pub fn registration_response_to_map(&self, response: &RegistrationResponse) -> OutputMap {
        let mut map = OutputMap::new();
        map.insert(
            KEY_CLIENT_ID.to_string(),
            Value::String(response.client_id.clone()),
        );
        map.insert(
            KEY_ADDITIONAL_PARAMETERS.to_string(),
            Value::Object(additional_parameters_map(&response.additional_parameters)),
        );
        // Optional registration fields are left out rather than nulled.
        let optional = [
            (
                KEY_CLIENT_ID_ISSUED_AT,
                response.client_id_issued_at.as_ref().map(format_timestamp),
            ),
            (KEY_CLIENT_SECRET, response.client_secret.clone()),
            (
                KEY_CLIENT_SECRET_EXPIRES_AT,
                response.client_secret_expires_at.as_ref().map(format_timestamp),
            ),
            (
                KEY_REGISTRATION_ACCESS_TOKEN,
                response.registration_access_token.clone(),
            ),
            (
                KEY_REGISTRATION_CLIENT_URI,
                response.registration_client_uri.clone(),
            ),
            (
                KEY_TOKEN_ENDPOINT_AUTH_METHOD,
                response.token_endpoint_auth_method.clone(),
            ),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value));
            }
        }

        debug!(client_id = %response.client_id, "mapped registration response");
        map
    }
}

pub fn token_response_to_map(response: &TokenResponse) -> OutputMap {
    ResponseMapper::default().token_response_to_map(response)
}

pub fn authorization_response_to_map(response: &AuthorizationResponse) -> OutputMap {
    ResponseMapper::default().authorization_response_to_map(response)
}

pub fn registration_response_to_map(response: &RegistrationResponse) -> OutputMap {
    ResponseMapper::default().registration_response_to_map(response)
}
