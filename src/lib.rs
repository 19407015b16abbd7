//! appauth-bridge turns responses from a native AppAuth client into the
//! plain, ordered maps a cross-platform application layer consumes.
//!
//! The crate is organized in two layers:
//! - [`core`] holds the response snapshots, the [`core::mapper`] functions
//!   that build bridge maps, scope splitting, timestamp formatting and the
//!   TOML configuration selecting the mapper's compatibility policies.
//! - [`cli`] reads snapshots as JSON and prints the mapped output.
//!
//! ```
//! use appauth_bridge::core::mapper::token_response_to_map;
//! use appauth_bridge::core::response::TokenResponse;
//!
//! let token = TokenResponse {
//!     access_token: Some("tok1".to_string()),
//!     ..Default::default()
//! };
//! let map = token_response_to_map(&token);
//! assert_eq!(map["accessToken"], "tok1");
//! assert!(map["refreshToken"].is_null());
//! assert!(!map.contains_key("accessTokenExpirationTime"));
//! ```

pub mod cli;
pub mod core;
pub mod utils;

pub use crate::core::mapper::{
    authorization_response_to_map, registration_response_to_map, token_response_to_map,
    ExpirationPolicy, ResponseMapper,
};
pub use crate::core::response::{AuthorizationResponse, RegistrationResponse, TokenResponse};
pub use crate::core::scopes::{scope_string_to_list, scope_string_to_list_with, ScopeSplit};
