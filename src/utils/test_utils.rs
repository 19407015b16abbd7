pub const SAMPLE_TOKEN_JSON: &str = r#"{
    "token_type": "Bearer",
    "access_token": "tok1",
    "expires_at": 3600000,
    "additionalParameters": {}
}"#;

pub const SAMPLE_AUTHORIZATION_JSON: &str = r#"{
    "code": "auth-code",
    "state": "state-123",
    "scope": "openid profile email",
    "additional_parameters": {"iss": "https://issuer.example.com"}
}"#;

pub const SAMPLE_REGISTRATION_JSON: &str = r#"{
    "client_id": "client-1",
    "client_id_issued_at": 1700000000,
    "client_secret_expires_at": 0,
    "token_endpoint_auth_method": "none"
}"#;
