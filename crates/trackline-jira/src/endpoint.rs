//! Endpoint address and credential handling.

/// Normalize a tracker endpoint address.
///
/// A bare host gains `https://`; addresses that already carry a scheme
/// pass through unchanged.
#[must_use]
pub fn resolve_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    }
}

/// Login credentials for HTTP basic auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name.
    pub username: String,

    /// Password, absent when the input named only a user.
    pub password: Option<String>,
}

impl Credentials {
    /// Parse `USER[:PASSWORD]`, splitting on the first colon only so
    /// passwords may themselves contain colons.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.split_once(':') {
            Some((username, password)) => Self {
                username: username.to_string(),
                password: Some(password.to_string()),
            },
            None => Self {
                username: input.to_string(),
                password: None,
            },
        }
    }
}
