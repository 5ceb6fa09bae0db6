use std::fmt;

/// How a client authenticates against the API.
///
/// A pre-issued token can be used straight away. Username and password
/// require a login round trip before any authenticated call.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Pre-issued access token (JWT)
    Token(String),
    /// Account credentials exchanged for a token on login
    Password {
        /// Account username (usually an email address)
        username: String,
        /// Account password
        password: String,
    },
}

impl Credentials {
    /// Credentials from a pre-issued access token
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Credentials from a username and password
    #[must_use]
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The token to start the session with, if any
    #[must_use]
    pub fn initial_token(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token),
            Self::Password { .. } => None,
        }
    }

    /// Returns true if a login is needed before authenticated calls
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::Password { .. })
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_needs_no_login() {
        let creds = Credentials::token("abc");
        assert_eq!(creds.initial_token(), Some("abc"));
        assert!(!creds.requires_login());
    }

    #[test]
    fn test_password_needs_login() {
        let creds = Credentials::password("user@example.com", "hunter2");
        assert_eq!(creds.initial_token(), None);
        assert!(creds.requires_login());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::password("user@example.com", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));

        let debug = format!("{:?}", Credentials::token("secret-token"));
        assert!(!debug.contains("secret-token"));
    }
}
