use serde::{Deserialize, Serialize};

/// Public handle of a registered user.
///
/// Codes are the only way clients address each other; the internal user id
/// never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserCode(pub String);

impl UserCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for UserCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for UserCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_serializes_as_plain_string() {
        let code = UserCode::from("AB12CD");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"AB12CD\"");

        let parsed: UserCode = serde_json::from_str("\"XY99ZZ\"").unwrap();
        assert_eq!(parsed.as_str(), "XY99ZZ");
    }
}
