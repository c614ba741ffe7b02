//! # Action Routing Tag
//!
//! Every request hits the same endpoint; the `action` parameter picks the
//! handler. Parsing into a closed enum keeps dispatch exhaustive.

/// One of the four supported actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Issue the placeholder bearer token.
    OauthToken,
    /// List verifiable type names.
    GetTypeNames,
    /// Return property schemas for requested types.
    GetTypeDefinitions,
    /// Verify a postal code.
    Verify,
}

impl Action {
    /// Parse an action name. Surrounding whitespace is ignored; matching is
    /// case-sensitive. `listTypeNames` is accepted as an alias of
    /// `getTypeNames`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "oauthToken" => Some(Self::OauthToken),
            "getTypeNames" | "listTypeNames" => Some(Self::GetTypeNames),
            "getTypeDefinitions" => Some(Self::GetTypeDefinitions),
            "verify" => Some(Self::Verify),
            _ => None,
        }
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OauthToken => "oauthToken",
            Self::GetTypeNames => "getTypeNames",
            Self::GetTypeDefinitions => "getTypeDefinitions",
            Self::Verify => "verify",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
