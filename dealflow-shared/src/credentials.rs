use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// An affiliate-network or platform API credential. Masks its value in Debug
/// and Display output so log macros like `tracing::info!("{:?}", config)`
/// never leak keys.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiCredential(pub String);

impl ApiCredential {
    /// Whether a non-empty credential was supplied. Sources and publishers
    /// without a configured credential are skipped for the cycle.
    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiCredential {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_configured() {
            write!(f, "********")
        } else {
            write!(f, "<unset>")
        }
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Serialize for ApiCredential {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Signed request builders need the real value; masking applies to
        // the human-facing Debug/Display path only.
        self.0.serialize(serializer)
    }
}
