use serde::{Deserialize, Serialize};

/// Body of a successful signup or unregister.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every rejected request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Raw query pairs of a signup or unregister request.
#[derive(Debug, Deserialize, Default)]
#[serde(transparent)]
pub struct EmailQuery(pub Vec<(String, String)>);

impl EmailQuery {
    /// The last `email` value wins when the parameter is repeated.
    pub fn email(&self) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.as_str())
    }
}
