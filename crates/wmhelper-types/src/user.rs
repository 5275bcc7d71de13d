use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, supplied by the hosted auth widget.
///
/// Passed explicitly into every operation that needs identity so the
/// session store and usage model stay testable without ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
        }
    }

    /// Display name for the user menu: full name if known, else email,
    /// else the raw id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}
