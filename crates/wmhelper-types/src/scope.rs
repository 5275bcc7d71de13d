use serde::{Deserialize, Serialize};

/// The regulation corpus a query is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    MassLaws,
    Hb44,
    Hb130,
    Hb133,
}

impl Scope {
    pub fn all() -> &'static [Scope] {
        &[Scope::MassLaws, Scope::Hb44, Scope::Hb130, Scope::Hb133]
    }

    pub fn label(&self) -> &str {
        match self {
            Scope::MassLaws => "Massachusetts W&M Laws",
            Scope::Hb44 => "NIST Handbook 44",
            Scope::Hb130 => "NIST Handbook 130",
            Scope::Hb133 => "NIST Handbook 133",
        }
    }

    /// Wire name as sent in query payloads and echoed in usage records.
    pub fn wire_name(&self) -> &str {
        match self {
            Scope::MassLaws => "mass_laws",
            Scope::Hb44 => "hb44",
            Scope::Hb130 => "hb130",
            Scope::Hb133 => "hb133",
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::MassLaws
    }
}
