use serde::{Deserialize, Serialize};

/// One entry of the trip registry: a friendly display name plus the sheet
/// tab its rows live in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub name: String,

    /// Sheet tab identifier, e.g. "New York Feb 26".
    #[serde(alias = "id")]
    pub tab: String,
}

impl Trip {
    pub fn new(name: &str, tab: &str) -> Self {
        Self {
            name: name.to_string(),
            tab: tab.to_string(),
        }
    }

    /// A trip matches a user query by display name or by tab id.
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.tab.eq_ignore_ascii_case(query)
    }
}
