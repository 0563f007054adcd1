use serde::{Deserialize, Serialize};

/// Default accessible name for a header's back control.
pub const DEFAULT_BACK_LABEL: &str = "Back";

/// User-facing strings the page header falls back to when a page does not
/// supply its own.
///
/// Every field defaults independently so a partial `[labels]` table only
/// overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderLabels {
    #[serde(default = "default_back")]
    pub back: String,
}

fn default_back() -> String {
    DEFAULT_BACK_LABEL.to_string()
}

impl Default for HeaderLabels {
    fn default() -> Self {
        Self {
            back: default_back(),
        }
    }
}

impl HeaderLabels {
    /// Pick the accessible name for a back control.
    ///
    /// An explicit label wins unless it is empty, in which case the
    /// configured default is used.
    pub fn resolve_back<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        match explicit {
            Some(label) if !label.is_empty() => label,
            _ => &self.back,
        }
    }
}
