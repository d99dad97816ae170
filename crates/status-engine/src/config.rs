//! Display configuration supplied by the surrounding presentation layer.
//!
//! Static text only -- immutable for the lifetime of the widget. The status
//! texts are optional; when absent, projection falls back to the fixed-locale
//! defaults the product ships with.

use serde::{Deserialize, Serialize};

/// Fallback status label when the room is free.
pub const DEFAULT_AVAILABLE_TEXT: &str = "Ledigt";

/// Fallback status label when the room is occupied.
pub const DEFAULT_UNAVAILABLE_TEXT: &str = "Optaget";

/// Static display text for the widget header and status region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfiguration {
    /// Room name shown in the header.
    #[serde(default)]
    pub title: String,
    /// Optional line above the title (e.g., building or floor).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    /// Status label override for the free state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_available_text: Option<String>,
    /// Status label override for the occupied state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_unavailable_text: Option<String>,
}

impl DisplayConfiguration {
    /// The label to show when the room is free.
    pub fn available_text(&self) -> &str {
        self.resource_available_text
            .as_deref()
            .unwrap_or(DEFAULT_AVAILABLE_TEXT)
    }

    /// The label to show when the room is occupied.
    pub fn unavailable_text(&self) -> &str {
        self.resource_unavailable_text
            .as_deref()
            .unwrap_or(DEFAULT_UNAVAILABLE_TEXT)
    }
}
