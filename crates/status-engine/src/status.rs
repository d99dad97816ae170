//! Projection of the availability flag into display-ready status text.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfiguration;

/// Style token the renderer maps to its color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleClass {
    Free,
    Occupied,
}

impl StyleClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::Free => "free",
            StyleClass::Occupied => "occupied",
        }
    }
}

/// Display-ready status record for the header region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusProjection {
    pub label: String,
    pub style_class: StyleClass,
}

/// Map the availability flag to its status label and style token.
///
/// Pure mapping, no side effects: the label comes from the configured status
/// texts, falling back to the fixed-locale defaults when unset.
pub fn project(is_free: bool, config: &DisplayConfiguration) -> StatusProjection {
    if is_free {
        StatusProjection {
            label: config.available_text().to_string(),
            style_class: StyleClass::Free,
        }
    } else {
        StatusProjection {
            label: config.unavailable_text().to_string(),
            style_class: StyleClass::Occupied,
        }
    }
}
