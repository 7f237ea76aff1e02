//! Wire types shared with the creations endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A palette entry: saved creations store either CSS color strings or packed
/// numeric colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Text(String),
    Number(f64),
}

impl ColorValue {
    /// CSS color for a swatch. Numbers are read as `0xRRGGBB`.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let packed = n.clamp(0.0, f64::from(0x00FF_FFFF_u32)) as u32;
                format!("#{packed:06x}")
            }
        }
    }
}

/// One saved user creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub id: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_ref: String,
    #[serde(rename = "nickname")]
    pub display_name: String,
    #[serde(rename = "colors", default)]
    pub color_palette: Vec<ColorValue>,
}
