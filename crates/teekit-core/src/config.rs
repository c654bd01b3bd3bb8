//! Session configuration.
//!
//! `CustomizerConfig` gathers the tunable parameters of a customization
//! session. Defaults mirror the constants module; hosts can deserialize a
//! config from JSON or build one programmatically.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Text style applied to newly created text elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDefaults {
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_size: constants::DEFAULT_FONT_SIZE,
            font_family: constants::DEFAULT_FONT_FAMILY.to_string(),
            color: constants::DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

/// Tunable parameters for a customization session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizerConfig {
    /// Initial editing-canvas dimensions (the canvas may resize later).
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Fixed preview viewport dimensions.
    pub preview_width: f64,
    pub preview_height: f64,
    /// Floor applied to element width/height during resize.
    pub min_element_size: f64,
    /// Settle delay before capturing a freshly opened preview surface.
    pub settle_ms: u64,
    /// Style for new text elements.
    pub text: TextDefaults,
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            canvas_width: constants::DEFAULT_CANVAS_WIDTH,
            canvas_height: constants::DEFAULT_CANVAS_HEIGHT,
            preview_width: constants::PREVIEW_WIDTH,
            preview_height: constants::PREVIEW_HEIGHT,
            min_element_size: constants::MIN_ELEMENT_SIZE,
            settle_ms: constants::PREVIEW_SETTLE_MS,
            text: TextDefaults::default(),
        }
    }
}
