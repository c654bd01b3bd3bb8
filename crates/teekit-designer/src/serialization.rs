//! Serialization and deserialization for design sessions.
//!
//! Implements save/load for `.teekit` design files using JSON with the
//! complete design state: canvas dimensions, active side, and every placed
//! element (including embedded image payloads).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use teekit_core::PrintSide;

use crate::canvas::Canvas;
use crate::model::DesignElement;

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub active_side: PrintSide,
    pub elements: Vec<DesignElement>,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub product_id: String,
}

impl DesignFile {
    /// Snapshots a canvas into a design file.
    pub fn from_canvas(canvas: &Canvas, name: &str, product_id: &str) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.to_string(),
                created: now,
                modified: now,
                product_id: product_id.to_string(),
            },
            canvas_width: canvas.width(),
            canvas_height: canvas.height(),
            active_side: canvas.active_side(),
            elements: canvas.elements().cloned().collect(),
        }
    }

    /// Saves the design file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize design file")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write design file: {}", path.display()))?;
        Ok(())
    }

    /// Loads a design file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read design file: {}", path.display()))?;
        let file: DesignFile =
            serde_json::from_str(&json).context("Failed to parse design file")?;
        Ok(file)
    }

    /// Rebuilds a canvas from this design file.
    ///
    /// Selection and gesture state are not persisted and start fresh.
    pub fn into_canvas(self) -> Result<Canvas> {
        let mut canvas = Canvas::new();
        canvas
            .set_canvas_size(self.canvas_width, self.canvas_height)
            .map_err(|e| anyhow::anyhow!("Invalid canvas size in design file: {e}"))?;
        canvas.set_active_side(self.active_side);
        for element in self.elements {
            canvas.store.insert(element);
        }
        Ok(canvas)
    }
}
