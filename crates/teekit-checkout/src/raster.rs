//! Headless preview renderer.
//!
//! `BlockPreviewRenderer` rasterizes the projected elements of each side
//! into an RGBA surface, drawing each layer as a filled box (text layers in
//! their configured color, image layers as a neutral block). It stands in
//! for the browser-DOM capture used by the storefront UI: same surface
//! dimensions, same letterbox projection, and real PNG bytes out — which
//! is exactly what the pipeline and its tests need from a capture
//! collaborator.

use std::collections::HashMap;
use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use teekit_core::{CaptureError, PrintSide, Size};

use teekit_designer::preview::project_side;
use teekit_designer::{Canvas, ElementContent, PlacedElement};

use crate::traits::PreviewRenderer;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const IMAGE_BLOCK: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// Rasterizes placed elements as solid blocks onto a preview surface.
pub struct BlockPreviewRenderer {
    width: u32,
    height: u32,
    sides: HashMap<PrintSide, Vec<PlacedElement>>,
}

impl BlockPreviewRenderer {
    /// Projects both sides of the canvas into a preview of the given size.
    pub fn from_canvas(canvas: &Canvas, preview: Size) -> Self {
        let mut sides = HashMap::new();
        for side in PrintSide::ALL {
            sides.insert(side, project_side(canvas, side, preview));
        }
        Self {
            width: preview.width.max(1.0) as u32,
            height: preview.height.max(1.0) as u32,
            sides,
        }
    }

    fn render_side(&self, elements: &[PlacedElement]) -> RgbaImage {
        let mut surface = RgbaImage::from_pixel(self.width, self.height, BACKGROUND);
        for element in elements {
            let color = match &element.content {
                ElementContent::Text(text) => parse_css_color(&text.color),
                ElementContent::Image(_) => IMAGE_BLOCK,
            };
            fill_rect(
                &mut surface,
                element.position.x,
                element.position.y,
                element.size.width,
                element.size.height,
                color,
            );
        }
        surface
    }
}

/// Fills an axis-aligned box, clipped to the surface.
fn fill_rect(surface: &mut RgbaImage, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + width).max(0.0) as u32).min(surface.width());
    let y1 = ((y + height).max(0.0) as u32).min(surface.height());
    for py in y0..y1 {
        for px in x0..x1 {
            surface.put_pixel(px, py, color);
        }
    }
}

/// Parses a `#rrggbb` color, defaulting to black for anything else.
fn parse_css_color(color: &str) -> Rgba<u8> {
    let hex = color.trim_start_matches('#');
    if hex.len() == 6 {
        if let Ok(value) = u32::from_str_radix(hex, 16) {
            return Rgba([
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
                255,
            ]);
        }
    }
    Rgba([0, 0, 0, 255])
}

#[async_trait]
impl PreviewRenderer for BlockPreviewRenderer {
    /// Headless surfaces are always renderable; there is nothing to open
    /// and no settle delay to wait out.
    async fn prepare(&self) -> Result<(), CaptureError> {
        Ok(())
    }

    async fn capture(&self, side: PrintSide) -> Result<Bytes, CaptureError> {
        let elements = self
            .sides
            .get(&side)
            .ok_or(CaptureError::SurfaceNotReady { side })?;
        let surface = self.render_side(elements);

        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(surface)
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| CaptureError::Encode {
                reason: e.to_string(),
            })?;
        debug!(%side, bytes = buf.get_ref().len(), "captured preview surface");
        Ok(Bytes::from(buf.into_inner()))
    }
}
