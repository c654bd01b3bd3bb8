//! Coordinate scaling between the live canvas and the preview viewport.
//!
//! The live editing canvas is responsive and can change size between edits;
//! the preview viewport is fixed. `PreviewTransform` maps element geometry
//! from canvas space into the preview with a uniform letterbox fit: the
//! smaller axis ratio is chosen so nothing is cropped, and the scaled
//! design is centered in the leftover space.
//!
//! The transform is pure and cheap; hosts must recompute it from the
//! canvas's *current* size on every render rather than caching it, or a
//! responsive resize will skew the preview.

use serde::{Deserialize, Serialize};

use teekit_core::{Point, PrintSide, Size};

use crate::canvas::Canvas;
use crate::model::{DesignElement, ElementContent};

/// Uniform scale + centering offset from canvas space into preview space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PreviewTransform {
    /// Computes the letterbox fit of `canvas` into `preview`.
    ///
    /// ```text
    /// scale   = min(preview_w / canvas_w, preview_h / canvas_h)
    /// offset  = (preview - canvas * scale) / 2       (per axis)
    /// ```
    ///
    /// Degenerate canvas dimensions yield the identity transform.
    pub fn fit(canvas: Size, preview: Size) -> Self {
        if canvas.width <= 0.0 || canvas.height <= 0.0 {
            return Self {
                scale: 1.0,
                offset_x: 0.0,
                offset_y: 0.0,
            };
        }
        let scale = (preview.width / canvas.width).min(preview.height / canvas.height);
        Self {
            scale,
            offset_x: (preview.width - canvas.width * scale) / 2.0,
            offset_y: (preview.height - canvas.height * scale) / 2.0,
        }
    }

    /// Maps a canvas-space point into preview space.
    pub fn project_point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }

    /// Maps a canvas-space size into preview space.
    pub fn project_size(&self, s: Size) -> Size {
        Size::new(s.width * self.scale, s.height * self.scale)
    }

    /// Maps a preview-space point back into canvas space.
    pub fn unproject_point(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.offset_x) / self.scale,
            (p.y - self.offset_y) / self.scale,
        )
    }

    /// Maps a preview-space size back into canvas space.
    pub fn unproject_size(&self, s: Size) -> Size {
        Size::new(s.width / self.scale, s.height / self.scale)
    }

    /// Projects one element into preview space.
    ///
    /// Text font sizes scale with the geometry; rotation is in degrees and
    /// therefore scale-invariant.
    pub fn project(&self, element: &DesignElement) -> PlacedElement {
        let mut content = element.content.clone();
        if let ElementContent::Text(text) = &mut content {
            text.font_size *= self.scale;
        }
        PlacedElement {
            id: element.id.clone(),
            side: element.side,
            position: self.project_point(element.position),
            size: self.project_size(element.size),
            rotation: element.rotation,
            content,
        }
    }
}

/// An element's geometry and content expressed in preview space, ready for
/// a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub id: String,
    pub side: PrintSide,
    pub position: Point,
    pub size: Size,
    pub rotation: f64,
    pub content: ElementContent,
}

/// Projects every element of one side into a preview viewport, in render
/// order. Always computed from the canvas's current size.
pub fn project_side(canvas: &Canvas, side: PrintSide, preview: Size) -> Vec<PlacedElement> {
    let transform = PreviewTransform::fit(canvas.size(), preview);
    canvas
        .elements_for_side(side)
        .map(|e| transform.project(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letterbox_picks_smaller_ratio() {
        let t = PreviewTransform::fit(Size::new(400.0, 500.0), Size::new(448.0, 384.0));
        assert!((t.scale - 0.768).abs() < 1e-9);
        assert!((t.offset_x - 70.4).abs() < 1e-9);
        assert!(t.offset_y.abs() < 1e-9);
    }

    #[test]
    fn project_centers_scaled_design() {
        let t = PreviewTransform::fit(Size::new(400.0, 500.0), Size::new(448.0, 384.0));
        let p = t.project_point(Point::new(100.0, 100.0));
        assert!((p.x - 147.2).abs() < 1e-9);
        assert!((p.y - 76.8).abs() < 1e-9);
    }

    #[test]
    fn degenerate_canvas_is_identity() {
        let t = PreviewTransform::fit(Size::new(0.0, 500.0), Size::new(448.0, 384.0));
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.project_point(Point::new(5.0, 7.0)), Point::new(5.0, 7.0));
    }
}
