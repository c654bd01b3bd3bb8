//! Engine-wide constants.
//!
//! Canvas dimensions are the defaults for a freshly created session; the
//! live canvas is responsive and may be resized at any time. The preview
//! viewport is fixed.

/// Default editing-canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 400.0;

/// Default editing-canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;

/// Fixed preview viewport width in pixels.
pub const PREVIEW_WIDTH: f64 = 448.0;

/// Fixed preview viewport height in pixels.
pub const PREVIEW_HEIGHT: f64 = 384.0;

/// Minimum element width/height enforced during resize.
pub const MIN_ELEMENT_SIZE: f64 = 30.0;

/// Default size of a newly added text element.
pub const DEFAULT_TEXT_WIDTH: f64 = 200.0;
pub const DEFAULT_TEXT_HEIGHT: f64 = 50.0;

/// Default edge length of a newly added image element.
pub const DEFAULT_IMAGE_SIZE: f64 = 150.0;

/// Text style defaults for new text elements.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Rotation is clamped to [-ROTATION_LIMIT_DEG, ROTATION_LIMIT_DEG].
pub const ROTATION_LIMIT_DEG: f64 = 180.0;

/// Settle delay before capturing a freshly opened preview surface, in
/// milliseconds. Renderer implementations may replace this with a real
/// readiness signal.
pub const PREVIEW_SETTLE_MS: u64 = 300;

/// Logical upload folder for raster design elements.
pub const ELEMENT_UPLOAD_FOLDER: &str = "customization-elements";

/// Logical upload folder for captured composite previews.
pub const PREVIEW_UPLOAD_FOLDER: &str = "customization-previews";
