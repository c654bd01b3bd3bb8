//! Design element model: the layers a user places on the product.
//!
//! A `DesignElement` is a positioned, sized, rotatable layer on one print
//! side. Content is either styled text or an image whose pixels live in an
//! embedded data-URI until the finalization pipeline swaps in an uploaded
//! URL.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use teekit_core::{Point, PrintSide, Size};

/// Discriminant for the two element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
}

/// Styled text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    /// Font size in canvas pixels.
    pub font_size: f64,
    pub font_family: String,
    /// CSS color string, e.g. `#ff0000`.
    pub color: String,
}

/// Where an image element's pixels currently live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// A `data:<mime>;base64,<payload>` URI held in memory.
    Embedded(String),
    /// A resolved URL returned by the upload collaborator.
    Remote(String),
}

impl ImageSource {
    /// Builds an embedded data-URI source from raw bytes.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        ImageSource::Embedded(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
    }

    /// The URI/URL as a string, whichever variant this is.
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::Embedded(uri) => uri,
            ImageSource::Remote(url) => url,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageSource::Embedded(_))
    }

    /// Decodes the base64 payload of an embedded data-URI.
    ///
    /// Returns `None` for remote sources or malformed URIs.
    pub fn embedded_bytes(&self) -> Option<Vec<u8>> {
        let ImageSource::Embedded(uri) = self else {
            return None;
        };
        let payload = uri.split_once(";base64,")?.1;
        BASE64.decode(payload).ok()
    }
}

/// Image content: the current source plus the retained pre-upload original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub source: ImageSource,
    /// Set when `source` has been replaced by an uploaded URL; keeps a
    /// reference to what the user originally placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

impl ImageContent {
    pub fn embedded(mime: &str, bytes: &[u8]) -> Self {
        Self {
            source: ImageSource::from_bytes(mime, bytes),
            original_url: None,
        }
    }

    /// Swaps the source for an uploaded URL, retaining the previous source.
    pub fn resolve(&mut self, url: String) {
        let previous = self.source.as_str().to_string();
        self.original_url = Some(previous);
        self.source = ImageSource::Remote(url);
    }
}

/// Content variant of a design element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementContent {
    Text(TextContent),
    Image(ImageContent),
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Image(_) => ElementKind::Image,
        }
    }
}

/// A single placed layer on one print side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    pub id: String,
    pub side: PrintSide,
    /// Top-left corner in canvas pixel space.
    pub position: Point,
    pub size: Size,
    /// Rotation in degrees, clamped to [-180, 180] by the canvas setter.
    pub rotation: f64,
    pub content: ElementContent,
}

impl DesignElement {
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    pub fn is_text(&self) -> bool {
        self.kind() == ElementKind::Text
    }

    pub fn is_image(&self) -> bool {
        self.kind() == ElementKind::Image
    }

    /// Axis-aligned bounds as (x1, y1, x2, y2).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.position.x,
            self.position.y,
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        )
    }

    /// Hit test against the element's axis-aligned box, edges inclusive.
    pub fn contains_point(&self, p: Point) -> bool {
        let (x1, y1, x2, y2) = self.bounds();
        p.x >= x1 && p.x <= x2 && p.y >= y1 && p.y <= y2
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Centers the element inside the given canvas, per axis.
    pub fn center_in(&mut self, canvas: Size) {
        self.position.x = (canvas.width - self.size.width) / 2.0;
        self.position.y = (canvas.height - self.size.height) / 2.0;
    }

    /// The text content, if this is a text element.
    pub fn as_text(&self) -> Option<&TextContent> {
        match &self.content {
            ElementContent::Text(text) => Some(text),
            ElementContent::Image(_) => None,
        }
    }

    /// The image content, if this is an image element.
    pub fn as_image(&self) -> Option<&ImageContent> {
        match &self.content {
            ElementContent::Image(image) => Some(image),
            ElementContent::Text(_) => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut ImageContent> {
        match &mut self.content {
            ElementContent::Image(image) => Some(image),
            ElementContent::Text(_) => None,
        }
    }
}

/// Partial field update merged into an element by `ElementStore::update`.
///
/// Style fields apply only to the matching content kind; mismatched fields
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct ElementUpdate {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub rotation: Option<f64>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub color: Option<String>,
    pub image_source: Option<ImageSource>,
}

impl ElementUpdate {
    /// Applies every present field to the element.
    pub fn apply(self, element: &mut DesignElement) {
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(size) = self.size {
            element.size = size;
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        match &mut element.content {
            ElementContent::Text(content) => {
                if let Some(text) = self.text {
                    content.text = text;
                }
                if let Some(font_size) = self.font_size {
                    content.font_size = font_size;
                }
                if let Some(font_family) = self.font_family {
                    content.font_family = font_family;
                }
                if let Some(color) = self.color {
                    content.color = color;
                }
            }
            ElementContent::Image(content) => {
                if let Some(source) = self.image_source {
                    content.source = source;
                }
            }
        }
    }
}
