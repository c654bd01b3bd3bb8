//! Finalized customization payload handed across the cart boundary.
//!
//! `FinalizedElement` is a flattened snapshot of a design element with its
//! image content resolved (uploaded URL, or the embedded payload if the
//! upload degraded) and a z-index assigned from list position.

use serde::{Deserialize, Serialize};

use teekit_core::PrintSide;

use teekit_designer::{DesignElement, ElementContent, ElementKind};

use crate::types::Product;

/// Flattened snapshot of one design element at finalization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedElement {
    pub id: String,
    pub kind: ElementKind,
    pub side: PrintSide,
    /// For text: the literal string. For images: the resolved URL, or the
    /// embedded data-URI if its upload failed.
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Pre-upload source, retained once content became an uploaded URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_image_url: Option<String>,
    /// Render order within the payload, assigned by list position.
    pub z_index: u32,
}

impl FinalizedElement {
    /// Snapshots an element with the given z-index.
    pub fn from_element(element: &DesignElement, z_index: u32) -> Self {
        let (content, font_size, font_family, color, original_image_url) =
            match &element.content {
                ElementContent::Text(text) => (
                    text.text.clone(),
                    Some(text.font_size),
                    Some(text.font_family.clone()),
                    Some(text.color.clone()),
                    None,
                ),
                ElementContent::Image(image) => (
                    image.source.as_str().to_string(),
                    None,
                    None,
                    None,
                    image.original_url.clone(),
                ),
            };
        Self {
            id: element.id.clone(),
            kind: element.kind(),
            side: element.side,
            content,
            x: element.position.x,
            y: element.position.y,
            width: element.size.width,
            height: element.size.height,
            rotation: element.rotation,
            font_size,
            font_family,
            color,
            original_image_url,
            z_index,
        }
    }
}

/// The finalized customization object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationPayload {
    pub product_id: String,
    pub elements: Vec<FinalizedElement>,
    pub front_preview_image: Option<String>,
    pub back_preview_image: Option<String>,
    /// Convenience alias; defaults to the front preview.
    pub preview_image: Option<String>,
    /// The base product's canonical image, retained for fallback.
    pub original_product_image: String,
}

impl CustomizationPayload {
    /// Assembles the payload from finalized elements and capture results.
    pub fn assemble(
        product: &Product,
        elements: &[DesignElement],
        front_preview: Option<String>,
        back_preview: Option<String>,
    ) -> Self {
        let elements = elements
            .iter()
            .enumerate()
            .map(|(i, e)| FinalizedElement::from_element(e, i as u32))
            .collect();
        Self {
            product_id: product.id.clone(),
            elements,
            preview_image: front_preview.clone(),
            front_preview_image: front_preview,
            back_preview_image: back_preview,
            original_product_image: product.image.clone(),
        }
    }
}

/// The item handed to the cart boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: u32,
    /// Absent for an uncustomized product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<CustomizationPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use teekit_core::{Point, Size};
    use teekit_designer::{ImageContent, TextContent};

    fn product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Tee".to_string(),
            price: 25.0,
            image: "tee.png".to_string(),
            front_image: None,
            back_image: None,
        }
    }

    fn text_element(id: &str) -> DesignElement {
        DesignElement {
            id: id.to_string(),
            side: PrintSide::Front,
            position: Point::new(1.0, 2.0),
            size: Size::new(200.0, 50.0),
            rotation: 15.0,
            content: ElementContent::Text(TextContent {
                text: "HI".to_string(),
                font_size: 24.0,
                font_family: "Arial".to_string(),
                color: "#123456".to_string(),
            }),
        }
    }

    #[test]
    fn z_index_follows_list_position() {
        let elements = vec![text_element("a"), text_element("b")];
        let payload = CustomizationPayload::assemble(&product(), &elements, None, None);
        assert_eq!(payload.elements[0].z_index, 0);
        assert_eq!(payload.elements[1].z_index, 1);
    }

    #[test]
    fn preview_image_aliases_front() {
        let payload = CustomizationPayload::assemble(
            &product(),
            &[],
            Some("front.png".to_string()),
            None,
        );
        assert_eq!(payload.preview_image.as_deref(), Some("front.png"));
        assert_eq!(payload.back_preview_image, None);
    }

    #[test]
    fn image_snapshot_carries_original_url() {
        let mut content = ImageContent::embedded("image/png", &[9, 9, 9]);
        content.resolve("https://cdn/el.png".to_string());
        let element = DesignElement {
            id: "img".to_string(),
            side: PrintSide::Back,
            position: Point::new(0.0, 0.0),
            size: Size::new(150.0, 150.0),
            rotation: 0.0,
            content: ElementContent::Image(content),
        };
        let snapshot = FinalizedElement::from_element(&element, 3);
        assert_eq!(snapshot.content, "https://cdn/el.png");
        assert!(snapshot.original_image_url.unwrap().starts_with("data:image/png"));
        assert_eq!(snapshot.font_size, None);
    }
}
