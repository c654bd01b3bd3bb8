//! Product and request types crossing the checkout boundary.

use serde::{Deserialize, Serialize};

use teekit_core::PrintSide;

use teekit_designer::DesignElement;

use crate::payload::CartItem;

/// Product metadata consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Canonical product image, used when sides are undifferentiated.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,
}

impl Product {
    /// The base image for one side, falling back to the shared image when
    /// the sides are undifferentiated.
    pub fn image_for_side(&self, side: PrintSide) -> &str {
        let per_side = match side {
            PrintSide::Front => self.front_image.as_deref(),
            PrintSide::Back => self.back_image.as_deref(),
        };
        per_side.unwrap_or(&self.image)
    }
}

/// What the shopper picked before pressing "add to cart".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Garment size; required before checkout proceeds.
    pub size: Option<String>,
    pub color: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Default for CheckoutRequest {
    fn default() -> Self {
        Self {
            size: None,
            color: None,
            quantity: 1,
        }
    }
}

impl CheckoutRequest {
    pub fn new(size: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()),
            color: None,
            quantity: 1,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Result of a completed add-to-cart invocation.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// The item that was handed to the cart.
    pub item: CartItem,
    /// The design elements with upload-resolved image sources, for the host
    /// to sync back into its live store.
    pub elements: Vec<DesignElement>,
}
