//! Error handling for Teekit
//!
//! Provides error types for all layers of the engine:
//! - Design errors (element store / canvas operations)
//! - Upload errors (image hosting collaborator)
//! - Capture errors (preview rasterization collaborator)
//! - Checkout errors (finalization pipeline / cart boundary)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::PrintSide;

/// Design-surface error type
///
/// Represents errors raised by the element store and the canvas
/// interaction engine.
#[derive(Error, Debug, Clone)]
pub enum DesignError {
    /// Text content was empty or whitespace-only
    #[error("Text content is empty")]
    EmptyText,

    /// No element exists with the given id
    #[error("Element not found: {id}")]
    ElementNotFound {
        /// The id that failed to resolve.
        id: String,
    },

    /// The supplied bytes could not be decoded as an image
    #[error("Image decode failed: {reason}")]
    ImageDecode {
        /// Why the decode failed.
        reason: String,
    },

    /// Canvas dimensions must be strictly positive
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// The operation targets a text element but found an image (or vice versa)
    #[error("Element {id} is not a {expected} element")]
    KindMismatch {
        /// The element id.
        id: String,
        /// The expected kind name.
        expected: String,
    },
}

/// Upload collaborator error type
#[derive(Error, Debug, Clone)]
pub enum UploadError {
    /// The upload was attempted but the collaborator rejected or lost it
    #[error("Upload failed: {reason}")]
    Failed {
        /// Why the upload failed.
        reason: String,
    },

    /// The payload was not a shape the uploader accepts
    #[error("Invalid upload payload: {reason}")]
    InvalidPayload {
        /// Why the payload was rejected.
        reason: String,
    },

    /// The destination key/path was unusable
    #[error("Invalid storage key: {key}")]
    InvalidKey {
        /// The offending key.
        key: String,
    },
}

/// Preview capture error type
#[derive(Error, Debug, Clone)]
pub enum CaptureError {
    /// The surface for the given side is not mounted/renderable
    #[error("Preview surface not ready for {side}")]
    SurfaceNotReady {
        /// The side whose surface was unavailable.
        side: PrintSide,
    },

    /// Rasterization of a mounted surface failed
    #[error("Capture failed for {side}: {reason}")]
    Failed {
        /// The side being captured.
        side: PrintSide,
        /// Why the capture failed.
        reason: String,
    },

    /// The captured raster could not be encoded
    #[error("Capture encode failed: {reason}")]
    Encode {
        /// Why encoding failed.
        reason: String,
    },
}

/// Checkout pipeline error type
///
/// Errors that abort an add-to-cart invocation. Partial upload and capture
/// failures are degraded inside the pipeline and never surface here.
#[derive(Error, Debug, Clone)]
pub enum CheckoutError {
    /// No size selection was made before adding to cart
    #[error("No size selected")]
    MissingSize,

    /// A finalization run is already in flight
    #[error("Checkout already in progress")]
    Busy,

    /// Product lookup failed
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The product id that failed to resolve.
        id: String,
    },

    /// The catalog collaborator failed
    #[error("Catalog error: {reason}")]
    Catalog {
        /// Why the lookup failed.
        reason: String,
    },

    /// The cart collaborator rejected the item
    #[error("Cart error: {reason}")]
    Cart {
        /// Why the cart rejected the item.
        reason: String,
    },

    /// Generic checkout error
    #[error("Checkout error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Main error type for Teekit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Design-surface error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Upload collaborator error
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Preview capture error
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Checkout pipeline error
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a pre-flight validation error (nothing was mutated)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Checkout(CheckoutError::MissingSize) | Error::Design(DesignError::EmptyText)
        )
    }

    /// Check if this is a rejected duplicate invocation
    pub fn is_busy(&self) -> bool {
        matches!(self, Error::Checkout(CheckoutError::Busy))
    }

    /// Check if this is a design-surface error
    pub fn is_design_error(&self) -> bool {
        matches!(self, Error::Design(_))
    }

    /// Check if this is a checkout error
    pub fn is_checkout_error(&self) -> bool {
        matches!(self, Error::Checkout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
