//! Collaborator contracts for the finalization pipeline.
//!
//! These traits are the seams between the pipeline's orchestration (owned
//! here) and the platform services it drives (owned elsewhere): image
//! hosting, on-screen preview rasterization, product lookup, and the cart.
//! Everything the pipeline needs is expressed against these traits so the
//! orchestration runs headlessly under test with fakes.

use async_trait::async_trait;
use bytes::Bytes;

use teekit_core::constants::{ELEMENT_UPLOAD_FOLDER, PREVIEW_UPLOAD_FOLDER};
use teekit_core::{CaptureError, CheckoutError, PrintSide, UploadError};

use crate::payload::CartItem;
use crate::types::Product;

/// Logical destination folder for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    /// Raster design layers placed by the user.
    Elements,
    /// Captured composite previews.
    Previews,
}

impl UploadFolder {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadFolder::Elements => ELEMENT_UPLOAD_FOLDER,
            UploadFolder::Previews => PREVIEW_UPLOAD_FOLDER,
        }
    }
}

/// Image hosting collaborator.
///
/// Accepts a raw image payload plus a logical folder tag and an optional
/// filename hint, and returns the public URL of the stored object.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(
        &self,
        data: Bytes,
        folder: UploadFolder,
        filename_hint: Option<&str>,
    ) -> Result<String, UploadError>;
}

/// Preview rasterization collaborator.
///
/// `prepare` makes both preview surfaces renderable — the production
/// implementation forces the preview UI open and waits for the surfaces to
/// settle; headless implementations are ready immediately. `capture`
/// rasterizes one side's surface into a still image.
#[async_trait]
pub trait PreviewRenderer: Send + Sync {
    async fn prepare(&self) -> Result<(), CaptureError>;

    async fn capture(&self, side: PrintSide) -> Result<Bytes, CaptureError>;
}

/// Product lookup collaborator.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product(&self, product_id: &str) -> Result<Product, CheckoutError>;
}

/// Cart boundary.
///
/// Accepts finalized items; an item without a customization means "no
/// custom design", not an error.
#[async_trait]
pub trait Cart: Send + Sync {
    async fn add(&self, item: CartItem) -> Result<(), CheckoutError>;
}
