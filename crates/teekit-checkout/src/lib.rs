//! # Teekit Checkout
//!
//! The asset-finalization side of the Teekit customization engine. Takes
//! the in-memory design (possibly holding embedded image payloads), uploads
//! raster layers, captures composite previews of both print sides, and
//! assembles the `CustomizationPayload` that crosses the cart boundary.
//!
//! ## Core Components
//!
//! - **Collaborator traits**: `ImageUploader`, `PreviewRenderer`,
//!   `ProductCatalog`, `Cart` — the external services the pipeline talks
//!   to, abstracted so the orchestration is testable with fakes
//! - **Payload**: `FinalizedElement`, `CustomizationPayload`, `CartItem`
//! - **Pipeline**: `CheckoutPipeline` — ordered, best-effort finalization
//!   with a busy-guard against duplicate submissions
//! - **Bundled implementations**: a filesystem uploader, in-memory fakes,
//!   and a headless block renderer for previews

pub mod payload;
pub mod pipeline;
pub mod raster;
pub mod traits;
pub mod types;
pub mod uploaders;

pub use payload::{CartItem, CustomizationPayload, FinalizedElement};
pub use pipeline::{CheckoutPhase, CheckoutPipeline, PhaseListener};
pub use raster::BlockPreviewRenderer;
pub use traits::{Cart, ImageUploader, PreviewRenderer, ProductCatalog, UploadFolder};
pub use types::{CheckoutOutcome, CheckoutRequest, Product};
pub use uploaders::{LocalUploader, MemoryCart, MemoryCatalog, MemoryUploader};
