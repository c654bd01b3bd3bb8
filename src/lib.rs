//! # Teekit
//!
//! A headless product-customization engine for e-commerce storefronts:
//! - Text and image layers placed on the front/back print sides of a product
//! - Pointer-driven drag, resize, and rotation constrained to the canvas
//! - A stateless letterbox transform from the live canvas into fixed-size
//!   preview viewports
//! - An asynchronous finalization pipeline that uploads raster layers,
//!   captures composite previews, and hands a cart-ready customization
//!   payload across the cart boundary
//!
//! ## Architecture
//!
//! Teekit is organized as a workspace with multiple crates:
//!
//! 1. **teekit-core** - Geometry, print sides, errors, configuration
//! 2. **teekit-designer** - Element store, canvas interaction engine,
//!    preview scaling, design-file serialization
//! 3. **teekit-checkout** - Collaborator traits, payload assembly, the
//!    finalization pipeline, bundled uploader/renderer implementations
//! 4. **teekit** - This crate: re-exports plus a scripted demo binary

pub use teekit_checkout as checkout;
pub use teekit_designer as designer;

pub use teekit_core::{
    CaptureError, CheckoutError, CustomizerConfig, DesignError, Error, Point, PrintSide, Result,
    Size, TextDefaults, UploadError,
};

pub use teekit_designer::{
    Canvas, DesignElement, DesignFile, ElementContent, ElementKind, ElementStore, ElementUpdate,
    Gesture, ImageContent, ImageSource, PlacedElement, PreviewTransform, SelectionManager,
    TextContent,
};

pub use teekit_checkout::{
    BlockPreviewRenderer, Cart, CartItem, CheckoutOutcome, CheckoutPhase, CheckoutPipeline,
    CheckoutRequest, CustomizationPayload, FinalizedElement, ImageUploader, LocalUploader,
    MemoryCart, MemoryCatalog, MemoryUploader, PreviewRenderer, Product, ProductCatalog,
    UploadFolder,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
