//! The asset finalization pipeline.
//!
//! Turns an in-memory design into a network-resolvable customization and
//! hands it to the cart. Steps run strictly in order; uploads within a step
//! are issued concurrently and awaited jointly, while the two preview
//! captures are sequential because each depends on its own surface state.
//!
//! Failure semantics: individual upload/capture failures degrade to
//! null/unchanged fields and the pipeline continues; only unexpected errors
//! abort the add-to-cart action, in which case the cart is left untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use futures::future::join_all;
use tracing::{info, warn};

use teekit_core::types::Listener;
use teekit_core::{CheckoutError, PrintSide};

use teekit_designer::DesignElement;

use crate::payload::{CartItem, CustomizationPayload};
use crate::traits::{Cart, ImageUploader, PreviewRenderer, UploadFolder};
use crate::types::{CheckoutOutcome, CheckoutRequest, Product};

/// Progress phases surfaced to the host UI while a checkout runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
    Preparing,
    UploadingAssets,
    CapturingPreviews,
    UploadingPreviews,
    Completed,
}

/// Callback receiving phase transitions.
pub type PhaseListener = Listener<CheckoutPhase>;

/// Orchestrates finalization against the collaborator traits.
pub struct CheckoutPipeline {
    uploader: Arc<dyn ImageUploader>,
    renderer: Arc<dyn PreviewRenderer>,
    cart: Arc<dyn Cart>,
    phase_listener: Option<PhaseListener>,
    busy: AtomicBool,
}

impl CheckoutPipeline {
    pub fn new(
        uploader: Arc<dyn ImageUploader>,
        renderer: Arc<dyn PreviewRenderer>,
        cart: Arc<dyn Cart>,
    ) -> Self {
        Self {
            uploader,
            renderer,
            cart,
            phase_listener: None,
            busy: AtomicBool::new(false),
        }
    }

    /// Attaches a progress listener.
    pub fn with_phase_listener(mut self, listener: PhaseListener) -> Self {
        self.phase_listener = Some(listener);
        self
    }

    /// Whether a finalization run is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn notify(&self, phase: CheckoutPhase) {
        if let Some(listener) = &self.phase_listener {
            listener(phase);
        }
    }

    /// Runs the full finalization and hands the result to the cart.
    ///
    /// `elements` is a snapshot of the design (typically
    /// `canvas.elements().cloned().collect()`); the returned outcome carries
    /// the upload-resolved copies for the host to sync back.
    ///
    /// A second invocation while one is in flight fails fast with
    /// `CheckoutError::Busy` and does not disturb the running one.
    pub async fn add_to_cart(
        &self,
        product: &Product,
        request: &CheckoutRequest,
        elements: Vec<DesignElement>,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or(CheckoutError::Busy)?;

        // Validation happens before any mutation or network call.
        let size = request.size.clone().ok_or(CheckoutError::MissingSize)?;

        // No design: the base product goes to the cart unmodified.
        if elements.is_empty() {
            let item = self.base_item(product, request, &size);
            self.cart.add(item.clone()).await?;
            info!(product = %product.id, "added uncustomized product to cart");
            return Ok(CheckoutOutcome { item, elements });
        }

        self.notify(CheckoutPhase::Preparing);
        let mut elements = elements;

        self.notify(CheckoutPhase::UploadingAssets);
        self.upload_embedded_elements(&mut elements).await;

        if let Err(e) = self.renderer.prepare().await {
            warn!(error = %e, "preview surfaces not ready; captures may fail");
        }

        // Front then back; each capture depends on its own surface state.
        self.notify(CheckoutPhase::CapturingPreviews);
        let front_capture = self.capture_side(PrintSide::Front).await;
        let back_capture = self.capture_side(PrintSide::Back).await;

        self.notify(CheckoutPhase::UploadingPreviews);
        let (front_url, back_url) = self.upload_previews(front_capture, back_capture).await;

        let payload = CustomizationPayload::assemble(product, &elements, front_url, back_url);
        let mut item = self.base_item(product, request, &size);
        item.customization = Some(payload);

        self.cart.add(item.clone()).await?;
        self.notify(CheckoutPhase::Completed);
        info!(
            product = %product.id,
            elements = elements.len(),
            "added customized product to cart"
        );
        Ok(CheckoutOutcome { item, elements })
    }

    fn base_item(&self, product: &Product, request: &CheckoutRequest, size: &str) -> CartItem {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image_for_side(PrintSide::Front).to_string(),
            size: size.to_string(),
            color: request.color.clone(),
            quantity: request.quantity,
            customization: None,
        }
    }

    /// Uploads every still-embedded image element concurrently.
    ///
    /// Best effort: a failed upload leaves that element's content as-is; a
    /// successful one swaps in the URL and retains the original source.
    async fn upload_embedded_elements(&self, elements: &mut [DesignElement]) {
        let mut jobs = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            let Some(image) = element.as_image() else {
                continue;
            };
            if !image.source.is_embedded() {
                continue;
            }
            match image.source.embedded_bytes() {
                Some(bytes) => jobs.push((index, element.id.clone(), Bytes::from(bytes))),
                None => warn!(id = %element.id, "embedded payload is malformed; leaving as-is"),
            }
        }
        if jobs.is_empty() {
            return;
        }

        let uploads = jobs.into_iter().map(|(index, id, bytes)| {
            let uploader = Arc::clone(&self.uploader);
            async move {
                let result = uploader
                    .upload(bytes, UploadFolder::Elements, Some(&id))
                    .await;
                (index, id, result)
            }
        });

        for (index, id, result) in join_all(uploads).await {
            match result {
                Ok(url) => {
                    if let Some(image) = elements[index].as_image_mut() {
                        image.resolve(url);
                    }
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "element upload failed; keeping embedded content")
                }
            }
        }
    }

    /// Captures one side; a failure yields `None` rather than an error.
    async fn capture_side(&self, side: PrintSide) -> Option<Bytes> {
        match self.renderer.capture(side).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(%side, error = %e, "preview capture failed");
                None
            }
        }
    }

    /// Uploads whichever captures succeeded, concurrently.
    async fn upload_previews(
        &self,
        front: Option<Bytes>,
        back: Option<Bytes>,
    ) -> (Option<String>, Option<String>) {
        let upload_one = |side: PrintSide, bytes: Option<Bytes>| {
            let uploader = Arc::clone(&self.uploader);
            async move {
                let bytes = bytes?;
                let hint = format!("{side}-preview");
                match uploader
                    .upload(bytes, UploadFolder::Previews, Some(&hint))
                    .await
                {
                    Ok(url) => Some(url),
                    Err(e) => {
                        warn!(%side, error = %e, "preview upload failed");
                        None
                    }
                }
            }
        };

        futures::join!(
            upload_one(PrintSide::Front, front),
            upload_one(PrintSide::Back, back)
        )
    }
}

/// RAII flag guarding against duplicate concurrent pipelines.
///
/// Dropping the guard (on success, error, or panic unwind) releases the
/// flag.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
