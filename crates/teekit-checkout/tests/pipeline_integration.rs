//! Integration tests for the finalization pipeline, run against fake
//! collaborators.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use teekit_core::{CaptureError, CheckoutError, PrintSide, Size, UploadError};
use teekit_checkout::{
    BlockPreviewRenderer, Cart, CartItem, CheckoutPipeline, CheckoutRequest, ImageUploader,
    MemoryCart, MemoryUploader, PreviewRenderer, Product, UploadFolder,
};
use teekit_designer::{Canvas, ImageSource};

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 128, 255, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn product() -> Product {
    Product {
        id: "tee-1".to_string(),
        name: "Classic Tee".to_string(),
        price: 24.5,
        image: "https://shop.example/tee.png".to_string(),
        front_image: Some("https://shop.example/tee-front.png".to_string()),
        back_image: Some("https://shop.example/tee-back.png".to_string()),
    }
}

fn renderer_for(canvas: &Canvas) -> Arc<BlockPreviewRenderer> {
    Arc::new(BlockPreviewRenderer::from_canvas(
        canvas,
        Size::new(448.0, 384.0),
    ))
}

/// Uploader that fails for specific filename hints.
struct FlakyUploader {
    inner: MemoryUploader,
    fail_hints: HashSet<String>,
}

#[async_trait]
impl ImageUploader for FlakyUploader {
    async fn upload(
        &self,
        data: Bytes,
        folder: UploadFolder,
        filename_hint: Option<&str>,
    ) -> Result<String, UploadError> {
        if let Some(hint) = filename_hint {
            if self.fail_hints.contains(hint) {
                return Err(UploadError::Failed {
                    reason: "injected failure".to_string(),
                });
            }
        }
        self.inner.upload(data, folder, filename_hint).await
    }
}

/// Renderer whose back surface always fails to capture.
struct BackFailsRenderer {
    inner: BlockPreviewRenderer,
}

#[async_trait]
impl PreviewRenderer for BackFailsRenderer {
    async fn prepare(&self) -> Result<(), CaptureError> {
        self.inner.prepare().await
    }

    async fn capture(&self, side: PrintSide) -> Result<Bytes, CaptureError> {
        if side == PrintSide::Back {
            return Err(CaptureError::Failed {
                side,
                reason: "surface unmounted".to_string(),
            });
        }
        self.inner.capture(side).await
    }
}

/// Renderer that blocks in `prepare` until released.
struct GatedRenderer {
    gate: tokio::sync::Notify,
}

#[async_trait]
impl PreviewRenderer for GatedRenderer {
    async fn prepare(&self) -> Result<(), CaptureError> {
        self.gate.notified().await;
        Ok(())
    }

    async fn capture(&self, side: PrintSide) -> Result<Bytes, CaptureError> {
        Err(CaptureError::SurfaceNotReady { side })
    }
}

/// Cart that rejects everything.
struct RejectingCart;

#[async_trait]
impl Cart for RejectingCart {
    async fn add(&self, _item: CartItem) -> Result<(), CheckoutError> {
        Err(CheckoutError::Cart {
            reason: "database unavailable".to_string(),
        })
    }
}

#[tokio::test]
async fn zero_elements_adds_plain_cart_entry() {
    let canvas = Canvas::with_size(400.0, 500.0);
    let cart = Arc::new(MemoryCart::new());
    let pipeline = CheckoutPipeline::new(
        Arc::new(MemoryUploader::new()),
        renderer_for(&canvas),
        cart.clone(),
    );

    let outcome = pipeline
        .add_to_cart(&product(), &CheckoutRequest::new("M"), Vec::new())
        .await
        .unwrap();

    assert!(outcome.item.customization.is_none());
    let items = cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].size, "M");
    assert!(items[0].customization.is_none());
}

#[tokio::test]
async fn missing_size_aborts_before_anything_happens() {
    let mut canvas = Canvas::with_size(400.0, 500.0);
    canvas.add_text("HELLO").unwrap();
    let uploader = Arc::new(MemoryUploader::new());
    let cart = Arc::new(MemoryCart::new());
    let pipeline =
        CheckoutPipeline::new(uploader.clone(), renderer_for(&canvas), cart.clone());

    let err = pipeline
        .add_to_cart(
            &product(),
            &CheckoutRequest::default(),
            canvas.elements().cloned().collect(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::MissingSize));
    assert!(cart.is_empty());
    assert_eq!(uploader.object_count(), 0);
}

#[tokio::test]
async fn happy_path_resolves_images_and_previews() {
    let mut canvas = Canvas::with_size(400.0, 500.0);
    canvas.add_text("HELLO").unwrap();
    let image_id = canvas.add_image(&tiny_png()).unwrap();

    let uploader = Arc::new(MemoryUploader::new());
    let cart = Arc::new(MemoryCart::new());
    let pipeline =
        CheckoutPipeline::new(uploader.clone(), renderer_for(&canvas), cart.clone());

    let outcome = pipeline
        .add_to_cart(
            &product(),
            &CheckoutRequest::new("L").with_color("black"),
            canvas.elements().cloned().collect(),
        )
        .await
        .unwrap();

    let payload = outcome.item.customization.as_ref().unwrap();
    assert_eq!(payload.product_id, "tee-1");
    assert_eq!(payload.elements.len(), 2);
    assert_eq!(payload.elements[0].z_index, 0);
    assert_eq!(payload.elements[1].z_index, 1);

    // The image element's content became an uploaded URL, with the
    // embedded original retained.
    let image_snapshot = payload
        .elements
        .iter()
        .find(|e| e.id == image_id)
        .unwrap();
    assert!(image_snapshot.content.starts_with("mem://customization-elements/"));
    assert!(image_snapshot
        .original_image_url
        .as_ref()
        .unwrap()
        .starts_with("data:image/png"));

    // Both previews captured and uploaded; the alias points at the front.
    assert!(payload.front_preview_image.is_some());
    assert!(payload.back_preview_image.is_some());
    assert_eq!(payload.preview_image, payload.front_preview_image);
    assert_eq!(payload.original_product_image, "https://shop.example/tee.png");

    // 1 element + 2 previews stored.
    assert_eq!(uploader.object_count(), 3);
    assert_eq!(cart.len(), 1);

    // Resolved elements are handed back for the host to sync.
    let resolved = outcome
        .elements
        .iter()
        .find(|e| e.id == image_id)
        .unwrap();
    assert!(matches!(
        resolved.as_image().unwrap().source,
        ImageSource::Remote(_)
    ));
}

#[tokio::test]
async fn failed_element_uploads_degrade_to_embedded_content() {
    let mut canvas = Canvas::with_size(400.0, 500.0);
    let keep_1 = canvas.add_image(&tiny_png()).unwrap();
    let fail = canvas.add_image(&tiny_png()).unwrap();
    let keep_2 = canvas.add_image(&tiny_png()).unwrap();

    let uploader = Arc::new(FlakyUploader {
        inner: MemoryUploader::new(),
        fail_hints: HashSet::from([fail.clone()]),
    });
    let cart = Arc::new(MemoryCart::new());
    let pipeline = CheckoutPipeline::new(uploader, renderer_for(&canvas), cart.clone());

    let outcome = pipeline
        .add_to_cart(
            &product(),
            &CheckoutRequest::new("S"),
            canvas.elements().cloned().collect(),
        )
        .await
        .unwrap();

    let payload = outcome.item.customization.as_ref().unwrap();
    assert_eq!(payload.elements.len(), 3);

    for id in [&keep_1, &keep_2] {
        let snapshot = payload.elements.iter().find(|e| &e.id == id).unwrap();
        assert!(snapshot.content.starts_with("mem://"));
    }
    // The failed element keeps its pre-upload content and no original_url.
    let failed = payload.elements.iter().find(|e| e.id == fail).unwrap();
    assert!(failed.content.starts_with("data:image/png"));
    assert!(failed.original_image_url.is_none());

    assert_eq!(cart.len(), 1);
}

#[tokio::test]
async fn failed_capture_yields_null_preview_for_that_side_only() {
    let mut canvas = Canvas::with_size(400.0, 500.0);
    canvas.add_text("HELLO").unwrap();

    let renderer = Arc::new(BackFailsRenderer {
        inner: BlockPreviewRenderer::from_canvas(&canvas, Size::new(448.0, 384.0)),
    });
    let cart = Arc::new(MemoryCart::new());
    let pipeline = CheckoutPipeline::new(Arc::new(MemoryUploader::new()), renderer, cart.clone());

    let outcome = pipeline
        .add_to_cart(
            &product(),
            &CheckoutRequest::new("M"),
            canvas.elements().cloned().collect(),
        )
        .await
        .unwrap();

    let payload = outcome.item.customization.as_ref().unwrap();
    assert!(payload.front_preview_image.is_some());
    assert!(payload.back_preview_image.is_none());
    assert_eq!(payload.preview_image, payload.front_preview_image);
    assert_eq!(cart.len(), 1);
}

#[tokio::test]
async fn second_submission_while_busy_is_rejected() {
    let mut canvas = Canvas::with_size(400.0, 500.0);
    canvas.add_text("HELLO").unwrap();
    let elements: Vec<_> = canvas.elements().cloned().collect();

    let renderer = Arc::new(GatedRenderer {
        gate: tokio::sync::Notify::new(),
    });
    let cart = Arc::new(MemoryCart::new());
    let pipeline = Arc::new(CheckoutPipeline::new(
        Arc::new(MemoryUploader::new()),
        renderer.clone(),
        cart.clone(),
    ));

    let first = {
        let pipeline = pipeline.clone();
        let elements = elements.clone();
        tokio::spawn(async move {
            pipeline
                .add_to_cart(&product(), &CheckoutRequest::new("M"), elements)
                .await
        })
    };

    // Let the first run reach the gated prepare step.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    assert!(pipeline.is_busy());

    let err = pipeline
        .add_to_cart(&product(), &CheckoutRequest::new("M"), elements)
        .await
        .unwrap_err();
    assert!(matches!(err, CheckoutError::Busy));

    // Release the first run; it must complete untouched by the rejection.
    renderer.gate.notify_waiters();
    let outcome = first.await.unwrap().unwrap();
    assert!(outcome.item.customization.is_some());
    assert_eq!(cart.len(), 1);
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn cart_failure_surfaces_and_leaves_cart_untouched() {
    let mut canvas = Canvas::with_size(400.0, 500.0);
    canvas.add_text("HELLO").unwrap();

    let pipeline = CheckoutPipeline::new(
        Arc::new(MemoryUploader::new()),
        renderer_for(&canvas),
        Arc::new(RejectingCart),
    );

    let err = pipeline
        .add_to_cart(
            &product(),
            &CheckoutRequest::new("M"),
            canvas.elements().cloned().collect(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Cart { .. }));
    // The guard is released even after a failure.
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn phase_listener_sees_ordered_progress() {
    use std::sync::Mutex;
    use teekit_checkout::CheckoutPhase;

    let mut canvas = Canvas::with_size(400.0, 500.0);
    canvas.add_text("HELLO").unwrap();

    let phases = Arc::new(Mutex::new(Vec::new()));
    let sink = phases.clone();
    let pipeline = CheckoutPipeline::new(
        Arc::new(MemoryUploader::new()),
        renderer_for(&canvas),
        Arc::new(MemoryCart::new()),
    )
    .with_phase_listener(Arc::new(move |phase| sink.lock().unwrap().push(phase)));

    pipeline
        .add_to_cart(
            &product(),
            &CheckoutRequest::new("M"),
            canvas.elements().cloned().collect(),
        )
        .await
        .unwrap();

    assert_eq!(
        *phases.lock().unwrap(),
        vec![
            CheckoutPhase::Preparing,
            CheckoutPhase::UploadingAssets,
            CheckoutPhase::CapturingPreviews,
            CheckoutPhase::UploadingPreviews,
            CheckoutPhase::Completed,
        ]
    );
}
