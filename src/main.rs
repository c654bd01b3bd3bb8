//! Scripted headless customization session.
//!
//! Builds a small design (text + image layers), exercises drag/resize/
//! centering, runs the finalization pipeline against the bundled in-memory
//! collaborators, and prints the resulting cart item as JSON.

use std::sync::Arc;

use tracing::info;

use teekit::{
    init_logging, BlockPreviewRenderer, Canvas, CheckoutPipeline, CheckoutRequest, ElementUpdate,
    MemoryCart, MemoryCatalog, MemoryUploader, Point, PrintSide, Product, ProductCatalog, Size,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = teekit::VERSION, built = teekit::BUILD_DATE, "teekit demo");

    let catalog = MemoryCatalog::new().with_product(Product {
        id: "tee-classic".to_string(),
        name: "Classic Tee".to_string(),
        price: 24.5,
        image: "https://shop.example/img/tee-classic.png".to_string(),
        front_image: Some("https://shop.example/img/tee-classic-front.png".to_string()),
        back_image: Some("https://shop.example/img/tee-classic-back.png".to_string()),
    });
    let product = catalog.product("tee-classic").await?;

    // Lay out a design: a slogan on the front, a logo block on the back.
    let mut canvas = Canvas::with_size(400.0, 500.0);
    let slogan = canvas
        .add_text("HELLO WORLD")
        .expect("non-empty text always yields an element");
    canvas.update_element(
        &slogan,
        ElementUpdate {
            color: Some("#d03010".to_string()),
            ..Default::default()
        },
    );
    canvas.set_rotation(&slogan, -12.0);

    // Drag the slogan toward the top-left, grabbing it at its corner.
    let grab = canvas.store.get(&slogan).unwrap().position;
    canvas.pointer_down(grab);
    canvas.pointer_move(Point::new(grab.x - 60.0, grab.y - 90.0));
    canvas.pointer_up();

    canvas.set_active_side(PrintSide::Back);
    let logo = canvas.add_image(&logo_png())?;
    canvas.center_element(&logo);

    // Grow the logo from its resize handle, aspect preserved.
    canvas.select_element(&logo);
    canvas.begin_resize_selected(Point::new(0.0, 0.0));
    canvas.pointer_move(Point::new(40.0, 0.0));
    canvas.pointer_up();

    info!(elements = canvas.element_count(), "design ready");

    let uploader = Arc::new(MemoryUploader::new());
    let renderer = Arc::new(BlockPreviewRenderer::from_canvas(
        &canvas,
        Size::new(448.0, 384.0),
    ));
    let cart = Arc::new(MemoryCart::new());
    let pipeline = CheckoutPipeline::new(uploader.clone(), renderer, cart.clone())
        .with_phase_listener(Arc::new(|phase| info!(?phase, "checkout progress")));

    let outcome = pipeline
        .add_to_cart(
            &product,
            &CheckoutRequest::new("M").with_color("black"),
            canvas.elements().cloned().collect(),
        )
        .await?;

    info!(
        uploads = uploader.object_count(),
        cart_items = cart.len(),
        "checkout finished"
    );
    println!("{}", serde_json::to_string_pretty(&outcome.item)?);
    Ok(())
}

/// A tiny generated PNG standing in for a user-uploaded logo.
fn logo_png() -> Vec<u8> {
    let mut img = image::RgbaImage::from_pixel(32, 32, image::Rgba([20, 60, 160, 255]));
    for i in 0..32 {
        img.put_pixel(i, i, image::Rgba([255, 255, 255, 255]));
        img.put_pixel(31 - i, i, image::Rgba([255, 255, 255, 255]));
    }
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("in-memory png encode");
    buf.into_inner()
}
