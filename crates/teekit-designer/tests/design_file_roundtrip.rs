//! Save/load tests for design files.

use teekit_core::{Point, PrintSide};
use teekit_designer::{Canvas, DesignFile, ElementUpdate};

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(3, 3, image::Rgba([0, 0, 255, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[test]
fn test_design_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shirt.teekit");

    let mut canvas = Canvas::with_size(640.0, 480.0);
    let text_id = canvas.add_text("HELLO").unwrap();
    canvas.update_element(
        &text_id,
        ElementUpdate {
            position: Some(Point::new(12.0, 34.0)),
            color: Some("#ff8800".to_string()),
            ..Default::default()
        },
    );
    canvas.set_rotation(&text_id, -30.0);
    canvas.set_active_side(PrintSide::Back);
    let image_id = canvas.add_image(&tiny_png()).unwrap();

    let saved = DesignFile::from_canvas(&canvas, "my shirt", "prod-42");
    saved.save(&path).unwrap();

    let loaded = DesignFile::load(&path).unwrap();
    assert_eq!(loaded.version, "1.0");
    assert_eq!(loaded.metadata.name, "my shirt");
    assert_eq!(loaded.metadata.product_id, "prod-42");
    assert_eq!(loaded.elements.len(), 2);

    let restored = loaded.into_canvas().unwrap();
    assert_eq!(restored.width(), 640.0);
    assert_eq!(restored.height(), 480.0);
    assert_eq!(restored.active_side(), PrintSide::Back);

    let text = restored.store.get(&text_id).unwrap();
    assert_eq!(text.position, Point::new(12.0, 34.0));
    assert_eq!(text.rotation, -30.0);
    assert_eq!(text.as_text().unwrap().color, "#ff8800");

    let image = restored.store.get(&image_id).unwrap();
    let source = &image.as_image().unwrap().source;
    assert!(source.is_embedded());
    assert_eq!(source.embedded_bytes().unwrap(), tiny_png());

    // Selection and gestures are session state, not file state.
    assert_eq!(restored.selected_id(), None);
}

#[test]
fn test_load_missing_file_fails_with_context() {
    let err = DesignFile::load(std::path::Path::new("/nonexistent/file.teekit")).unwrap_err();
    assert!(err.to_string().contains("Failed to read design file"));
}
