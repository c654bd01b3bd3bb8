//! In-memory store of placed design elements.
//!
//! Insertion order is render order within a side. The store never persists
//! anything itself; whole sessions are saved through `serialization` and
//! finalized aggregates cross the cart boundary in `teekit-checkout`.

use tracing::debug;
use uuid::Uuid;

use teekit_core::constants::{
    DEFAULT_IMAGE_SIZE, DEFAULT_TEXT_HEIGHT, DEFAULT_TEXT_WIDTH,
};
use teekit_core::{DesignError, Point, PrintSide, Size, TextDefaults};

use crate::model::{
    DesignElement, ElementContent, ElementUpdate, ImageContent, TextContent,
};

/// Ordered collection of design elements for one customization session.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<DesignElement>,
    next_seq: u64,
}

impl ElementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new unique element id.
    ///
    /// Combines a monotonic sequence number with a random tail so ids stay
    /// unique across save/load of a session.
    pub fn generate_id(&mut self) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("el-{}-{}", seq, Uuid::new_v4().simple())
    }

    /// Creates a text element using the configured text defaults.
    ///
    /// The element is sized 200x50, centered horizontally, one-third down
    /// the canvas. Empty or whitespace-only content is a no-op returning
    /// `None`.
    pub fn add_text(
        &mut self,
        text: &str,
        side: PrintSide,
        canvas: Size,
        defaults: &TextDefaults,
    ) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.generate_id();
        let size = Size::new(DEFAULT_TEXT_WIDTH, DEFAULT_TEXT_HEIGHT);
        let element = DesignElement {
            id: id.clone(),
            side,
            position: Point::new((canvas.width - size.width) / 2.0, canvas.height / 3.0),
            size,
            rotation: 0.0,
            content: ElementContent::Text(TextContent {
                text: text.to_string(),
                font_size: defaults.font_size,
                font_family: defaults.font_family.clone(),
                color: defaults.color.clone(),
            }),
        };
        debug!(id = %id, %side, "added text element");
        self.elements.push(element);
        Some(id)
    }

    /// Decodes image bytes and creates a 150x150 image element centered at
    /// canvas mid-height.
    ///
    /// The bytes are validated with a full decode; malformed files produce
    /// no element. The payload is kept as an embedded data-URI until the
    /// finalization pipeline uploads it.
    pub fn add_image(
        &mut self,
        bytes: &[u8],
        side: PrintSide,
        canvas: Size,
    ) -> Result<String, DesignError> {
        let format = image::guess_format(bytes).map_err(|e| DesignError::ImageDecode {
            reason: e.to_string(),
        })?;
        image::load_from_memory(bytes).map_err(|e| DesignError::ImageDecode {
            reason: e.to_string(),
        })?;

        let id = self.generate_id();
        let size = Size::new(DEFAULT_IMAGE_SIZE, DEFAULT_IMAGE_SIZE);
        let element = DesignElement {
            id: id.clone(),
            side,
            position: Point::new(
                (canvas.width - size.width) / 2.0,
                (canvas.height - size.height) / 2.0,
            ),
            size,
            rotation: 0.0,
            content: ElementContent::Image(ImageContent::embedded(
                format.to_mime_type(),
                bytes,
            )),
        };
        debug!(id = %id, %side, bytes = bytes.len(), "added image element");
        self.elements.push(element);
        Ok(id)
    }

    /// Merges partial field updates into the element matching `id`.
    ///
    /// Returns `false` (no-op) if the id is absent.
    pub fn update(&mut self, id: &str, update: ElementUpdate) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                update.apply(element);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element matching `id`.
    pub fn remove(&mut self, id: &str) -> Option<DesignElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        let element = self.elements.remove(index);
        debug!(id = %id, "removed element");
        Some(element)
    }

    pub fn get(&self, id: &str) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut DesignElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DesignElement> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DesignElement> {
        self.elements.iter_mut()
    }

    /// Elements belonging to one side, insertion order preserved.
    pub fn elements_for_side(
        &self,
        side: PrintSide,
    ) -> impl DoubleEndedIterator<Item = &DesignElement> {
        self.elements.iter().filter(move |e| e.side == side)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Removes every element on one side.
    pub fn clear_side(&mut self, side: PrintSide) {
        self.elements.retain(|e| e.side != side);
    }

    /// Restores an element (used by design-file loading).
    pub fn insert(&mut self, element: DesignElement) {
        self.elements.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Size {
        Size::new(400.0, 500.0)
    }

    #[test]
    fn add_text_places_one_third_down() {
        let mut store = ElementStore::new();
        let id = store
            .add_text("HELLO", PrintSide::Front, canvas(), &TextDefaults::default())
            .unwrap();
        let element = store.get(&id).unwrap();
        assert_eq!(element.position, Point::new(100.0, 500.0 / 3.0));
        assert_eq!(element.size, Size::new(200.0, 50.0));
    }

    #[test]
    fn add_text_rejects_whitespace() {
        let mut store = ElementStore::new();
        assert!(store
            .add_text("   ", PrintSide::Front, canvas(), &TextDefaults::default())
            .is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn add_image_rejects_malformed_bytes() {
        let mut store = ElementStore::new();
        let err = store
            .add_image(b"not an image", PrintSide::Front, canvas())
            .unwrap_err();
        assert!(matches!(err, DesignError::ImageDecode { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_never_collide() {
        let mut store = ElementStore::new();
        let a = store.generate_id();
        let b = store.generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn side_filter_is_exhaustive() {
        let mut store = ElementStore::new();
        let defaults = TextDefaults::default();
        store.add_text("front", PrintSide::Front, canvas(), &defaults);
        store.add_text("back", PrintSide::Back, canvas(), &defaults);
        store.add_text("front2", PrintSide::Front, canvas(), &defaults);

        let fronts: Vec<_> = store.elements_for_side(PrintSide::Front).collect();
        assert_eq!(fronts.len(), 2);
        assert!(fronts.iter().all(|e| e.side == PrintSide::Front));
        assert_eq!(store.elements_for_side(PrintSide::Back).count(), 1);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut store = ElementStore::new();
        assert!(!store.update("nope", ElementUpdate::default()));
    }
}
