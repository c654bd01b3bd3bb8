//! Canvas: the interaction engine for the design surface.
//!
//! The canvas owns the element store and selection, defines the coordinate
//! frame (its current pixel dimensions), and translates pointer positions
//! into geometry mutations. It is fully headless; a host renders the
//! elements however it likes and feeds pointer events back in.

mod gestures;

pub use gestures::Gesture;

use tracing::debug;

use teekit_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, ROTATION_LIMIT_DEG};
use teekit_core::{CustomizerConfig, DesignError, PrintSide, Size, TextDefaults};

use crate::element_store::ElementStore;
use crate::model::{DesignElement, ElementUpdate};
use crate::selection_manager::SelectionManager;

/// Canvas state managing elements and interaction gestures.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub store: ElementStore,
    pub selection: SelectionManager,
    gesture: Gesture,
    width: f64,
    height: f64,
    active_side: PrintSide,
    text_defaults: TextDefaults,
    min_element_size: f64,
}

impl Canvas {
    /// Creates a canvas with the default dimensions.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        let config = CustomizerConfig {
            canvas_width: width,
            canvas_height: height,
            ..CustomizerConfig::default()
        };
        Self::from_config(&config)
    }

    /// Creates a canvas from a session configuration.
    pub fn from_config(config: &CustomizerConfig) -> Self {
        Self {
            store: ElementStore::new(),
            selection: SelectionManager::new(),
            gesture: Gesture::Idle,
            width: config.canvas_width,
            height: config.canvas_height,
            active_side: PrintSide::Front,
            text_defaults: config.text.clone(),
            min_element_size: config.min_element_size,
        }
    }

    /// Current canvas width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current canvas height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Updates the canvas dimensions (responsive layout).
    ///
    /// Element geometry is left untouched; bounds are re-applied the next
    /// time a gesture completes.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), DesignError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(DesignError::InvalidCanvasSize { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// The side currently being edited.
    pub fn active_side(&self) -> PrintSide {
        self.active_side
    }

    /// Switches the edited side. Ends any gesture and clears the selection,
    /// since the selected element is no longer visible.
    pub fn set_active_side(&mut self, side: PrintSide) {
        if side != self.active_side {
            self.active_side = side;
            self.gesture = Gesture::Idle;
            self.selection.clear();
        }
    }

    /// Style applied to newly added text elements.
    pub fn text_defaults(&self) -> &TextDefaults {
        &self.text_defaults
    }

    pub fn set_text_defaults(&mut self, defaults: TextDefaults) {
        self.text_defaults = defaults;
    }

    /// Adds a text element on the active side and selects it.
    ///
    /// Empty/whitespace content is a no-op returning `None`.
    pub fn add_text(&mut self, text: &str) -> Option<String> {
        let id = self.store.add_text(
            text,
            self.active_side,
            Size::new(self.width, self.height),
            &self.text_defaults,
        )?;
        self.selection.select(id.clone());
        Some(id)
    }

    /// Decodes image bytes into an element on the active side and selects it.
    pub fn add_image(&mut self, bytes: &[u8]) -> Result<String, DesignError> {
        let id = self
            .store
            .add_image(bytes, self.active_side, Size::new(self.width, self.height))?;
        self.selection.select(id.clone());
        Ok(id)
    }

    /// Merges partial updates into an element; no-op if the id is absent.
    pub fn update_element(&mut self, id: &str, update: ElementUpdate) -> bool {
        self.store.update(id, update)
    }

    /// Removes an element, clearing selection and any in-flight gesture
    /// that targets it.
    pub fn remove_element(&mut self, id: &str) -> Option<DesignElement> {
        let element = self.store.remove(id)?;
        self.selection.clear_if(id);
        if self.gesture.targets(id) {
            self.gesture = Gesture::Idle;
        }
        Some(element)
    }

    /// All elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &DesignElement> {
        self.store.iter()
    }

    /// Elements on one side, insertion order preserved.
    pub fn elements_for_side(&self, side: PrintSide) -> impl Iterator<Item = &DesignElement> {
        self.store.elements_for_side(side)
    }

    pub fn element_count(&self) -> usize {
        self.store.len()
    }

    /// The id of the selected element.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    /// Selects an element by id. Returns `false` if the id is absent.
    pub fn select_element(&mut self, id: &str) -> bool {
        if self.store.contains(id) {
            self.selection.select(id);
            true
        } else {
            false
        }
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// Sets an element's rotation, clamped to [-180, 180] degrees.
    ///
    /// This is the only rotation mutation path, so the clamp holds
    /// universally.
    pub fn set_rotation(&mut self, id: &str, degrees: f64) -> bool {
        match self.store.get_mut(id) {
            Some(element) => {
                element.rotation = degrees.clamp(-ROTATION_LIMIT_DEG, ROTATION_LIMIT_DEG);
                true
            }
            None => false,
        }
    }

    /// Centers one element inside the canvas, per axis.
    pub fn center_element(&mut self, id: &str) -> bool {
        let canvas = self.size();
        match self.store.get_mut(id) {
            Some(element) => {
                element.center_in(canvas);
                debug!(id = %id, "centered element");
                true
            }
            None => false,
        }
    }

    /// Centers every element on the active side simultaneously.
    pub fn center_active_side(&mut self) {
        let canvas = self.size();
        let side = self.active_side;
        for element in self.store.iter_mut().filter(|e| e.side == side) {
            element.center_in(canvas);
        }
        debug!(%side, "centered all elements on side");
    }

    /// Removes every element and resets interaction state.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
        self.gesture = Gesture::Idle;
    }

    /// Removes every element on one side.
    pub fn clear_side(&mut self, side: PrintSide) {
        let selected_on_side = self
            .selection
            .selected_id()
            .and_then(|id| self.store.get(id))
            .map(|e| e.side == side)
            .unwrap_or(false);
        if selected_on_side {
            self.selection.clear();
        }
        if self.gesture.target_side(&self.store) == Some(side) {
            self.gesture = Gesture::Idle;
        }
        self.store.clear_side(side);
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
