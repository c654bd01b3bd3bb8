//! Pointer gesture state machine for the canvas.
//!
//! One gesture is active at a time; starting a new gesture implicitly ends
//! any prior one. Dragging preserves the grab point and clamps the element
//! to the canvas on every move, using the element's current size so a
//! mid-drag resize stays consistent. Resizing floors dimensions and keeps
//! image aspect ratios, and never touches position.

use tracing::debug;

use teekit_core::{Point, PrintSide, Size};

use crate::element_store::ElementStore;

use super::Canvas;

/// The interaction state of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    /// Pointer is dragging an element; `grab_offset` is pointer minus the
    /// element's top-left at pointer-down.
    Dragging { id: String, grab_offset: Point },
    /// Pointer is resizing an element from its resize handle.
    Resizing {
        id: String,
        start_pointer: Point,
        start_size: Size,
    },
}

impl Gesture {
    /// Whether this gesture is manipulating the given element.
    pub fn targets(&self, element_id: &str) -> bool {
        match self {
            Gesture::Idle => false,
            Gesture::Dragging { id, .. } | Gesture::Resizing { id, .. } => id == element_id,
        }
    }

    /// The side of the element this gesture is manipulating, if any.
    pub(crate) fn target_side(&self, store: &ElementStore) -> Option<PrintSide> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { id, .. } | Gesture::Resizing { id, .. } => {
                store.get(id).map(|e| e.side)
            }
        }
    }
}

/// Clamps one axis so the element stays fully inside the canvas.
///
/// An element larger than the canvas pins to the origin.
fn clamp_axis(value: f64, extent: f64, canvas_dim: f64) -> f64 {
    value.clamp(0.0, (canvas_dim - extent).max(0.0))
}

impl Canvas {
    /// The current gesture state.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Pointer-down on the canvas.
    ///
    /// Hit-tests the active side topmost-first. A hit selects the element
    /// and begins a drag that preserves the grab point; a miss clears the
    /// selection. Returns the hit element's id.
    pub fn pointer_down(&mut self, pointer: Point) -> Option<String> {
        // Topmost first: reverse insertion order.
        let hit = self
            .store
            .elements_for_side(self.active_side)
            .rev()
            .find(|e| e.contains_point(pointer))
            .map(|e| (e.id.clone(), e.position));

        match hit {
            Some((id, position)) => {
                self.selection.select(id.clone());
                self.gesture = Gesture::Dragging {
                    id: id.clone(),
                    grab_offset: Point::new(pointer.x - position.x, pointer.y - position.y),
                };
                debug!(id = %id, "drag started");
                Some(id)
            }
            None => {
                self.selection.clear();
                self.gesture = Gesture::Idle;
                None
            }
        }
    }

    /// Begins a resize gesture for the selected element, initiated from its
    /// resize handle.
    ///
    /// A no-op returning `false` when nothing is selected (e.g. the
    /// selected element was just deleted) or the selection is stale.
    pub fn begin_resize_selected(&mut self, pointer: Point) -> bool {
        let Some(id) = self.selection.selected_id().map(str::to_string) else {
            return false;
        };
        let Some(element) = self.store.get(&id) else {
            return false;
        };
        self.gesture = Gesture::Resizing {
            id: id.clone(),
            start_pointer: pointer,
            start_size: element.size,
        };
        debug!(id = %id, "resize started");
        true
    }

    /// Pointer-move; advances whichever gesture is active.
    pub fn pointer_move(&mut self, pointer: Point) {
        match self.gesture.clone() {
            Gesture::Idle => {}
            Gesture::Dragging { id, grab_offset } => self.drag_to(&id, pointer, grab_offset),
            Gesture::Resizing {
                id,
                start_pointer,
                start_size,
            } => self.resize_to(&id, pointer, start_pointer, start_size),
        }
    }

    /// Pointer-up anywhere (including outside the canvas) ends the gesture.
    /// No snapping or inertia.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    fn drag_to(&mut self, id: &str, pointer: Point, grab_offset: Point) {
        let (canvas_w, canvas_h) = (self.width(), self.height());
        let Some(element) = self.store.get_mut(id) else {
            // Element vanished mid-gesture.
            self.gesture = Gesture::Idle;
            return;
        };
        // Clamp against the element's current size, not a pointer-down
        // snapshot, so a resize mid-drag stays consistent.
        element.position.x =
            clamp_axis(pointer.x - grab_offset.x, element.size.width, canvas_w);
        element.position.y =
            clamp_axis(pointer.y - grab_offset.y, element.size.height, canvas_h);
    }

    fn resize_to(&mut self, id: &str, pointer: Point, start_pointer: Point, start_size: Size) {
        let min = self.min_element_size;
        let Some(element) = self.store.get_mut(id) else {
            self.gesture = Gesture::Idle;
            return;
        };
        let dx = pointer.x - start_pointer.x;
        let dy = pointer.y - start_pointer.y;

        if element.is_image() {
            // Preserve the gesture-start aspect ratio. The width floor is
            // raised for wide images so the derived height also respects
            // the minimum.
            let aspect = start_size.aspect_ratio();
            let min_width = if aspect >= 1.0 { min * aspect } else { min };
            let width = (start_size.width + dx).max(min_width);
            element.size.width = width;
            element.size.height = width / aspect;
        } else {
            element.size.width = (start_size.width + dx).max(min);
            element.size.height = (start_size.height + dy).max(min);
        }
    }
}
