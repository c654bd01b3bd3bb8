//! # Teekit Designer
//!
//! The headless design surface of the Teekit customization engine. It holds
//! the placed text and image layers for both print sides of a product and
//! turns pointer positions into geometry mutations, without any rendering
//! or DOM dependency.
//!
//! ## Core Components
//!
//! - **Model**: `DesignElement` and its text/image content variants
//! - **Element Store**: ordered, side-partitioned collection of elements
//! - **Canvas**: the interaction engine — selection, drag, resize, rotate,
//!   centering, all constrained to the canvas viewport
//! - **Preview**: the stateless letterbox transform from live-canvas space
//!   into the fixed preview viewport
//! - **Serialization**: versioned JSON design files
//!
//! ## Architecture
//!
//! ```text
//! Canvas (coordinate frame + gestures)
//!   ├── ElementStore (insertion-ordered layers, front/back)
//!   ├── SelectionManager (single primary selection)
//!   └── Gesture (Idle / Dragging / Resizing state machine)
//!
//! PreviewTransform (canvas space → preview space, pure)
//! DesignFile (save/load)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use teekit_core::Point;
//! use teekit_designer::Canvas;
//!
//! let mut canvas = Canvas::with_size(400.0, 500.0);
//! let id = canvas.add_text("HELLO").unwrap();
//!
//! // Grab the element at its top-left corner and drag it 50px down-right.
//! let grab = canvas.store.get(&id).unwrap().position;
//! canvas.pointer_down(grab);
//! canvas.pointer_move(Point::new(grab.x + 50.0, grab.y + 50.0));
//! canvas.pointer_up();
//! # assert_eq!(canvas.selected_id(), Some(id.as_str()));
//! ```

pub mod canvas;
pub mod element_store;
pub mod model;
pub mod preview;
pub mod selection_manager;
pub mod serialization;

pub use canvas::{Canvas, Gesture};
pub use element_store::ElementStore;
pub use model::{
    DesignElement, ElementContent, ElementKind, ElementUpdate, ImageContent, ImageSource,
    TextContent,
};
pub use preview::{PlacedElement, PreviewTransform};
pub use selection_manager::SelectionManager;
pub use serialization::{DesignFile, DesignMetadata};
