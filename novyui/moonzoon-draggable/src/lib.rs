//! # MoonZoon Draggable
//!
//! A draggable container and a drag handle for MoonZoon applications.
//!
//! - **`draggable(child)`**: self-contained widget. Mouse and touch input,
//!   fixed / random / rendered-position placement, region class
//!   (`left-side`, `right-side`, `top-side`, `bottom-side`, `center`) and a
//!   `dragging` class while held.
//! - **`DragHandle`**: the same drag logic without presentation, mouse only,
//!   for components that render their own element.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moonzoon_draggable::*;
//! use zoon::*;
//!
//! fn sticker() -> impl Element {
//!     draggable(Text::new("Hello"))
//!         .random_position(true)
//!         .show_tooltip(true)
//!         .on_drag_end(|position| zoon::println!("dropped at {position:?}"))
//!         .build()
//! }
//! ```

pub mod controller;
pub mod drag_handle;
pub mod draggable;
pub mod host;
pub mod listeners;
pub mod tokens;

pub use controller::DragController;
pub use drag_handle::DragHandle;
pub use draggable::{draggable, DraggableBuilder};

// Model types callers need for options and callbacks
pub use shared::{DraggableOptions, LayoutMode, PlacementRequest, Position, Region};

// Re-export zoon for convenience
pub use zoon;
