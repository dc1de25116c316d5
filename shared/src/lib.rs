//! Platform-independent drag model shared by the MoonZoon components.
//!
//! Nothing in this crate touches the DOM: host measurements come in as plain
//! values and the results are plain values, so every rule can be tested natively.

pub mod config;
pub mod drag;
pub mod geometry;
pub mod layout;
pub mod placement;
pub mod region;
pub mod widget;

pub use config::{BoardConfig, ConfigError, DraggableOptions, WidgetConfig};
pub use drag::{DragProfile, DragTracker, InputSource};
pub use geometry::{Offset, Position, Rect, ScrollOffset, Size, Viewport};
pub use layout::{LayoutMode, LayoutStyle};
pub use placement::{Measurements, PlacementRequest};
pub use region::Region;
pub use widget::DraggableState;
