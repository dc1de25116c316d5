// Design tokens used by the draggable container and its affordance

pub mod animation;
pub mod color;
pub mod shadow;
pub mod theme;
pub use animation::*;
pub use color::*;
pub use shadow::*;
pub use theme::*;
