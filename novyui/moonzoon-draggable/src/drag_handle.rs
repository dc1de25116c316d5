// Drag Handle
// Drag logic without presentation, for components that render themselves.
// Mouse input only; placement is fixed or random, never read back from the DOM.

use crate::controller::DragController;
use shared::{DragProfile, PlacementRequest, Position};
use web_sys::HtmlElement;
use zoon::*;

#[derive(Clone)]
pub struct DragHandle {
    controller: DragController,
}

impl DragHandle {
    pub fn new(request: PlacementRequest) -> Self {
        Self {
            controller: DragController::new(DragProfile::MOUSE_ONLY, request),
        }
    }

    pub fn position(&self) -> Position {
        self.controller.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn position_signal(&self) -> impl Signal<Item = Position> + use<> {
        self.controller.position_signal()
    }

    pub fn is_dragging_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.controller.is_dragging_signal()
    }

    /// Re-resolve placement when the inputs change; unchanged inputs are a no-op.
    pub fn request_placement(&self, request: PlacementRequest) {
        self.controller.request_placement(request);
    }

    pub fn on_drag_end(&self, handler: impl FnMut(Position) + 'static) {
        self.controller.set_drag_end_handler(handler);
    }

    /// Make `raw_el` the dragged element.
    ///
    /// ```rust,ignore
    /// let handle = DragHandle::new(PlacementRequest::random());
    /// El::new()
    ///     .update_raw_el({
    ///         let handle = handle.clone();
    ///         move |raw_el| {
    ///             handle
    ///                 .bind(raw_el)
    ///                 .style("position", "absolute")
    ///                 .style_signal("left", handle.position_signal().map(|p| format!("{}px", p.x)))
    ///                 .style_signal("top", handle.position_signal().map(|p| format!("{}px", p.y)))
    ///         }
    ///     })
    /// ```
    pub fn bind<R>(&self, raw_el: R) -> R
    where
        R: RawEl<DomElement = HtmlElement>,
    {
        self.controller.attach(raw_el)
    }
}
