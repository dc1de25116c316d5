//! Per-instance widget state: tracker, placement request and latched layout mode.

use crate::drag::{DragProfile, DragTracker, InputSource};
use crate::geometry::{Position, Rect, Viewport};
use crate::layout::{LayoutMode, LayoutStyle};
use crate::placement::{self, Measurements, PlacementRequest};
use crate::region::Region;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraggableState {
    tracker: DragTracker,
    request: PlacementRequest,
    layout: LayoutMode,
}

impl DraggableState {
    /// The layout is decided from the request already, so a random or fixed
    /// widget is pixel-positioned from its first render.
    pub fn new(profile: DragProfile, request: PlacementRequest) -> Self {
        let mut tracker = DragTracker::new(profile);
        if let Some(position) = request.initial_position {
            tracker.set_position(position);
        }
        Self {
            tracker,
            request,
            layout: LayoutMode::select(LayoutMode::Sticky, false, request.is_explicit()),
        }
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn request(&self) -> PlacementRequest {
        self.request
    }

    pub fn position(&self) -> Position {
        self.tracker.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn style(&self) -> LayoutStyle {
        self.layout.style(self.position())
    }

    /// `None` for profiles without region styling.
    pub fn region(&self, viewport: Viewport) -> Option<Region> {
        self.tracker
            .profile()
            .region_styling
            .then(|| Region::classify(self.position(), viewport))
    }

    /// Replace the placement inputs. Returns `true` when they changed and
    /// placement has to be resolved again.
    pub fn set_request(&mut self, request: PlacementRequest) -> bool {
        if self.request == request {
            return false;
        }
        self.request = request;
        self.refresh_layout();
        true
    }

    /// Run the placement resolver against the current request.
    pub fn apply_placement(
        &mut self,
        measurements: Option<&Measurements>,
        random_unit: impl FnMut() -> f64,
    ) -> Option<Position> {
        let position = placement::resolve(
            &self.request,
            self.tracker.profile(),
            measurements,
            random_unit,
        )?;
        self.tracker.set_position(position);
        Some(position)
    }

    pub fn start(&mut self, source: InputSource, contact: Position, rect: Option<Rect>) -> bool {
        self.tracker.start(source, contact, rect)
    }

    pub fn move_to(&mut self, source: InputSource, contact: Position) -> Option<Position> {
        let position = self.tracker.move_to(source, contact)?;
        self.refresh_layout();
        Some(position)
    }

    pub fn end(&mut self, source: InputSource) -> bool {
        self.tracker.end(source)
    }

    pub fn cancel(&mut self) -> bool {
        self.tracker.cancel()
    }

    fn refresh_layout(&mut self) {
        self.layout = LayoutMode::select(
            self.layout,
            self.tracker.has_moved(),
            self.request.is_explicit(),
        );
    }
}
