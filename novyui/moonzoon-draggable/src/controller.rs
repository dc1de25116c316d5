//! DOM binding of the shared drag model.
//!
//! Data flows: DOM events → `DraggableState` (inside a `Mutable`) → style/class signals.
//! One controller per widget instance; both the full component and the lighter
//! handle are thin layers over it, distinguished only by their `DragProfile`.

use crate::host;
use crate::listeners::ListenerScope;
use shared::{
    DragProfile, DraggableState, InputSource, LayoutMode, LayoutStyle, PlacementRequest, Position,
    Region, Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, TouchEvent};
use zoon::*;

type DragEndHandler = Box<dyn FnMut(Position)>;

/// Drag-end callback that may replace itself while it runs.
#[derive(Clone, Default)]
struct DragEndSlot(Rc<RefCell<Option<DragEndHandler>>>);

impl DragEndSlot {
    fn set(&self, handler: DragEndHandler) {
        *self.0.borrow_mut() = Some(handler);
    }

    fn call(&self, position: Position) {
        let Some(mut handler) = self.0.borrow_mut().take() else {
            return;
        };
        handler(position);
        // Keep a replacement installed by the handler itself
        let mut slot = self.0.borrow_mut();
        if slot.is_none() {
            *slot = Some(handler);
        }
    }
}

/// Apply a move only while a session is active, so idle pointer traffic
/// never marks the state as changed.
fn track_session(
    state: &Mutable<DraggableState>,
    source: InputSource,
    contact: Position,
) -> Option<Position> {
    if !state.lock_ref().is_dragging() {
        return None;
    }
    state.lock_mut().move_to(source, contact)
}

fn end_session(state: &Mutable<DraggableState>, source: InputSource) -> bool {
    if !state.lock_ref().is_dragging() {
        return false;
    }
    state.lock_mut().end(source)
}

#[derive(Clone)]
pub struct DragController {
    state: Mutable<DraggableState>,
    viewport: Mutable<Viewport>,
    element: Rc<RefCell<Option<HtmlElement>>>,
    listeners: Rc<RefCell<Option<ListenerScope>>>,
    tasks: Rc<RefCell<Vec<TaskHandle>>>,
    drag_end_handler: DragEndSlot,
}

impl DragController {
    pub fn new(profile: DragProfile, request: PlacementRequest) -> Self {
        Self {
            state: Mutable::new(DraggableState::new(profile, request)),
            viewport: Mutable::new(host::viewport().unwrap_or_default()),
            element: Rc::new(RefCell::new(None)),
            listeners: Rc::new(RefCell::new(None)),
            tasks: Rc::new(RefCell::new(Vec::new())),
            drag_end_handler: DragEndSlot::default(),
        }
    }

    // === STATE ACCESS ===

    pub fn position(&self) -> Position {
        self.state.lock_ref().position()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.lock_ref().is_dragging()
    }

    pub fn layout(&self) -> LayoutMode {
        self.state.lock_ref().layout()
    }

    pub fn is_mounted(&self) -> bool {
        self.element.borrow().is_some()
    }

    // === SIGNALS ===

    pub fn position_signal(&self) -> impl Signal<Item = Position> + use<> {
        self.state.signal_ref(|state| state.position())
    }

    pub fn is_dragging_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal_ref(|state| state.is_dragging())
    }

    pub fn layout_signal(&self) -> impl Signal<Item = LayoutMode> + use<> {
        self.state.signal_ref(|state| state.layout())
    }

    pub fn style_signal(&self) -> impl Signal<Item = LayoutStyle> + use<> {
        self.state.signal_ref(|state| state.style())
    }

    /// Recomputed whenever the position or the viewport changes.
    pub fn region_signal(&self) -> impl Signal<Item = Option<Region>> + use<> {
        map_ref! {
            let state = self.state.signal_cloned(),
            let viewport = self.viewport.signal() => {
                state.region(*viewport)
            }
        }
    }

    // === CONFIGURATION ===

    pub fn set_drag_end_handler(&self, handler: impl FnMut(Position) + 'static) {
        self.drag_end_handler.set(Box::new(handler));
    }

    /// Keep a task alive until the element is removed.
    pub fn keep_alive(&self, task: TaskHandle) {
        self.tasks.borrow_mut().push(task);
    }

    /// Replace the placement inputs and resolve placement again if they changed.
    pub fn request_placement(&self, request: PlacementRequest) {
        if self.state.lock_ref().request() == request {
            return;
        }
        let changed = self.state.lock_mut().set_request(request);
        if changed {
            self.resolve_placement();
        }
    }

    // === LIFECYCLE ===

    /// Wire the controller to a raw element: placement and listeners on insert,
    /// release on removal.
    pub fn attach<R>(&self, raw_el: R) -> R
    where
        R: RawEl<DomElement = HtmlElement>,
    {
        let on_insert = self.clone();
        let on_remove = self.clone();
        raw_el
            .after_insert(move |element| on_insert.mount(element))
            .after_remove(move |_| on_remove.unmount())
    }

    fn mount(&self, element: HtmlElement) {
        *self.element.borrow_mut() = Some(element.clone());
        if let Some(viewport) = host::viewport() {
            self.viewport.set_neq(viewport);
        }
        self.resolve_placement();
        *self.listeners.borrow_mut() = Some(self.register_listeners(&element));
    }

    fn unmount(&self) {
        drop(self.listeners.borrow_mut().take());
        if self.is_dragging() {
            self.state.lock_mut().cancel();
        }
        self.tasks.borrow_mut().clear();
        self.element.borrow_mut().take();
    }

    fn resolve_placement(&self) {
        let measurements = self.element.borrow().as_ref().and_then(host::measure);
        let mut state = self.state.lock_mut();
        let resolved = state.apply_placement(measurements.as_ref(), host::random_unit);
        if resolved.is_none() && measurements.is_none() {
            zoon::println!("[draggable] placement deferred: element not measurable yet");
        }
    }

    fn register_listeners(&self, element: &HtmlElement) -> ListenerScope {
        let mut scope = ListenerScope::new();
        let profile = self.state.lock_ref().tracker().profile();

        scope.listen(element, "mousedown", {
            let controller = self.clone();
            move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    if host::is_primary_button(event) {
                        controller.start(InputSource::Mouse, host::mouse_contact(event));
                    }
                }
            }
        });

        let Some(window) = web_sys::window() else {
            zoon::eprintln!("[draggable] no window, global drag listeners not registered");
            return scope;
        };

        scope.listen(&window, "mousemove", {
            let controller = self.clone();
            move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    controller.track(InputSource::Mouse, host::mouse_contact(event));
                }
            }
        });
        scope.listen(&window, "mouseup", {
            let controller = self.clone();
            move |_| controller.end(InputSource::Mouse)
        });
        scope.listen(&window, "resize", {
            let viewport = self.viewport.clone();
            move |_| {
                if let Some(current) = host::viewport() {
                    viewport.set_neq(current);
                }
            }
        });

        if profile.touch {
            scope.listen(element, "touchstart", {
                let controller = self.clone();
                move |event| {
                    if let Some(contact) = event.dyn_ref::<TouchEvent>().and_then(host::touch_contact) {
                        controller.start(InputSource::Touch, contact);
                    }
                }
            });
            scope.listen_active(&window, "touchmove", {
                let controller = self.clone();
                move |event| {
                    if !controller.is_dragging() {
                        return;
                    }
                    // Keep the page from scrolling or zooming under the finger
                    event.prevent_default();
                    if let Some(contact) = event.dyn_ref::<TouchEvent>().and_then(host::touch_contact) {
                        controller.track(InputSource::Touch, contact);
                    }
                }
            });
            scope.listen(&window, "touchend", {
                let controller = self.clone();
                move |_| controller.end(InputSource::Touch)
            });
        }

        scope
    }

    // === DRAG SESSION ===

    fn start(&self, source: InputSource, contact: Position) {
        let rect = self.element.borrow().as_ref().and_then(host::element_rect);
        self.state.lock_mut().start(source, contact, rect);
    }

    fn track(&self, source: InputSource, contact: Position) {
        if !self.is_mounted() {
            return;
        }
        track_session(&self.state, source, contact);
    }

    fn end(&self, source: InputSource) {
        if !end_session(&self.state, source) {
            return;
        }
        self.drag_end_handler.call(self.position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{FutureExt, StreamExt};

    fn idle_state() -> Mutable<DraggableState> {
        Mutable::new(DraggableState::new(DragProfile::FULL, PlacementRequest::default()))
    }

    #[test]
    fn test_idle_pointer_traffic_does_not_notify() {
        let state = idle_state();
        let mut styles = state.signal_ref(|state| state.style()).to_stream();
        assert!(styles.next().now_or_never().flatten().is_some());

        assert_eq!(track_session(&state, InputSource::Mouse, Position::new(40.0, 40.0)), None);
        assert!(!end_session(&state, InputSource::Mouse));

        assert!(styles.next().now_or_never().is_none());
    }

    #[test]
    fn test_active_session_notifies_on_move() {
        let state = idle_state();
        state
            .lock_mut()
            .start(InputSource::Mouse, Position::new(10.0, 10.0), None);
        let mut positions = state.signal_ref(|state| state.position()).to_stream();
        assert!(positions.next().now_or_never().flatten().is_some());

        assert_eq!(
            track_session(&state, InputSource::Mouse, Position::new(30.0, 50.0)),
            Some(Position::new(30.0, 50.0))
        );
        assert_eq!(
            positions.next().now_or_never().flatten(),
            Some(Position::new(30.0, 50.0))
        );
        assert!(end_session(&state, InputSource::Mouse));
    }

    #[test]
    fn test_drag_end_handler_can_replace_itself() {
        let slot = DragEndSlot::default();
        let calls = Rc::new(RefCell::new(Vec::new()));

        slot.set(Box::new({
            let slot = slot.clone();
            let calls = calls.clone();
            move |position| {
                calls.borrow_mut().push(("first", position));
                let calls = calls.clone();
                slot.set(Box::new(move |position| calls.borrow_mut().push(("second", position))));
            }
        }));

        slot.call(Position::new(1.0, 2.0));
        slot.call(Position::new(3.0, 4.0));
        assert_eq!(
            *calls.borrow(),
            vec![("first", Position::new(1.0, 2.0)), ("second", Position::new(3.0, 4.0))]
        );
    }

    #[test]
    fn test_drag_end_handler_is_kept_between_sessions() {
        let slot = DragEndSlot::default();
        let count = Rc::new(RefCell::new(0));
        slot.set(Box::new({
            let count = count.clone();
            move |_| *count.borrow_mut() += 1
        }));

        slot.call(Position::ORIGIN);
        slot.call(Position::ORIGIN);
        assert_eq!(*count.borrow(), 2);
    }
}
