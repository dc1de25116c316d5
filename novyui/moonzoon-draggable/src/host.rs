//! Read-only queries against the hosting page.
//!
//! Every query returns `None` when the host cannot answer (no window, element
//! detached); callers skip their update for that cycle.

use shared::{Measurements, Position, Rect, ScrollOffset, Size, Viewport};
use web_sys::{HtmlElement, MouseEvent, TouchEvent};

pub fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

pub fn scroll_offset() -> Option<ScrollOffset> {
    let window = web_sys::window()?;
    Some(ScrollOffset::new(
        window.scroll_x().ok()?,
        window.scroll_y().ok()?,
    ))
}

/// Bounding box of an attached element.
pub fn element_rect(element: &HtmlElement) -> Option<Rect> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

pub fn element_size(element: &HtmlElement) -> Option<Size> {
    if !element.is_connected() {
        return None;
    }
    Some(Size::new(
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    ))
}

pub fn measure(element: &HtmlElement) -> Option<Measurements> {
    Some(Measurements {
        viewport: viewport()?,
        element: element_size(element)?,
        rect: element_rect(element)?,
        scroll: scroll_offset()?,
    })
}

/// Uniform value in `[0, 1)`.
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

pub fn mouse_contact(event: &MouseEvent) -> Position {
    Position::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Only the first touch point is read.
pub fn touch_contact(event: &TouchEvent) -> Option<Position> {
    let touch = event.touches().get(0)?;
    Some(Position::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

pub fn is_primary_button(event: &MouseEvent) -> bool {
    event.button() == 0
}
