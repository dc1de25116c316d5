// Shadow Tokens
// Elevation of a widget at rest and while it is being dragged

pub const SHADOW_REST: &str = "0 1px 2px oklch(70% 0.09 255 / 0.22)";
pub const SHADOW_DRAGGING: &str = "0 4px 16px oklch(55% 0.16 250 / 0.33)";

pub fn elevation(is_dragging: bool) -> &'static str {
    if is_dragging {
        SHADOW_DRAGGING
    } else {
        SHADOW_REST
    }
}
