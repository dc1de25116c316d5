use crate::geometry::Position;

/// Positioning strategy of the rendered widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Normal document flow, before any placement or drag.
    #[default]
    Sticky,
    /// Explicit coordinates relative to the page.
    Absolute,
    /// Explicit coordinates relative to the viewport, after the first drag.
    Fixed,
}

impl LayoutMode {
    /// Next mode. Transitions only go Sticky → Absolute → Fixed.
    pub fn select(previous: LayoutMode, has_moved: bool, placement_requested: bool) -> Self {
        if has_moved || previous == LayoutMode::Fixed {
            LayoutMode::Fixed
        } else if placement_requested || previous == LayoutMode::Absolute {
            LayoutMode::Absolute
        } else {
            LayoutMode::Sticky
        }
    }

    pub fn is_pixel_positioned(self) -> bool {
        !matches!(self, LayoutMode::Sticky)
    }

    pub fn css_position(self) -> &'static str {
        match self {
            LayoutMode::Sticky => "sticky",
            LayoutMode::Absolute => "absolute",
            LayoutMode::Fixed => "fixed",
        }
    }

    pub fn style(self, position: Position) -> LayoutStyle {
        LayoutStyle::new(self, position)
    }
}

/// Inline style values for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutStyle {
    pub position: &'static str,
    pub left: Option<String>,
    pub top: Option<String>,
}

impl LayoutStyle {
    pub fn new(mode: LayoutMode, position: Position) -> Self {
        if mode.is_pixel_positioned() {
            Self {
                position: mode.css_position(),
                left: Some(format!("{}px", position.x)),
                top: Some(format!("{}px", position.y)),
            }
        } else {
            Self {
                position: mode.css_position(),
                left: None,
                top: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_until_placement_or_drag() {
        assert_eq!(LayoutMode::select(LayoutMode::Sticky, false, false), LayoutMode::Sticky);
        assert_eq!(LayoutMode::select(LayoutMode::Sticky, false, true), LayoutMode::Absolute);
        assert_eq!(LayoutMode::select(LayoutMode::Sticky, true, false), LayoutMode::Fixed);
        assert_eq!(LayoutMode::select(LayoutMode::Absolute, true, true), LayoutMode::Fixed);
    }

    #[test]
    fn test_never_reverts() {
        assert_eq!(LayoutMode::select(LayoutMode::Absolute, false, false), LayoutMode::Absolute);
        assert_eq!(LayoutMode::select(LayoutMode::Fixed, false, false), LayoutMode::Fixed);
        assert_eq!(LayoutMode::select(LayoutMode::Fixed, false, true), LayoutMode::Fixed);
    }

    #[test]
    fn test_sticky_style_has_no_coordinates() {
        let style = LayoutMode::Sticky.style(Position::new(10.0, 20.0));
        assert_eq!(style.position, "sticky");
        assert_eq!(style.left, None);
        assert_eq!(style.top, None);
    }

    #[test]
    fn test_pixel_style() {
        let style = LayoutMode::Fixed.style(Position::new(-12.5, 40.0));
        assert_eq!(style.position, "fixed");
        assert_eq!(style.left.as_deref(), Some("-12.5px"));
        assert_eq!(style.top.as_deref(), Some("40px"));
    }
}
