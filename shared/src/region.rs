use crate::geometry::{Position, Viewport};

/// Coarse screen zone occupied by a widget, used only to pick a class name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl Region {
    /// Horizontal zones are checked first, so corners classify as left/right.
    pub fn classify(position: Position, viewport: Viewport) -> Self {
        let center = viewport.center();
        if position.x < center.x / 2.0 {
            Region::Left
        } else if position.x > center.x * 1.5 {
            Region::Right
        } else if position.y < center.y / 2.0 {
            Region::Top
        } else if position.y > center.y * 1.5 {
            Region::Bottom
        } else {
            Region::Center
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Region::Left => "left-side",
            Region::Right => "right-side",
            Region::Top => "top-side",
            Region::Bottom => "bottom-side",
            Region::Center => "center",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(x: f64, y: f64) -> &'static str {
        Region::classify(Position::new(x, y), Viewport::new(1000.0, 800.0)).class_name()
    }

    #[test]
    fn test_reference_positions() {
        assert_eq!(classify(100.0, 100.0), "left-side");
        assert_eq!(classify(900.0, 100.0), "right-side");
        assert_eq!(classify(500.0, 50.0), "top-side");
        assert_eq!(classify(500.0, 400.0), "center");
        assert_eq!(classify(500.0, 700.0), "bottom-side");
    }

    #[test]
    fn test_corners_classify_horizontally() {
        assert_eq!(classify(10.0, 10.0), "left-side");
        assert_eq!(classify(10.0, 790.0), "left-side");
        assert_eq!(classify(990.0, 790.0), "right-side");
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Left below 250, right above 750, top below 200, bottom above 600
        assert_eq!(classify(250.0, 400.0), "center");
        assert_eq!(classify(750.0, 400.0), "center");
        assert_eq!(classify(500.0, 200.0), "center");
        assert_eq!(classify(500.0, 600.0), "center");
        assert_eq!(classify(249.9, 400.0), "left-side");
        assert_eq!(classify(500.0, 600.1), "bottom-side");
    }

    #[test]
    fn test_off_screen_positions() {
        assert_eq!(classify(-40.0, 400.0), "left-side");
        assert_eq!(classify(500.0, -10.0), "top-side");
    }
}
