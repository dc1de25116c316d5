use crate::drag::DragProfile;
use crate::geometry::{Position, Rect, ScrollOffset, Size, Viewport};

/// Placement inputs supplied by the widget's owner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacementRequest {
    pub initial_position: Option<Position>,
    pub random_position: bool,
}

impl PlacementRequest {
    pub fn fixed(position: Position) -> Self {
        Self {
            initial_position: Some(position),
            random_position: false,
        }
    }

    pub fn random() -> Self {
        Self {
            initial_position: None,
            random_position: true,
        }
    }

    /// Whether the owner asked for pixel coordinates (fixed or random).
    pub fn is_explicit(&self) -> bool {
        self.random_position || self.initial_position.is_some()
    }
}

/// Everything the resolver reads from the host for one attached element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub viewport: Viewport,
    /// Layout size of the element (offset width/height).
    pub element: Size,
    pub rect: Rect,
    pub scroll: ScrollOffset,
}

/// Resolve the initial position.
///
/// `measurements` is `None` while the element is not attached; placements that
/// need it are skipped and the caller retries on the next resolution pass.
/// `random_unit` must yield values in `[0, 1)`.
pub fn resolve(
    request: &PlacementRequest,
    profile: DragProfile,
    measurements: Option<&Measurements>,
    mut random_unit: impl FnMut() -> f64,
) -> Option<Position> {
    if request.random_position {
        if let Some(measurements) = measurements {
            return Some(random_within(
                measurements.viewport,
                measurements.element,
                &mut random_unit,
            ));
        }
    }
    if let Some(position) = request.initial_position {
        return Some(position);
    }
    if request.random_position || !profile.default_placement {
        return None;
    }
    measurements.map(|measurements| {
        Position::new(
            measurements.rect.left + measurements.scroll.x,
            measurements.rect.top + measurements.scroll.y,
        )
    })
}

/// Random top-left corner keeping the whole element on screen.
pub fn random_within(
    viewport: Viewport,
    element: Size,
    random_unit: &mut impl FnMut() -> f64,
) -> Position {
    let x = random_coordinate(viewport.width - element.width, random_unit());
    let y = random_coordinate(viewport.height - element.height, random_unit());
    Position::new(x, y)
}

// Oversized elements pin to 0 instead of going negative
fn random_coordinate(span: f64, unit: f64) -> f64 {
    let span = span.max(0.0);
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    (unit * span).floor().min(span.floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(left: f64, top: f64) -> Measurements {
        Measurements {
            viewport: Viewport::new(1000.0, 800.0),
            element: Size::new(120.0, 40.0),
            rect: Rect::new(left, top, 120.0, 40.0),
            scroll: ScrollOffset::new(0.0, 250.0),
        }
    }

    fn never_called() -> f64 {
        panic!("random source must not be used")
    }

    #[test]
    fn test_random_stays_within_bounds() {
        let measurements = measured(0.0, 0.0);
        let samples = [0.0, 0.000_1, 0.25, 0.5, 0.999_999, 1.0];
        for a in samples {
            for b in samples {
                let mut values = [a, b].into_iter();
                let position = resolve(
                    &PlacementRequest::random(),
                    DragProfile::FULL,
                    Some(&measurements),
                    || values.next().unwrap_or(0.0),
                )
                .unwrap();
                assert!(position.x >= 0.0 && position.x <= 1000.0 - 120.0);
                assert!(position.y >= 0.0 && position.y <= 800.0 - 40.0);
            }
        }
    }

    #[test]
    fn test_random_floors_coordinates() {
        let mut values = [0.5, 0.25].into_iter();
        let position = resolve(
            &PlacementRequest::random(),
            DragProfile::FULL,
            Some(&measured(0.0, 0.0)),
            || values.next().unwrap_or(0.0),
        );
        assert_eq!(position, Some(Position::new(440.0, 190.0)));
    }

    #[test]
    fn test_random_with_oversized_element_pins_to_origin() {
        let mut measurements = measured(0.0, 0.0);
        measurements.element = Size::new(1500.0, 900.0);
        let position = resolve(
            &PlacementRequest::random(),
            DragProfile::FULL,
            Some(&measurements),
            || 0.75,
        );
        assert_eq!(position, Some(Position::ORIGIN));
    }

    #[test]
    fn test_random_takes_precedence_over_fixed() {
        let request = PlacementRequest {
            initial_position: Some(Position::new(-20.0, -20.0)),
            random_position: true,
        };
        let position =
            resolve(&request, DragProfile::FULL, Some(&measured(0.0, 0.0)), || 0.0).unwrap();
        assert_eq!(position, Position::ORIGIN);
    }

    #[test]
    fn test_unmeasured_random_falls_back_to_fixed() {
        let request = PlacementRequest {
            initial_position: Some(Position::new(7.0, 8.0)),
            random_position: true,
        };
        assert_eq!(
            resolve(&request, DragProfile::FULL, None, never_called),
            Some(Position::new(7.0, 8.0))
        );
        assert_eq!(
            resolve(&PlacementRequest::random(), DragProfile::FULL, None, never_called),
            None
        );
    }

    #[test]
    fn test_fixed_accepts_negative_coordinates_verbatim() {
        let request = PlacementRequest::fixed(Position::new(-300.0, -1.5));
        assert_eq!(
            resolve(&request, DragProfile::FULL, None, never_called),
            Some(Position::new(-300.0, -1.5))
        );
    }

    #[test]
    fn test_default_uses_rect_plus_scroll() {
        let position = resolve(
            &PlacementRequest::default(),
            DragProfile::FULL,
            Some(&measured(40.0, 60.0)),
            never_called,
        );
        assert_eq!(position, Some(Position::new(40.0, 310.0)));
    }

    #[test]
    fn test_default_defers_until_measurable() {
        assert_eq!(
            resolve(&PlacementRequest::default(), DragProfile::FULL, None, never_called),
            None
        );
    }

    #[test]
    fn test_mouse_only_profile_has_no_default_placement() {
        assert_eq!(
            resolve(
                &PlacementRequest::default(),
                DragProfile::MOUSE_ONLY,
                Some(&measured(40.0, 60.0)),
                never_called,
            ),
            None
        );
    }
}
