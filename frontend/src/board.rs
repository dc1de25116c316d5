// Board status domain
// Counts finished drags and remembers which screen region each widget sits in.

use crate::dataflow::{Actor, Relay, relay};
use crate::debug_utils::{debug_critical, debug_throttled};
use futures::{StreamExt, select};
use shared::{Position, Region};
use std::collections::BTreeMap;
use zoon::*;

#[derive(Clone, Debug, PartialEq)]
pub enum BoardEvent {
    WidgetDropped { label: String, position: Position },
    RegionEntered { label: String, region: Region },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardStats {
    pub drags_completed: usize,
    pub last_drop: Option<(String, Position)>,
    pub regions: BTreeMap<String, Region>,
}

impl BoardStats {
    /// Returns false when the event changes nothing visible.
    pub fn apply(&mut self, event: BoardEvent) -> bool {
        match event {
            BoardEvent::WidgetDropped { label, position } => {
                self.drags_completed += 1;
                self.last_drop = Some((label, position));
                true
            }
            BoardEvent::RegionEntered { label, region } => {
                self.regions.insert(label, region) != Some(region)
            }
        }
    }

    pub fn occupancy(&self, region: Region) -> usize {
        self.regions.values().filter(|r| **r == region).count()
    }

    pub fn summary(&self) -> String {
        match &self.last_drop {
            None => "No drags yet".to_string(),
            Some((label, position)) => format!(
                "{} {} completed, last: {} at ({:.0}, {:.0})",
                self.drags_completed,
                if self.drags_completed == 1 { "drag" } else { "drags" },
                label,
                position.x,
                position.y,
            ),
        }
    }

    pub fn region_summary(&self) -> String {
        [
            Region::Left,
            Region::Right,
            Region::Top,
            Region::Bottom,
            Region::Center,
        ]
        .into_iter()
        .map(|region| format!("{}: {}", region.class_name(), self.occupancy(region)))
        .collect::<Vec<_>>()
        .join(" | ")
    }
}

#[derive(Clone)]
pub struct BoardStatus {
    stats: Actor<BoardStats>,
    pub widget_dropped_relay: Relay<(String, Position)>,
    pub region_entered_relay: Relay<(String, Region)>,
}

impl BoardStatus {
    pub fn new() -> Self {
        let (widget_dropped_relay, mut widget_dropped_stream) = relay::<(String, Position)>();
        let (region_entered_relay, mut region_entered_stream) = relay::<(String, Region)>();

        let stats = Actor::new(BoardStats::default(), async move |state| {
            loop {
                let event = select! {
                    dropped = widget_dropped_stream.next() => match dropped {
                        Some((label, position)) => BoardEvent::WidgetDropped { label, position },
                        None => break,
                    },
                    entered = region_entered_stream.next() => match entered {
                        Some((label, region)) => BoardEvent::RegionEntered { label, region },
                        None => break,
                    },
                };
                if let BoardEvent::RegionEntered { label, region } = &event {
                    debug_throttled(&format!("{label} entered {}", region.class_name()));
                }
                state.lock_mut().apply(event);
            }
        });

        Self {
            stats,
            widget_dropped_relay,
            region_entered_relay,
        }
    }

    pub fn report_drop(&self, label: &str, position: Position) {
        if let Err(error) = self
            .widget_dropped_relay
            .try_send((label.to_owned(), position))
        {
            debug_critical(&format!("drop of '{label}' not recorded: {error}"));
        }
    }

    pub fn report_region(&self, label: &str, region: Region) {
        self.region_entered_relay.send((label.to_owned(), region));
    }

    pub fn summary_signal(&self) -> impl Signal<Item = String> + use<> {
        self.stats.signal_ref(BoardStats::summary)
    }

    pub fn region_summary_signal(&self) -> impl Signal<Item = String> + use<> {
        self.stats.signal_ref(BoardStats::region_summary)
    }
}

impl Default for BoardStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropped(label: &str, x: f64, y: f64) -> BoardEvent {
        BoardEvent::WidgetDropped {
            label: label.to_string(),
            position: Position::new(x, y),
        }
    }

    fn entered(label: &str, region: Region) -> BoardEvent {
        BoardEvent::RegionEntered {
            label: label.to_string(),
            region,
        }
    }

    #[test]
    fn test_summary_before_any_drag() {
        assert_eq!(BoardStats::default().summary(), "No drags yet");
    }

    #[test]
    fn test_drops_are_counted_and_last_one_wins() {
        let mut stats = BoardStats::default();
        stats.apply(dropped("Pinned note", 10.0, 20.0));
        assert_eq!(stats.summary(), "1 drag completed, last: Pinned note at (10, 20)");

        stats.apply(dropped("Wanderer", 300.4, 99.6));
        assert_eq!(stats.drags_completed, 2);
        assert_eq!(stats.summary(), "2 drags completed, last: Wanderer at (300, 100)");
    }

    #[test]
    fn test_region_changes_replace_previous_region() {
        let mut stats = BoardStats::default();
        assert!(stats.apply(entered("a", Region::Left)));
        assert!(stats.apply(entered("b", Region::Left)));
        assert_eq!(stats.occupancy(Region::Left), 2);

        assert!(stats.apply(entered("a", Region::Center)));
        assert_eq!(stats.occupancy(Region::Left), 1);
        assert_eq!(stats.occupancy(Region::Center), 1);
    }

    #[test]
    fn test_repeated_region_is_not_a_change() {
        let mut stats = BoardStats::default();
        stats.apply(entered("a", Region::Top));
        assert!(!stats.apply(entered("a", Region::Top)));
    }

    #[test]
    fn test_region_summary_lists_every_region() {
        let mut stats = BoardStats::default();
        stats.apply(entered("a", Region::Bottom));
        assert_eq!(
            stats.region_summary(),
            "left-side: 0 | right-side: 0 | top-side: 0 | bottom-side: 1 | center: 0"
        );
    }

    #[tokio::test]
    async fn test_relays_feed_events_in_send_order() {
        let (widget_dropped_relay, mut stream) = relay::<(String, Position)>();
        let report = |label: &str, x: f64| {
            widget_dropped_relay.send((label.to_string(), Position::new(x, 0.0)));
        };
        report("a", 1.0);
        report("b", 2.0);

        let mut stats = BoardStats::default();
        for _ in 0..2 {
            if let Some((label, position)) = stream.next().await {
                stats.apply(BoardEvent::WidgetDropped { label, position });
            }
        }
        assert_eq!(stats.drags_completed, 2);
        assert_eq!(stats.last_drop, Some(("b".to_string(), Position::new(2.0, 0.0))));
    }
}
