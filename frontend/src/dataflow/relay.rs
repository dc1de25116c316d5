//! Event streaming Relay over unbounded channels.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Typed event stream from UI callbacks to an [`Actor`](super::Actor).
///
/// Relays are named after the event source:
/// - `widget_dropped_relay` - a draggable was released
/// - `region_entered_relay` - a draggable moved into another screen region
///
/// ```rust,ignore
/// let (widget_dropped_relay, mut widget_dropped_stream) = relay::<String>();
/// widget_dropped_relay.send("Pinned note".to_string());
/// while let Some(label) = widget_dropped_stream.next().await {
///     zoon::println!("dropped {label}");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelayError {
    /// The receiving actor is gone.
    ChannelClosed,
    /// Sent from a second source location (debug builds only).
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::ChannelClosed => write!(f, "relay receiver was dropped"),
            #[cfg(debug_assertions)]
            RelayError::MultipleEmitters { previous, current } => write!(
                f,
                "relay sent from {current} but already bound to {previous}"
            ),
        }
    }
}

impl std::error::Error for RelayError {}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Send an event, discarding it when the receiver is gone.
    ///
    /// Debug builds panic when the relay is sent from more than one place.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(error) = self.check_single_source() {
            panic!("{error}");
        }
        let _ = self.sender.unbounded_send(value);
    }

    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;

        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Disconnected relay; every event is discarded.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_relay_delivers_in_order() {
        let (widget_dropped_relay, mut stream) = relay::<String>();

        for label in ["first", "second"] {
            widget_dropped_relay.send(label.to_string());
        }

        assert_eq!(stream.next().await, Some("first".to_string()));
        assert_eq!(stream.next().await, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_relay_try_send_after_receiver_dropped() {
        let (relay, mut receiver) = Relay::new();
        let try_send = |value: u32| relay.try_send(value);

        assert!(try_send(1).is_ok());
        assert_eq!(receiver.next().await, Some(1));

        drop(receiver);

        assert_eq!(try_send(2), Err(RelayError::ChannelClosed));
    }

    #[tokio::test]
    async fn test_default_relay_is_disconnected() {
        let relay = Relay::<u32>::default();
        assert_eq!(relay.try_send(8), Err(RelayError::ChannelClosed));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_second_emitter_is_rejected() {
        let (relay, _receiver) = relay::<u32>();
        let send_here = |value| relay.try_send(value);

        assert!(send_here(1).is_ok());
        assert!(send_here(2).is_ok());
        assert!(matches!(
            relay.try_send(3),
            Err(RelayError::MultipleEmitters { .. })
        ));
    }
}
