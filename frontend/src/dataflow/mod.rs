//! Actor+Relay primitives for the demo board.
//!
//! - **[`Relay`]** - typed event stream from UI callbacks into an actor
//! - **[`Actor`]** - single-value state owned by one processing loop
//!
//! Relays follow the `{source}_{event}_relay` naming pattern and actor state
//! is only read through signals.

pub mod actor;
pub mod relay;

pub use actor::Actor;
pub use relay::{Relay, relay};
