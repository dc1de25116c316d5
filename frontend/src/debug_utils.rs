// Throttled logging for high-frequency handlers
//
// Region changes fire on every pointer move across a boundary; logging each
// one floods the browser console during a fast drag.

use std::sync::atomic::{AtomicUsize, Ordering};

static LOG_COUNT: AtomicUsize = AtomicUsize::new(0);
const LOGS_PER_WINDOW: usize = 5;
const WINDOW: usize = 100;

/// Log at most 5 out of every 100 calls.
pub fn debug_throttled(message: &str) {
    if LOG_COUNT.load(Ordering::Relaxed) >= WINDOW {
        LOG_COUNT.store(0, Ordering::Relaxed);
    }

    let count = LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < LOGS_PER_WINDOW {
        zoon::println!("[THROTTLED] {}", message);
    } else if count == LOGS_PER_WINDOW {
        zoon::println!("[THROTTLED] Log rate limit reached, suppressing further messages...");
    }
}

/// Always printed; for configuration failures and other one-off problems.
pub fn debug_critical(message: &str) {
    zoon::eprintln!("[CRITICAL] {}", message);
}
