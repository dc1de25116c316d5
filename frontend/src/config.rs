// Board configuration
// The board layout ships inside the bundle as `board.toml`.

use crate::debug_utils::debug_critical;
use shared::BoardConfig;

const EMBEDDED_BOARD: &str = include_str!("../board.toml");

/// Embedded board, or the default board when it fails to parse or validate.
pub fn load_board() -> BoardConfig {
    match BoardConfig::from_toml(EMBEDDED_BOARD) {
        Ok(config) => {
            zoon::println!(
                "[config] board '{}' with {} widgets",
                config.title,
                config.widgets.len()
            );
            config
        }
        Err(error) => {
            debug_critical(&format!("board.toml rejected, using default board: {error}"));
            BoardConfig::default()
        }
    }
}
