// Theme Management
// Process-wide light/dark switch, read reactively by the color tokens

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Dark));

pub fn init_theme(initial_theme: Theme) {
    THEME.set_neq(initial_theme);
}

/// Get the current theme as a signal for reactive updates
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

pub fn current_theme() -> Theme {
    THEME.get()
}

pub fn set_theme(new_theme: Theme) {
    THEME.set_neq(new_theme);
}

pub fn toggle_theme() {
    let new_theme = match current_theme() {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    set_theme(new_theme);
}
