//! Draggable board entry point

use std::sync::OnceLock;
use zoon::*;

/// Keeps the startup task alive for the lifetime of the page.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod app;
mod board;
mod config;
mod dataflow;
mod debug_utils;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = crate::app::DraggableBoardApp::new();
        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
