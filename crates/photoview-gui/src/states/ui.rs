use std::time::Instant;

const MAX_LOG_LINES: usize = 200;

/// Overall UI state.
#[derive(Default)]
pub struct UiState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// When the recompute owed after a resize should run.
    pub redraw_deadline: Option<Instant>,

    /// Zoom slider value; follows the viewer unless the user is dragging it.
    pub zoom_slider: f64,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    /// True once the resize debounce has elapsed, or if no deadline was set.
    pub fn redraw_due(&self, now: Instant) -> bool {
        self.redraw_deadline.map_or(true, |deadline| now >= deadline)
    }
}
