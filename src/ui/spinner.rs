use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

// The last string is the finished frame.
const TICKS: &[&str] = &["◐", "◓", "◑", "◒", "●"];

/// A spinner drawn on stderr while the translation request is in flight.
///
/// Hidden when stderr is not a terminal. Cleared when dropped, so holding
/// it across an `.await` is enough to scope it to the request.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(TICKS)
                .template("{spinner} {msg} {elapsed}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(120));

        Self { progress_bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
