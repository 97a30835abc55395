use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Spinner shown while one pipeline stage blocks on the network.
///
/// The whole pipeline is sequential, so a single spinner at a time is enough.
pub struct StageSpinner {
    bar: ProgressBar,
    message: String,
}

impl StageSpinner {
    pub fn start(message: &str, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
            bar.set_style(Self::spinner_style());
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        };
        bar.set_message(message.to_string());
        Self {
            bar,
            message: message.to_string(),
        }
    }

    /// Clears the spinner and prints a completion mark.
    pub fn done(self) {
        self.bar.finish_and_clear();
        if !self.bar.is_hidden() {
            eprintln!("✓ {}", self.message);
        }
    }

    /// Clears the spinner without a completion mark.
    pub fn clear(self) {
        self.bar.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Invalid template")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_spinner_is_hidden() {
        let spinner = StageSpinner::start("Fetching", true);
        assert!(spinner.bar.is_hidden());
        spinner.clear();
    }

    #[test]
    fn done_consumes_and_clears() {
        let spinner = StageSpinner::start("Fetching", true);
        spinner.done();
    }
}
