use spinoff::{Color, Spinner, spinners};
use std::io::IsTerminal;

/// Holds a spinner only when someone is watching.
pub struct SpinnerContainer {
    instance: Option<Spinner>,
}

impl SpinnerContainer {
    /// No spinner at all, everything goes straight to stdout.
    pub fn idle() -> Self {
        SpinnerContainer { instance: None }
    }

    /// Starts a spinner unless the user opted out or stdout is not a terminal,
    /// so pipes and `--output-json | jq` stay clean.
    pub fn unless_no_terminal_or(no_animate: bool) -> Self {
        if no_animate || !std::io::stdout().is_terminal() {
            return Self::idle();
        }

        SpinnerContainer {
            instance: Some(Spinner::new(spinners::Dots, "Retrieving", Color::Blue)),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.instance.is_some()
    }

    /// Replaces the spinner with the final output, or just prints it.
    pub fn stop_with_message(&mut self, message: &str) {
        // Note that it has to take ownership to prevent double stopping.
        match self.instance.take() {
            Some(mut s) => s.stop_with_message(message),
            None => println!("{}", message),
        }
    }
}

impl Drop for SpinnerContainer {
    fn drop(&mut self) {
        // Error paths print nothing, so the spinner line is blanked out.
        if let Some(s) = self.instance.as_mut() {
            s.stop_with_message("");
        }
    }
}
