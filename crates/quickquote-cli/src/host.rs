//! Terminal stand-ins for the browser's dialog and navigation.

use std::io::{self, BufRead, Write};

use quickquote_core::system::{Dialog, Navigator};

/// Asks on stderr, reads the answer from stdin. Anything but `y`/`yes`
/// (case-insensitive) declines, including EOF.
pub struct StdinDialog {
    assume_yes: bool,
}

impl StdinDialog {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialog for StdinDialog {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => is_yes(&line),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Prints the target instead of opening it.
pub struct PrintNavigator {
    location: String,
}

impl PrintNavigator {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl Navigator for PrintNavigator {
    fn location(&self) -> &str {
        &self.location
    }

    fn navigate(&mut self, url: &str) {
        println!("{url}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn assume_yes_skips_prompt() {
        assert!(StdinDialog::new(true).confirm("clear?"));
    }
}
