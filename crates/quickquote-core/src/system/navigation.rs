/// Navigation platform trait — the current location and page changes.
pub trait Navigator {
    /// Absolute URL of the page the builder runs on.
    fn location(&self) -> &str;

    /// Leave the current page for `url`.
    fn navigate(&mut self, url: &str);
}

/// Records navigations instead of performing them.
#[derive(Debug, Clone)]
pub struct RecordingNavigator {
    location: String,
    pub visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            visited: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn location(&self) -> &str {
        &self.location
    }

    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}
