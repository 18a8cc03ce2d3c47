//! History backends the router pushes locations onto.

use crate::error::RouteError;

/// Session history the router navigates through.
///
/// Locations are full URLs as the browser sees them: base included, query and
/// fragment kept.
pub trait History {
    /// Current location.
    fn location(&self) -> String;

    /// Adds a new entry and makes it current.
    fn push(&mut self, url: &str) -> Result<(), RouteError>;

    /// Overwrites the current entry.
    fn replace(&mut self, url: &str) -> Result<(), RouteError>;

    /// Moves `delta` entries through the history.
    ///
    /// Browser backends apply this asynchronously and report the result through
    /// a `popstate` event.
    fn go(&mut self, delta: i32) -> Result<(), RouteError>;
}

/// In-process history stack.
///
/// Used on the server, where there is no browser, and in tests.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    /// Creates a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.position].clone()
    }

    fn push(&mut self, url: &str) -> Result<(), RouteError> {
        self.entries.truncate(self.position + 1);
        self.entries.push(url.to_owned());
        self.position = self.entries.len() - 1;

        Ok(())
    }

    fn replace(&mut self, url: &str) -> Result<(), RouteError> {
        self.entries[self.position] = url.to_owned();

        Ok(())
    }

    fn go(&mut self, delta: i32) -> Result<(), RouteError> {
        let last = self.entries.len() - 1;
        let target = self.position as i64 + i64::from(delta);

        self.position = target.clamp(0, last as i64) as usize;

        Ok(())
    }
}
