//! Navigation history.

/// A session history of URL paths with a cursor.
pub trait History: Send {
    /// Path of the current entry.
    fn current_path(&self) -> &str;

    /// Add an entry after the current one, dropping any forward entries.
    fn push(&mut self, path: &str);

    /// Move back one entry. Returns `false` at the start of history.
    fn back(&mut self) -> bool;

    /// Move forward one entry. Returns `false` at the end of history.
    fn forward(&mut self) -> bool;
}

/// In-memory history: entries plus a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
