/// Append-only log of every line shown to or typed by the user during a
/// session.
///
/// Entries are normalized to exactly one trailing newline, so the dump of a
/// transcript is the session replayed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry, trimming any trailing newline characters and
    /// re-adding a single `\n`.
    pub fn record(&mut self, line: &str) {
        let mut entry = line.trim_end_matches(['\r', '\n']).to_owned();
        entry.push('\n');
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The concatenation of all entries, ready to be written to a file.
    #[must_use]
    pub fn contents(&self) -> String {
        self.entries.concat()
    }
}
