use std::path::{Path, PathBuf};

/// Seed list shown on first run; never written back until the user
/// makes a change of their own.
pub const DEFAULT_SNIPPETS: [&str; 3] = [
    "Example snippet 1",
    "Example snippet 2",
    "Example snippet 3",
];

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Encode(error) => write!(f, "encode error: {error}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Ordered list of unique, non-empty snippet strings. Every mutation
/// persists synchronously before returning.
pub struct SnippetStore {
    path: PathBuf,
    snippets: Vec<String>,
}

impl SnippetStore {
    /// Missing file yields the built-in defaults without writing them
    /// back; malformed content yields defaults with a logged warning.
    pub fn load(path: &Path) -> Self {
        let snippets = match std::fs::read_to_string(path) {
            Ok(raw) => match json5::from_str::<Vec<String>>(&raw) {
                Ok(parsed) => sanitize(parsed),
                Err(error) => {
                    crate::logging::warn(&format!(
                        "snippet file {} is malformed ({error}); using defaults",
                        path.display()
                    ));
                    default_snippets()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => default_snippets(),
            Err(error) => {
                crate::logging::warn(&format!(
                    "snippet file {} is unreadable ({error}); using defaults",
                    path.display()
                ));
                default_snippets()
            }
        };

        Self {
            path: path.to_path_buf(),
            snippets,
        }
    }

    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Appends the trimmed text. No-op (Ok(false)) when the text is
    /// empty or already present.
    pub fn add(&mut self, text: &str) -> Result<bool, StoreError> {
        let text = text.trim();
        if text.is_empty() || self.snippets.iter().any(|s| s == text) {
            return Ok(false);
        }

        self.snippets.push(text.to_string());
        self.persist()?;
        Ok(true)
    }

    /// Replaces the snippet at `index` in place. No-op when the text is
    /// empty, the index is out of range, or the text already exists at a
    /// different position.
    pub fn edit(&mut self, index: usize, text: &str) -> Result<bool, StoreError> {
        let text = text.trim();
        if text.is_empty() || index >= self.snippets.len() {
            return Ok(false);
        }
        if self.snippets[index] == text {
            return Ok(false);
        }
        if self.snippets.iter().any(|s| s == text) {
            return Ok(false);
        }

        self.snippets[index] = text.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Removes the first snippet equal to `text`.
    pub fn delete(&mut self, text: &str) -> Result<bool, StoreError> {
        let Some(position) = self.snippets.iter().position(|s| s == text) else {
            return Ok(false);
        };

        self.snippets.remove(position);
        self.persist()?;
        Ok(true)
    }

    pub fn position_of(&self, text: &str) -> Option<usize> {
        self.snippets.iter().position(|s| s == text)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(&self.snippets)
            .map_err(|error| StoreError::Encode(error.to_string()))?;
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }
}

fn default_snippets() -> Vec<String> {
    DEFAULT_SNIPPETS.iter().map(|s| s.to_string()).collect()
}

/// Re-establishes the store invariants on data read from disk: entries
/// are trimmed, non-empty, and unique (first occurrence wins).
fn sanitize(raw: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.iter().any(|s| s == trimmed) {
            continue;
        }
        seen.push(trimmed.to_string());
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn sanitize_drops_empties_and_duplicates_in_order() {
        let raw = vec![
            "  a  ".to_string(),
            String::new(),
            "b".to_string(),
            "a".to_string(),
        ];
        assert_eq!(sanitize(raw), vec!["a".to_string(), "b".to_string()]);
    }
}
