//! Managed `.gitignore` entries and the pure diff behind the append step.

/// Entries membank keeps in the project `.gitignore`.
pub const MANAGED_IGNORE_ENTRIES: &[&str] =
    &[".clinerules-architect", ".clinerules-ask", ".clinerules-code", "memory-bank/"];

/// Result of merging the managed entries into gitignore content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreAppend {
    /// Full updated file content.
    pub content: String,
    /// Entries that were appended.
    pub added: Vec<&'static str>,
}

/// Managed entries not yet present as a whole line in the given content.
pub fn missing_entries(existing: &str) -> Vec<&'static str> {
    let lines: Vec<&str> = existing.lines().map(str::trim_end).collect();

    MANAGED_IGNORE_ENTRIES.iter().filter(|entry| !lines.contains(*entry)).copied().collect()
}

/// Append the missing entries to the existing content, preserving every
/// original line and its order. Returns `None` when nothing needs appending.
pub fn append_missing(existing: &str) -> Option<IgnoreAppend> {
    let added = missing_entries(existing);
    if added.is_empty() {
        return None;
    }

    let mut content = existing.to_string();
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for entry in &added {
        content.push_str(entry);
        content.push('\n');
    }
    Some(IgnoreAppend { content, added })
}
