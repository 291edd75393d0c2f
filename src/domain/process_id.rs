use std::fmt;

const PROCESS_ID_LENGTH: usize = 5;

/// Short identifier derived from the tail of `chat_id + user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessId(String);

impl ProcessId {
    pub fn derive(chat_id: &str, user_id: &str) -> Self {
        let combined: Vec<char> = chat_id.chars().chain(user_id.chars()).collect();
        let start = combined.len().saturating_sub(PROCESS_ID_LENGTH);
        Self(combined[start..].iter().collect())
    }

    /// Wraps an identifier read back from storage.
    pub fn from_string(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
