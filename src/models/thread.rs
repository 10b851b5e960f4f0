//! Thread data structure.

use serde::{Deserialize, Serialize};

/// A discussion thread parsed from a board listing.
///
/// `body` starts out as raw board wikitext and is rewritten in place into
/// the final announcement text before posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thread {
    /// Board-assigned identifier; newer threads have strictly larger ids
    pub id: u64,

    /// Entity-decoded thread title
    pub title: String,

    /// Thread body (raw wikitext, later rewritten output text)
    pub body: String,
}

impl Thread {
    /// Create a thread with an empty body, as parsed from a listing.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: String::new(),
        }
    }

    /// Permalink for this thread under the given base URL.
    pub fn permalink(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permalink() {
        let thread = Thread::new(1234, "Title");
        assert_eq!(
            thread.permalink("https://community.fandom.com/wiki/Thread:"),
            "https://community.fandom.com/wiki/Thread:1234"
        );
    }
}
