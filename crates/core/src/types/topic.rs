use std::fmt;

/// Extension given to every cheat-sheet document.
pub const DOCUMENT_EXTENSION: &str = "md";

/// A topic the user looks up, e.g. `git` or `git commit`.
///
/// Tokens are kept in the order they were given. They are handed to tldr
/// verbatim and joined with `-` to name the local document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    tokens: Vec<String>,
}

impl Topic {
    /// Returns `None` when no tokens are given.
    pub fn new<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Document name for this topic: `git-commit.md` for `git commit`.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.tokens.join("-"), DOCUMENT_EXTENSION)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
