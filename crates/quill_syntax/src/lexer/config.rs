//! Scanner configuration

/// Options controlling what the scanner emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanConfig {
    /// Emit whitespace and end-of-line runs as `Space` / `EndOfLine` tokens instead of discarding them.
    pub keep_trivia: bool,
}

impl ScanConfig {
    /// Create a new config with default settings (trivia discarded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether trivia tokens are emitted
    pub fn with_trivia(mut self, keep: bool) -> Self {
        self.keep_trivia = keep;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_discards_trivia() {
        assert!(!ScanConfig::default().keep_trivia);
    }

    #[test]
    fn test_with_trivia() {
        assert!(ScanConfig::new().with_trivia(true).keep_trivia);
    }
}
