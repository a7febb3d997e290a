use log::debug;

/// The token that switches parsing to verbatim mode.
pub const VERBATIM_MARKER: &str = "--";

/// Whether tokens are still being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Verbatim,
}

/// Token iterator that swallows the first `--` and reports every token
/// after it as verbatim.
///
/// The switch happens on whichever pull reads the marker, including a pull
/// made by a parameter fetching its value. There is no way back to
/// [`Mode::Normal`].
#[derive(Debug)]
pub struct VerbatimIter<I> {
    tokens: I,
    mode: Mode,
}

impl<I: Iterator<Item = String>> VerbatimIter<I> {
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            mode: Mode::Normal,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.mode == Mode::Verbatim
    }
}

impl<I: Iterator<Item = String>> Iterator for VerbatimIter<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let token = self.tokens.next()?;
        if self.mode == Mode::Normal && token == VERBATIM_MARKER {
            debug!("Found `{}`, remaining tokens are verbatim", VERBATIM_MARKER);
            self.mode = Mode::Verbatim;
            return self.tokens.next();
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iter(tokens: &[&str]) -> VerbatimIter<std::vec::IntoIter<String>> {
        let owned: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        VerbatimIter::new(owned.into_iter())
    }

    #[test]
    fn test_passes_tokens_through() {
        let mut tokens = iter(&["a", "-b", "--c"]);
        assert_eq!(tokens.next().as_deref(), Some("a"));
        assert_eq!(tokens.next().as_deref(), Some("-b"));
        assert_eq!(tokens.next().as_deref(), Some("--c"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.mode(), Mode::Normal);
    }

    #[test]
    fn test_marker_is_consumed_once() {
        let mut tokens = iter(&["a", "--", "--", "b"]);
        assert_eq!(tokens.next().as_deref(), Some("a"));
        assert!(!tokens.is_verbatim());

        assert_eq!(tokens.next().as_deref(), Some("--"));
        assert!(tokens.is_verbatim());

        assert_eq!(tokens.next().as_deref(), Some("b"));
        assert!(tokens.is_verbatim());
    }

    #[test]
    fn test_marker_at_end_of_input() {
        let mut tokens = iter(&["--"]);
        assert_eq!(tokens.next(), None);
        assert!(tokens.is_verbatim());
    }

    #[test]
    fn test_marker_must_match_exactly() {
        let mut tokens = iter(&["---", "-- "]);
        assert_eq!(tokens.next().as_deref(), Some("---"));
        assert_eq!(tokens.next().as_deref(), Some("-- "));
        assert!(!tokens.is_verbatim());
    }
}
