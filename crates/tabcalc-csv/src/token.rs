//! Token classification

use lazy_regex::regex_is_match;

/// Lexical class of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Column name: `[A-Za-z]+`
    Column,
    /// Integer literal: `-?[1-9][0-9]*` or `0`
    Literal,
    /// Formula: `=<letters><row><op><letters><row>`
    Formula,
}

/// Classify a field, or `None` if it matches no class
///
/// # Example
/// ```rust
/// use tabcalc_csv::{classify, TokenKind};
///
/// assert_eq!(classify("Cell"), Some(TokenKind::Column));
/// assert_eq!(classify("-12"), Some(TokenKind::Literal));
/// assert_eq!(classify("=A1*Cell30"), Some(TokenKind::Formula));
/// assert_eq!(classify("=A1"), None);
/// ```
pub fn classify(token: &str) -> Option<TokenKind> {
    let kind = if regex_is_match!(r"^[A-Za-z]+$", token) {
        Some(TokenKind::Column)
    } else if regex_is_match!(r"^(?:-?[1-9][0-9]*|0)$", token) {
        Some(TokenKind::Literal)
    } else if regex_is_match!(r"^=[A-Za-z]+[1-9][0-9]*[-+*/][A-Za-z]+[1-9][0-9]*$", token) {
        Some(TokenKind::Formula)
    } else {
        None
    };
    log::trace!("classified {:?} as {:?}", token, kind);
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        assert_eq!(classify("A"), Some(TokenKind::Column));
        assert_eq!(classify("abcXYZ"), Some(TokenKind::Column));
        assert_eq!(classify("A1"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_literals() {
        assert_eq!(classify("0"), Some(TokenKind::Literal));
        assert_eq!(classify("42"), Some(TokenKind::Literal));
        assert_eq!(classify("-7"), Some(TokenKind::Literal));
        assert_eq!(classify("-0"), None);
        assert_eq!(classify("007"), None);
        assert_eq!(classify("+5"), None);
        assert_eq!(classify("1.5"), None);
    }

    #[test]
    fn test_formulas() {
        for token in ["=A1+B2", "=A1-B2", "=A1*B2", "=A1/B2", "=Cell30+abc7"] {
            assert_eq!(classify(token), Some(TokenKind::Formula), "{token}");
        }
        for token in [
            "=A1", "=A1+2", "=1+B2", "=A0+B1", "=A1^B2", "A1+B2", "=A1+B2+C3", "=A1/0lit",
        ] {
            assert_eq!(classify(token), None, "{token}");
        }
    }
}
