//! Keyword and directive tables.
//!
//! Both lookups use the word's length as a first-pass filter, then match
//! the words of that length. Keywords are resolved wherever the identifier
//! scanner runs (actions and directive bodies). Directive names are only
//! consulted by the text scanner right after the directive marker.

use crate::TokenKind;

/// Look up a reserved keyword.
///
/// The `.` cursor keyword is not here: the action scanner produces it
/// directly, since `.` never reaches the identifier scanner.
#[inline]
pub(crate) fn lookup(word: &str) -> Option<TokenKind> {
    match word.len() {
        2 => match word {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match word {
            "end" => Some(TokenKind::End),
            "nil" => Some(TokenKind::Nil),
            _ => None,
        },
        4 => match word {
            "else" => Some(TokenKind::Else),
            "with" => Some(TokenKind::With),
            _ => None,
        },
        5 => match word {
            "block" => Some(TokenKind::Block),
            "range" => Some(TokenKind::Range),
            _ => None,
        },
        6 => match word {
            "define" => Some(TokenKind::Define),
            _ => None,
        },
        8 => match word {
            "template" => Some(TokenKind::Template),
            _ => None,
        },
        _ => None,
    }
}

/// Look up a directive name (the word after the marker, without it).
#[inline]
pub(crate) fn directive(word: &str) -> Option<TokenKind> {
    match word.len() {
        6 => match word {
            "import" => Some(TokenKind::Import),
            "params" => Some(TokenKind::Params),
            _ => None,
        },
        7 => match word {
            "extends" => Some(TokenKind::Extends),
            "include" => Some(TokenKind::Include),
            _ => None,
        },
        _ => None,
    }
}

/// Identifier characters: `_`, letters, and digits (Unicode-aware).
#[inline]
pub(crate) fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[cfg(test)]
mod tests;
