//! Token classification predicates
//!
//! These answer the questions the parser asks about token text: is it a keyword, a
//! condition, an identifier, or one of the reserved primitive instructions. All
//! comparisons are exact and case-sensitive.

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar keywords of BL
pub const KEYWORDS: [&str; 10] = [
    "PROGRAM",
    "IS",
    "BEGIN",
    "END",
    "INSTRUCTION",
    "IF",
    "THEN",
    "ELSE",
    "WHILE",
    "DO",
];

/// Token text of every condition usable after IF / WHILE
pub const CONDITIONS: [&str; 10] = [
    "next-is-empty",
    "next-is-not-empty",
    "next-is-wall",
    "next-is-not-wall",
    "next-is-friend",
    "next-is-not-friend",
    "next-is-enemy",
    "next-is-not-enemy",
    "random",
    "true",
];

/// Built-in instructions; user instructions may not take these names
pub const PRIMITIVE_INSTRUCTIONS: [&str; 5] = ["move", "turnleft", "turnright", "infect", "skip"];

static IDENTIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9\-]*$").expect("identifier pattern is valid"));

pub fn is_keyword(token: &str) -> bool {
    KEYWORDS.contains(&token)
}

pub fn is_condition(token: &str) -> bool {
    CONDITIONS.contains(&token)
}

/// A word that is neither a keyword nor a condition
pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(token) && !is_keyword(token) && !is_condition(token)
}

pub fn is_primitive_instruction(token: &str) -> bool {
    PRIMITIVE_INSTRUCTIONS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bl::lexing::END_OF_INPUT;

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(is_keyword("WHILE"));
        assert!(!is_keyword("while"));
        assert!(!is_keyword("move"));
    }

    #[test]
    fn test_conditions() {
        for condition in CONDITIONS {
            assert!(is_condition(condition), "{} should be a condition", condition);
        }
        assert!(!is_condition("NEXT-IS-EMPTY"));
        assert!(!is_condition("next_is_empty"));
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("move"));
        assert!(is_identifier("FindObstacle"));
        assert!(is_identifier("turn-around-2"));
        assert!(is_identifier("while"));

        assert!(!is_identifier("WHILE"));
        assert!(!is_identifier("random"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("-dash"));
        assert!(!is_identifier(";"));
        assert!(!is_identifier(""));
        assert!(!is_identifier(END_OF_INPUT));
    }

    #[test]
    fn test_primitives_are_identifiers() {
        for primitive in PRIMITIVE_INSTRUCTIONS {
            assert!(is_primitive_instruction(primitive));
            assert!(is_identifier(primitive));
        }
        assert!(!is_primitive_instruction("jump"));
    }
}
