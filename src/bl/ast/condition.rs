//! Sensor conditions tested by IF and WHILE statements

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The conditions a BL robot can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,
    Random,
    True,
}

impl Condition {
    pub const ALL: [Condition; 10] = [
        Condition::NextIsEmpty,
        Condition::NextIsNotEmpty,
        Condition::NextIsWall,
        Condition::NextIsNotWall,
        Condition::NextIsFriend,
        Condition::NextIsNotFriend,
        Condition::NextIsEnemy,
        Condition::NextIsNotEnemy,
        Condition::Random,
        Condition::True,
    ];

    /// The source text of this condition, e.g. `next-is-empty`
    pub fn as_token(&self) -> &'static str {
        match self {
            Condition::NextIsEmpty => "next-is-empty",
            Condition::NextIsNotEmpty => "next-is-not-empty",
            Condition::NextIsWall => "next-is-wall",
            Condition::NextIsNotWall => "next-is-not-wall",
            Condition::NextIsFriend => "next-is-friend",
            Condition::NextIsNotFriend => "next-is-not-friend",
            Condition::NextIsEnemy => "next-is-enemy",
            Condition::NextIsNotEnemy => "next-is-not-enemy",
            Condition::Random => "random",
            Condition::True => "true",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// Returned when text does not name a condition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown condition: {0}")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    /// Hyphens become underscores and the text is upper-cased before matching, so
    /// `next-is-wall` and `NEXT_IS_WALL` both translate to `NextIsWall`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").to_uppercase().as_str() {
            "NEXT_IS_EMPTY" => Ok(Condition::NextIsEmpty),
            "NEXT_IS_NOT_EMPTY" => Ok(Condition::NextIsNotEmpty),
            "NEXT_IS_WALL" => Ok(Condition::NextIsWall),
            "NEXT_IS_NOT_WALL" => Ok(Condition::NextIsNotWall),
            "NEXT_IS_FRIEND" => Ok(Condition::NextIsFriend),
            "NEXT_IS_NOT_FRIEND" => Ok(Condition::NextIsNotFriend),
            "NEXT_IS_ENEMY" => Ok(Condition::NextIsEnemy),
            "NEXT_IS_NOT_ENEMY" => Ok(Condition::NextIsNotEnemy),
            "RANDOM" => Ok(Condition::Random),
            "TRUE" => Ok(Condition::True),
            _ => Err(UnknownCondition(s.to_string())),
        }
    }
}
