//! Textual move encoding
//!
//! ```text
//! STEP (1,2) (2,2)
//! JUMP (1,2) (3,2) (3,4)
//! PRONG (1,2) S
//! ```
//!
//! Keywords and direction letters are case-insensitive when parsing.

use std::fmt;
use std::str::FromStr;

use crate::board::{Direction, Pos, BOARD_SIZE};
use crate::error::ParseMoveError;

use super::moves::{JumpPath, Move};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step { from, to } => write!(f, "STEP {} {}", from, to),
            Move::Jump { from, path } => {
                write!(f, "JUMP {}", from)?;
                for landing in path {
                    write!(f, " {}", landing)?;
                }
                Ok(())
            }
            Move::ProngAdd { at, direction } => write!(f, "PRONG {} {}", at, direction),
        }
    }
}

impl FromStr for Pos {
    type Err = ParseMoveError;

    /// Accepts `(r,c)` or `r,c`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseMoveError::BadPosition(s.to_string());
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s.trim());
        let (row, col) = inner.split_once(',').ok_or_else(bad)?;
        let row: u8 = row.trim().parse().map_err(|_| bad())?;
        let col: u8 = col.trim().parse().map_err(|_| bad())?;
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(bad());
        }
        Ok(Pos::new(row, col))
    }
}

impl FromStr for Direction {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Direction::from_symbol(c).ok_or_else(|| ParseMoveError::BadDirection(s.to_string()))
            }
            _ => Err(ParseMoveError::BadDirection(s.to_string())),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let kind = tokens.next().ok_or(ParseMoveError::Empty)?;

        let mv = match kind.to_ascii_uppercase().as_str() {
            "STEP" => {
                let from = next_pos(&mut tokens, "origin")?;
                let to = next_pos(&mut tokens, "destination")?;
                Move::Step { from, to }
            }
            "JUMP" => {
                let from = next_pos(&mut tokens, "origin")?;
                let path = tokens
                    .by_ref()
                    .map(str::parse::<Pos>)
                    .collect::<Result<JumpPath, _>>()?;
                if path.is_empty() {
                    return Err(ParseMoveError::Missing("landing"));
                }
                Move::Jump { from, path }
            }
            "PRONG" => {
                let at = next_pos(&mut tokens, "position")?;
                let direction = tokens
                    .next()
                    .ok_or(ParseMoveError::Missing("direction"))?
                    .parse()?;
                Move::ProngAdd { at, direction }
            }
            _ => return Err(ParseMoveError::UnknownKind(kind.to_string())),
        };

        let rest: Vec<&str> = tokens.collect();
        if !rest.is_empty() {
            return Err(ParseMoveError::Trailing(rest.join(" ")));
        }
        Ok(mv)
    }
}

fn next_pos<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<Pos, ParseMoveError> {
    tokens.next().ok_or(ParseMoveError::Missing(what))?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_step() {
        let mv = Move::Step {
            from: Pos::new(1, 2),
            to: Pos::new(2, 2),
        };
        assert_eq!(mv.to_string(), "STEP (1,2) (2,2)");
    }

    #[test]
    fn test_display_jump_chain() {
        let mv = Move::jump(Pos::new(1, 2), &[Pos::new(3, 2), Pos::new(3, 4)]);
        assert_eq!(mv.to_string(), "JUMP (1,2) (3,2) (3,4)");
    }

    #[test]
    fn test_display_prong() {
        let mv = Move::ProngAdd {
            at: Pos::new(6, 5),
            direction: Direction::W,
        };
        assert_eq!(mv.to_string(), "PRONG (6,5) W");
    }

    #[test]
    fn test_parse_matches_display() {
        for text in ["STEP (1,2) (2,2)", "JUMP (1,2) (3,2) (3,4)", "PRONG (6,5) W"] {
            let mv: Move = text.parse().expect("valid move");
            assert_eq!(mv.to_string(), text);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        let mv: Move = "prong 1,2 s".parse().expect("valid move");
        assert_eq!(
            mv,
            Move::ProngAdd {
                at: Pos::new(1, 2),
                direction: Direction::S
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert!(matches!("HOP (1,1) (1,2)".parse::<Move>(), Err(ParseMoveError::UnknownKind(_))));
        assert!(matches!("STEP (1,1) (8,2)".parse::<Move>(), Err(ParseMoveError::BadPosition(_))));
        assert_eq!("JUMP (1,1)".parse::<Move>(), Err(ParseMoveError::Missing("landing")));
        assert!(matches!("PRONG (1,1) X".parse::<Move>(), Err(ParseMoveError::BadDirection(_))));
        assert!(matches!("STEP (1,1) (1,2) (1,3)".parse::<Move>(), Err(ParseMoveError::Trailing(_))));
    }
}
