use regex::Regex;

use crate::sjadam::prelude::*;

/// A segment of a gamestring that represents the board occupancy: 64
/// characters in square-index order (a1 first, h8 last), `P` for a piece of
/// the side to move, `p` for an opposing piece, `.` for an empty square.
#[derive(Clone, Debug)]
pub struct SetupString {
    pub repr: String,
    pub own: BitBoard,
    pub enemy: BitBoard,
}

impl std::str::FromStr for SetupString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new("^[Pp.]{64}$")?;
        if !pattern.is_match(s) {
            return Err(anyhow!("expected 64 characters of [Pp.]; received {s}"));
        }

        let mut own = BitBoard::EMPTY;
        let mut enemy = BitBoard::EMPTY;
        for (index, ch) in s.chars().enumerate() {
            match ch {
                'P' => own.insert(Square::from_index(index)),
                'p' => enemy.insert(Square::from_index(index)),
                _ => continue,
            };
        }
        Ok(SetupString { repr: s.to_owned(), own, enemy })
    }
}

/// Renders occupancy masks back into the 64-character setup encoding.
pub fn notate_position(own: BitBoard, enemy: BitBoard) -> String {
    (0..NUM_SQUARES)
        .map(|index| {
            let square = Square::from_index(index);
            match (own.contains(square), enemy.contains(square)) {
                (true, _) => 'P',
                (_, true) => 'p',
                _ => '.',
            }
        })
        .collect()
}

/// A segment of a gamestring that represents a move: two algebraic square
/// names glued together, `from` then `to`.
#[derive(Clone, Debug)]
pub struct MoveString {
    pub repr: String,
    pub from: Square,
    pub to: Square,
}

impl std::str::FromStr for MoveString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new("^(?<from>[a-h][1-8])(?<to>[a-h][1-8])$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse movestring {s}"));
        };

        let from = matches.name("from").unwrap().as_str().parse::<Square>()?;
        let to = matches.name("to").unwrap().as_str().parse::<Square>()?;
        if from == to {
            return Err(anyhow!("movestring {s} goes nowhere"));
        }
        Ok(MoveString { repr: s.to_owned(), from, to })
    }
}

/// A parsed gamestring: an occupancy fragment followed by `;`-joined moves.
///
/// Caveat: the string need only be syntactically valid; whether each move is
/// a legal continuation is decided by playing them in order against the
/// graph.
#[derive(Clone, Debug)]
pub struct GameString {
    pub setup: SetupString,
    pub moves: Vec<MoveString>,
}

impl std::str::FromStr for GameString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts = s.split(";").collect::<Vec<&str>>();
        let Some((setup_str, movelist)) = parts.split_first() else {
            return Err(anyhow!("gamestring cannot be empty!"));
        };

        let setup = setup_str.trim().parse::<SetupString>()?;
        let mut moves = vec![];
        for move_str in movelist {
            let mv = move_str.trim().parse::<MoveString>()?;
            moves.push(mv);
        }

        Ok(GameString { setup, moves })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_repr() -> String {
        notate_position(START_OWN, START_ENEMY)
    }

    #[test]
    fn setup_round_trips() {
        let setup = starting_repr().parse::<SetupString>().unwrap();
        assert_eq!(setup.own, START_OWN);
        assert_eq!(setup.enemy, START_ENEMY);
        assert_eq!(notate_position(setup.own, setup.enemy), setup.repr);
    }

    #[test]
    fn setup_rejects_malformed_strings() {
        assert!("P.p".parse::<SetupString>().is_err());
        assert!("x".repeat(64).parse::<SetupString>().is_err());
    }

    #[test]
    fn moves_parse_and_reject() {
        let mv = "d2d3".parse::<MoveString>().unwrap();
        assert_eq!(mv.from.notate(), "d2");
        assert_eq!(mv.to.notate(), "d3");

        assert!("d2d2".parse::<MoveString>().is_err());
        assert!("d2i9".parse::<MoveString>().is_err());
        assert!("d2".parse::<MoveString>().is_err());
    }

    #[test]
    fn gamestrings_chain_moves() {
        let game = format!("{};d2d3;e2e4", starting_repr()).parse::<GameString>().unwrap();
        assert_eq!(game.moves.len(), 2);
        assert_eq!(game.moves[1].repr, "e2e4");

        assert!("".parse::<GameString>().is_err());
    }
}
