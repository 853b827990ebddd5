use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    FB,
    WR,
    TE,
    OL,
    DL,
    EDGE,
    LB,
    CB,
    S,
    K,
    P,
}

impl Position {
    pub fn get_short_name(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::FB => "FB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OL => "OL",
            Position::DL => "DL",
            Position::EDGE => "EDGE",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S => "S",
            Position::K => "K",
            Position::P => "P",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" | "HB" => Ok(Position::RB),
            "FB" => Ok(Position::FB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "OL" | "OT" | "OG" | "C" => Ok(Position::OL),
            "DL" | "DT" => Ok(Position::DL),
            "EDGE" | "DE" => Ok(Position::EDGE),
            "LB" | "MLB" | "OLB" => Ok(Position::LB),
            "CB" => Ok(Position::CB),
            "S" | "FS" | "SS" => Ok(Position::S),
            "K" => Ok(Position::K),
            "P" => Ok(Position::P),
            other => Err(UnknownPosition(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_with_aliases() {
        assert_eq!("qb".parse::<Position>(), Ok(Position::QB));
        assert_eq!("De".parse::<Position>(), Ok(Position::EDGE));
        assert_eq!(" FS ".parse::<Position>(), Ok(Position::S));
        assert!("XYZ".parse::<Position>().is_err());
    }

    #[test]
    fn test_short_name_round_trips() {
        for position in [Position::QB, Position::EDGE, Position::CB, Position::K] {
            assert_eq!(position.get_short_name().parse::<Position>(), Ok(position));
        }
    }
}
