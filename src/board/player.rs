use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The two identities that take turns placing marks. `O` moves first unless
/// the caller says otherwise.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    O,
    X,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::O, Player::X];

    pub fn opposite(&self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    pub fn random() -> Self {
        if rand::thread_rng().gen_bool(0.5) {
            Player::O
        } else {
            Player::X
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'O' | 'o' => Some(Player::O),
            'X' | 'x' => Some(Player::X),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player.to_lowercase().as_str() {
            "o" => Ok(Player::O),
            "x" => Ok(Player::X),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: o, x, random"),
        }
    }
}
