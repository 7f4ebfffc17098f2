use super::player::Player;

/// The contents of a single square on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    O,
    X,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::O => Cell::O,
            Player::X => Cell::X,
        }
    }
}

impl Cell {
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::O => Some(Player::O),
            Cell::X => Some(Player::X),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn to_char(&self) -> char {
        match self.player() {
            Some(player) => player.to_char(),
            None => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            _ => Player::from_char(c).map(Cell::from),
        }
    }
}
