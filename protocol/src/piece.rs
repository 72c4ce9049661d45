//! 玩家与格子定义

use serde::{Deserialize, Serialize};

/// 玩家（X 先手，O 后手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手
    X,
    /// 后手
    O,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// 从字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'x' | 'X' => Some(Player::X),
            'o' | 'O' => Some(Player::O),
            _ => None,
        }
    }

    /// 获取该玩家的标记格子
    pub fn to_cell(&self) -> Cell {
        Cell::Mark(*self)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// 空格
    #[default]
    Empty,
    /// 玩家标记
    Mark(Player),
}

impl Cell {
    /// 是否为空
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 获取占据该格的玩家
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(*player),
        }
    }

    /// 获取显示字符（空格为 `.`）
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(player) => player.to_char(),
        }
    }

    /// 从字符解析，`.`、`_`、`-` 都表示空格
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => Player::from_char(c).map(Cell::Mark),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Mark(player)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
