//! 棋局结果

use serde::{Deserialize, Serialize};

use crate::piece::Player;

/// 棋局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// 进行中
    InProgress,
    /// 一方获胜
    Win(Player),
    /// 和棋
    Draw,
}

impl GameOutcome {
    /// 棋局是否结束
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "Player {} won!", player),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
