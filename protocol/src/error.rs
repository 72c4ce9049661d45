//! 错误类型定义

use thiserror::Error;

/// 棋局错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 棋盘格子数不是 9
    #[error("Invalid board: expected 9 cells, got {len}")]
    InvalidBoard { len: usize },

    /// 格子编号越界
    #[error("Invalid move: cell {cell_id} is out of range (must be 0-8)")]
    InvalidMove { cell_id: usize },

    /// 目标格已被占据
    #[error("Invalid move: cell {cell_id} is already occupied")]
    CellOccupied { cell_id: usize },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的棋盘字符串
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 棋局操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
