//! 棋盘常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 3;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 3;

/// 格子总数
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// 胜局基础分值（实际得分为 WIN_SCORE - 深度）
pub const WIN_SCORE: i32 = 100;
