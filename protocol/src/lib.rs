//! 井字棋共享协议库
//!
//! 包含:
//! - 玩家、格子、棋盘等核心数据结构
//! - 获胜连线与和棋判定
//! - 棋盘字符串表示
//! - 对局轮次管理

mod board;
mod constants;
mod error;
mod game;
mod notation;
mod outcome;
mod piece;

pub use board::{Board, Line, LINES};
pub use constants::*;
pub use error::{GameError, Result};
pub use game::Game;
pub use notation::{Notation, EMPTY_NOTATION};
pub use outcome::GameOutcome;
pub use piece::{Cell, Player};
