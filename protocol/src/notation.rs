//! 棋盘字符串表示
//!
//! 格式：按行书写 9 个格子，可用 `/` 分行
//!
//! 示例：
//! `XX./OO./...`（也可写作 `XX_OO____`）

use crate::board::Board;
use crate::constants::{BOARD_SIZE, BOARD_WIDTH};
use crate::error::{GameError, Result};
use crate::piece::Cell;

/// 空棋盘
pub const EMPTY_NOTATION: &str = ".../.../...";

/// 棋盘字符串处理
pub struct Notation;

impl Notation {
    /// 解析棋盘字符串
    pub fn parse(notation: &str) -> Result<Board> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);

        for c in notation.trim().chars() {
            if c == '/' || c.is_whitespace() {
                continue;
            }
            match Cell::from_char(c) {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(GameError::InvalidNotation {
                        reason: format!("Invalid cell character: {}", c),
                    })
                }
            }
        }

        Board::from_cells(&cells)
    }

    /// 将棋盘转换为字符串
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_WIDTH)
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}
