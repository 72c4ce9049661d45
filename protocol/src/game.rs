//! 对局控制
//!
//! 为调用方提供轮次管理，引擎本身不依赖此类型

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Line};
use crate::error::{GameError, Result};
use crate::outcome::GameOutcome;
use crate::piece::Player;

/// 一局游戏
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// 当前棋盘
    board: Board,
    /// 当前走子方
    current_turn: Player,
    /// 当前结果
    outcome: GameOutcome,
    /// 已走的格子编号
    moves: Vec<usize>,
}

impl Game {
    /// 新对局（X 先手）
    pub fn new() -> Self {
        Self::from_board(Board::empty())
    }

    /// 从已有棋盘开始，走子方按双方标记数推断
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            current_turn: board.next_player(),
            outcome: board.outcome(),
            moves: Vec::new(),
        }
    }

    /// 当前玩家走子
    pub fn play(&mut self, cell_id: usize) -> Result<GameOutcome> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }

        self.board = self.board.apply_move(cell_id, self.current_turn)?;
        self.moves.push(cell_id);
        self.outcome = self.board.outcome();

        debug!(
            "{} 落子 {}，结果: {:?}",
            self.current_turn, cell_id, self.outcome
        );

        if !self.outcome.is_over() {
            self.current_turn = self.current_turn.opponent();
        }

        Ok(self.outcome)
    }

    /// 获胜连线（用于高亮显示）
    pub fn winning_line(&self) -> Option<Line> {
        self.board.winning_line()
    }

    /// 重新开始
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn moves(&self) -> &[usize] {
        &self.moves
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Notation;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.current_turn(), Player::X);

        assert_eq!(game.play(4), Ok(GameOutcome::InProgress));
        assert_eq!(game.current_turn(), Player::O);

        assert_eq!(game.play(0), Ok(GameOutcome::InProgress));
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.moves(), &[4, 0]);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        for cell_id in [0, 3, 1, 4] {
            game.play(cell_id).unwrap();
        }

        assert_eq!(game.play(2), Ok(GameOutcome::Win(Player::X)));
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        // 结束后走子方保持为获胜方
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.play(5), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw() {
        let board = Notation::parse("XOX/XOO/OX.").unwrap();
        let mut game = Game::from_board(board);
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.play(8), Ok(GameOutcome::Draw));
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_rejected_moves_keep_state() {
        let mut game = Game::new();
        game.play(4).unwrap();

        assert_eq!(game.play(4), Err(GameError::CellOccupied { cell_id: 4 }));
        assert_eq!(game.play(9), Err(GameError::InvalidMove { cell_id: 9 }));
        assert_eq!(game.current_turn(), Player::O);
        assert_eq!(game.moves(), &[4]);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.play(0).unwrap();
        game.reset();
        assert_eq!(game, Game::new());
    }
}
