//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, BOARD_WIDTH};
use crate::error::{GameError, Result};
use crate::outcome::GameOutcome;
use crate::piece::{Cell, Player};

/// 一条连线（三个格子编号）
pub type Line = [usize; 3];

/// 全部 8 条获胜连线，按行、列、对角线顺序声明
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 棋盘
///
/// 3x3 棋盘，索引为 y * 3 + x。值类型，走子总是产生新棋盘。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// 从格子序列创建棋盘，长度必须为 9
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; BOARD_SIZE] = cells
            .try_into()
            .map_err(|_| GameError::InvalidBoard { len: cells.len() })?;
        Ok(Self { cells })
    }

    /// 获取全部格子
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// 获取指定格子，越界返回 None
    pub fn get(&self, cell_id: usize) -> Option<Cell> {
        self.cells.get(cell_id).copied()
    }

    /// 所有空格编号（升序）
    ///
    /// 顺序决定了搜索的走法枚举顺序，也就决定了同分时的取舍。
    pub fn empty_cell_ids(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(id, _)| id)
            .collect()
    }

    /// 按声明顺序返回第一条三格相同且非空的连线
    pub fn winning_line(&self) -> Option<Line> {
        LINES.iter().copied().find(|&[a, b, c]| {
            !self.cells[a].is_empty()
                && self.cells[a] == self.cells[b]
                && self.cells[b] == self.cells[c]
        })
    }

    /// 获胜方（取第一条获胜连线的标记）
    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|line| self.cells[line[0]].player())
    }

    /// 棋盘是否已满
    ///
    /// 不考虑是否有人获胜，调用方应先检查 `winning_line`。
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// 当前棋局结果
    pub fn outcome(&self) -> GameOutcome {
        if let Some(player) = self.winner() {
            GameOutcome::Win(player)
        } else if self.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// 走子，返回新棋盘
    ///
    /// 越界返回 `InvalidMove`，目标格已有标记返回 `CellOccupied`。
    pub fn apply_move(&self, cell_id: usize, player: Player) -> Result<Board> {
        match self.get(cell_id) {
            None => Err(GameError::InvalidMove { cell_id }),
            Some(Cell::Mark(_)) => Err(GameError::CellOccupied { cell_id }),
            Some(Cell::Empty) => Ok(self.with_mark(cell_id, player)),
        }
    }

    /// 放置标记（不检查规则），越界时棋盘不变
    pub fn with_mark(&self, cell_id: usize, player: Player) -> Board {
        let mut board = *self;
        if let Some(cell) = board.cells.get_mut(cell_id) {
            *cell = Cell::Mark(player);
        }
        board
    }

    /// 指定玩家的标记数
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }

    /// 按交替走子推断下一步的玩家（X 先手）
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = GameError;

    fn try_from(cells: Vec<Cell>) -> Result<Self> {
        Self::from_cells(&cells)
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let row: String = row.iter().map(Cell::to_char).collect();
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Mark(Player::X);
    const O: Cell = Cell::Mark(Player::O);
    const E: Cell = Cell::Empty;

    fn board(cells: [Cell; 9]) -> Board {
        Board::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_cell_ids(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.winning_line(), None);
        assert!(!board.is_draw());
        assert_eq!(board.outcome(), GameOutcome::InProgress);
        assert_eq!(board.next_player(), Player::X);
    }

    #[test]
    fn test_from_cells_wrong_length() {
        assert_eq!(
            Board::from_cells(&[E; 8]),
            Err(GameError::InvalidBoard { len: 8 })
        );
        assert_eq!(
            Board::from_cells(&[E; 10]),
            Err(GameError::InvalidBoard { len: 10 })
        );
        assert!(Board::from_cells(&[]).is_err());
    }

    #[test]
    fn test_empty_cell_ids_ascending() {
        let board = board([X, E, O, E, X, E, E, O, E]);
        assert_eq!(board.empty_cell_ids(), vec![1, 3, 5, 6, 8]);
    }

    #[test]
    fn test_winning_line_each_line() {
        for line in LINES {
            let mut cells = [E; 9];
            for id in line {
                cells[id] = O;
            }
            let board = board(cells);
            assert_eq!(board.winning_line(), Some(line));
            assert_eq!(board.winner(), Some(Player::O));
        }
    }

    #[test]
    fn test_winning_line_first_match() {
        // 不合法局面：两条连线同时成立，返回声明顺序中的第一条
        let board = board([O, O, O, E, E, E, X, X, X]);
        assert_eq!(board.winning_line(), Some([0, 1, 2]));
        assert_eq!(board.outcome(), GameOutcome::Win(Player::O));
    }

    #[test]
    fn test_full_and_won() {
        // 满盘且有连线：is_draw 为真，但结果是胜局
        let board = board([X, X, X, O, O, X, X, O, O]);
        assert!(board.is_draw());
        assert_eq!(board.winning_line(), Some([0, 1, 2]));
        assert_eq!(board.outcome(), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_draw_after_last_move() {
        let board = board([X, O, X, O, X, O, O, X, E]);
        assert!(!board.is_draw());
        assert_eq!(board.winning_line(), None);

        let filled = board.apply_move(8, Player::O).unwrap();
        assert!(filled.is_draw());
        assert_eq!(filled.winning_line(), None);
        assert_eq!(filled.outcome(), GameOutcome::Draw);

        // X 落在 8 会连成 0-4-8 对角线
        let won = board.apply_move(8, Player::X).unwrap();
        assert_eq!(won.winning_line(), Some([0, 4, 8]));
        assert_eq!(won.outcome(), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_apply_move() {
        let before = Board::empty();
        let after = before.apply_move(4, Player::X).unwrap();

        assert_eq!(after.get(4), Some(X));
        // 原棋盘不变
        assert_eq!(before.get(4), Some(E));

        for id in (0..9).filter(|&id| id != 4) {
            assert_eq!(after.get(id), before.get(id));
        }
    }

    #[test]
    fn test_apply_move_removes_exactly_one_empty_id() {
        let mut board = board([X, E, O, E, E, E, E, E, E]);
        for cell_id in board.empty_cell_ids() {
            let before = board.empty_cell_ids();
            let player = board.next_player();
            board = board.apply_move(cell_id, player).unwrap();
            let after = board.empty_cell_ids();

            assert_eq!(after.len(), before.len() - 1);
            let removed: Vec<_> = before.iter().filter(|id| !after.contains(id)).collect();
            assert_eq!(removed, vec![&cell_id]);
        }
    }

    #[test]
    fn test_apply_move_errors() {
        let board = Board::empty().with_mark(0, Player::X);
        assert_eq!(
            board.apply_move(9, Player::O),
            Err(GameError::InvalidMove { cell_id: 9 })
        );
        assert_eq!(
            board.apply_move(0, Player::O),
            Err(GameError::CellOccupied { cell_id: 0 })
        );
    }

    #[test]
    fn test_with_mark_out_of_range() {
        let board = Board::empty();
        assert_eq!(board.with_mark(42, Player::X), board);
    }

    #[test]
    fn test_inconsistent_board_does_not_panic() {
        let board = board([O, O, E, O, O, E, E, E, E]);
        assert_eq!(board.count(Player::O), 4);
        assert_eq!(board.next_player(), Player::X);
        assert_eq!(board.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_display() {
        let board = board([X, X, E, O, O, E, E, E, E]);
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
    }

    #[test]
    fn test_serde() {
        let board = board([X, E, E, E, O, E, E, E, E]);
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);

        // 长度不对时反序列化失败
        let short = serde_json::to_string(&vec![E; 4]).unwrap();
        assert!(serde_json::from_str::<Board>(&short).is_err());
    }
}
