//! 终局评估函数
//!
//! 井字棋的博弈树足够小，只对终局精确打分，不做启发式评估

use protocol::{Board, Player, WIN_SCORE};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 终局得分（`maximizer` 视角），非终局返回 None
    ///
    /// 胜局 `WIN_SCORE - depth`，负局 `-WIN_SCORE + depth`，和棋 0。
    /// 深度修正让引擎偏向更快的胜利和更慢的失败。
    pub fn terminal_score(board: &Board, depth: u8, maximizer: Player) -> Option<i32> {
        let depth = i32::from(depth);

        // 先查连线：满盘且有连线时按胜局处理
        if let Some(winner) = board.winner() {
            return Some(if winner == maximizer {
                WIN_SCORE - depth
            } else {
                -WIN_SCORE + depth
            });
        }

        if board.is_draw() {
            return Some(0);
        }

        None
    }
}
