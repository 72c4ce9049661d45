//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，穷举搜索到终局

use protocol::{Board, Cell, GameError, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// AI 执子方（搜索中的极大方）
    pub ai_player: Player,
    /// 是否启用 Alpha-Beta 剪枝（只影响搜索节点数，不影响结果）
    pub pruning: bool,
}

impl AiConfig {
    pub fn for_player(ai_player: Player) -> Self {
        Self {
            ai_player,
            pruning: true,
        }
    }
}

impl Default for AiConfig {
    /// 默认 AI 后手执 O
    fn default() -> Self {
        Self::for_player(Player::O)
    }
}

/// 搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 选中的格子，无空格时为 None
    pub cell_id: Option<usize>,
    /// 极大方视角的博弈值
    pub score: i32,
}

/// 单次搜索的统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 访问的节点数（不含根节点）
    pub nodes: u64,
    /// 剪枝次数
    pub cutoffs: u64,
}

/// AI 引擎
///
/// 只持有不可变配置，每次搜索互相独立，可跨线程共享。
#[derive(Debug, Clone, Default)]
pub struct AiEngine {
    config: AiConfig,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    /// 指定执子方创建
    pub fn for_player(ai_player: Player) -> Self {
        Self::new(AiConfig::for_player(ai_player))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 搜索最佳走法
    pub fn search(&self, board: &Board) -> SearchResult {
        self.search_with_stats(board).0
    }

    /// 从格子序列搜索，长度不为 9 时返回 `InvalidBoard`
    pub fn search_cells(&self, cells: &[Cell]) -> Result<SearchResult, GameError> {
        let board = Board::from_cells(cells)?;
        Ok(self.search(&board))
    }

    /// 搜索最佳走法并返回统计信息
    ///
    /// 按格子编号升序尝试每个空格，只有严格更高的分数才替换当前最佳，
    /// 因此同分时保留编号最小的格子。
    pub fn search_with_stats(&self, board: &Board) -> (SearchResult, SearchStats) {
        let mut stats = SearchStats::default();
        let mut best = SearchResult {
            cell_id: None,
            score: 0,
        };
        let mut best_score = i32::MIN;

        for cell_id in board.empty_cell_ids() {
            let child = board.with_mark(cell_id, self.config.ai_player);

            // 根节点的每个子节点都用完整窗口搜索，保证分数精确
            let score = self.minimax(&child, 1, false, i32::MIN, i32::MAX, &mut stats);

            if score > best_score {
                best_score = score;
                best = SearchResult {
                    cell_id: Some(cell_id),
                    score,
                };
            }
        }

        debug!(
            "{} 搜索完成: cell={:?}, score={}, nodes={}, cutoffs={}",
            self.config.ai_player, best.cell_id, best.score, stats.nodes, stats.cutoffs
        );

        (best, stats)
    }

    /// Minimax 搜索
    ///
    /// `depth` 为距根节点的步数，`alpha`/`beta` 为当前窗口。
    pub fn minimax(
        &self,
        board: &Board,
        depth: u8,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        if let Some(score) = Evaluator::terminal_score(board, depth, self.config.ai_player) {
            return score;
        }

        let mover = if is_maximizing {
            self.config.ai_player
        } else {
            self.config.ai_player.opponent()
        };
        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

        for cell_id in board.empty_cell_ids() {
            let child = board.with_mark(cell_id, mover);
            let score = self.minimax(&child, depth + 1, !is_maximizing, alpha, beta, stats);

            if is_maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.config.pruning && beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// 为指定玩家计算最佳走法
pub fn choose_move(board: &Board, player: Player) -> SearchResult {
    AiEngine::for_player(player).search(board)
}
