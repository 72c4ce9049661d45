//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估函数
//! - Minimax + Alpha-Beta 搜索（穷举整棵博弈树）

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{choose_move, AiConfig, AiEngine, SearchResult, SearchStats};
