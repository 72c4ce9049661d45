//! 引擎配置
//!
//! 命令行参数优先于配置文件，配置文件优先于默认值

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use protocol::Player;
use tracing::debug;
use ttt_ai::AiConfig;

/// 引擎相关参数
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Side the engine plays (x or o)
    #[arg(long, value_parser = parse_player)]
    pub ai: Option<Player>,

    /// Disable alpha-beta pruning (full-window search)
    #[arg(long)]
    pub no_pruning: bool,

    /// Load the engine config from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl EngineArgs {
    /// 合成最终配置，`fallback` 为未指定执子方时的默认值
    pub fn to_config(&self, fallback: Player) -> Result<AiConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => AiConfig::for_player(fallback),
        };

        if let Some(ai) = self.ai {
            config.ai_player = ai;
        }
        if self.no_pruning {
            config.pruning = false;
        }

        debug!("引擎配置: {:?}", config);
        Ok(config)
    }
}

/// 从 JSON 文件加载配置
pub fn load_config(path: &Path) -> Result<AiConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// 解析执子方参数
pub fn parse_player(s: &str) -> Result<Player, String> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Player::from_char(c).ok_or_else(|| format!("invalid player '{}'", s)),
        _ => Err(format!("invalid player '{}' (expected x or o)", s)),
    }
}
