//! 井字棋 AI 命令行工具
//!
//! - `analyze`: 分析局面并给出最佳走法
//! - `selfplay`: 引擎与对手连续对局并统计结果

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analyze;
mod config;
mod selfplay;

#[derive(Parser)]
#[command(name = "ttt-cli")]
#[command(version, about = "Tic-tac-toe engine toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a board and print the engine's move
    Analyze(analyze::AnalyzeArgs),

    /// Play a series of games from the empty board
    Selfplay(selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_cli=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Selfplay(args) => selfplay::execute(args),
    }
}
