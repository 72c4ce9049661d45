//! 局面分析

use anyhow::{Context, Result};
use clap::Args;
use protocol::Notation;
use tracing::info;
use ttt_ai::AiEngine;

use crate::config::EngineArgs;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board notation, e.g. "XX./OO./..." or "XX_OO____"
    pub board: String,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Print the search result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Notation::parse(&args.board)
        .with_context(|| format!("failed to parse board '{}'", args.board))?;

    // 默认替当前走子方分析
    let config = args.engine.to_config(board.next_player())?;

    let outcome = board.outcome();
    if outcome.is_over() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("{}\n\n{}", board, outcome);
        }
        return Ok(());
    }

    let engine = AiEngine::new(config);
    let (result, stats) = engine.search_with_stats(&board);
    info!(
        "分析完成: {} -> {:?} (score={}, nodes={})",
        Notation::to_string(&board),
        result.cell_id,
        result.score,
        stats.nodes
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}\n", board);
    println!("AI plays: {}", config.ai_player);
    match result.cell_id {
        Some(cell_id) => println!("Best move: {}", cell_id),
        None => println!("Best move: none"),
    }
    println!("Score:     {}", result.score);
    println!("Nodes:     {} ({} cutoffs)", stats.nodes, stats.cutoffs);

    Ok(())
}
