//! 自对弈
//!
//! AI 执子方与另一个引擎或随机对手从空棋盘开始连续对局

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use protocol::{Board, Game, GameOutcome, Notation, Player};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use ttt_ai::{AiConfig, AiEngine};

use crate::config::EngineArgs;

/// 对手类型
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// 另一个最优引擎
    Engine,
    /// 随机走子
    Random,
}

#[derive(Args, Debug)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    pub games: u32,

    /// Opponent type
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    pub opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// 对局统计（AI 视角）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome, ai: Player) {
        match outcome {
            GameOutcome::Win(winner) if winner == ai => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }
}

/// 走子方
pub enum Mover {
    Engine(AiEngine),
    Random(ChaCha8Rng),
}

impl Mover {
    fn next_move(&mut self, board: &Board) -> Option<usize> {
        match self {
            Mover::Engine(engine) => engine.search(board).cell_id,
            Mover::Random(rng) => board.empty_cell_ids().choose(rng).copied(),
        }
    }
}

/// 下完一局，X 先手
pub fn play_game(engine: &AiEngine, opponent: &mut Mover) -> Result<Game> {
    let ai = engine.config().ai_player;
    let mut game = Game::new();

    while !game.outcome().is_over() {
        let cell_id = if game.current_turn() == ai {
            engine.search(game.board()).cell_id
        } else {
            opponent.next_move(game.board())
        };
        let cell_id = cell_id.with_context(|| {
            format!("no move available on {}", Notation::to_string(game.board()))
        })?;
        game.play(cell_id)?;
    }

    Ok(game)
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let config = args.engine.to_config(Player::X)?;
    let engine = AiEngine::new(config);

    let mut opponent = match args.opponent {
        Opponent::Engine => Mover::Engine(AiEngine::new(AiConfig {
            ai_player: config.ai_player.opponent(),
            ..config
        })),
        Opponent::Random => Mover::Random(ChaCha8Rng::seed_from_u64(args.seed)),
    };

    info!(
        "开始自对弈: {} 局, AI 执 {}, 对手 {:?}",
        args.games, config.ai_player, args.opponent
    );

    let mut tally = Tally::default();
    for i in 0..args.games {
        let game = play_game(&engine, &mut opponent)?;
        let outcome = game.outcome();
        tally.record(outcome, config.ai_player);

        if outcome.winner() == Some(config.ai_player.opponent()) {
            warn!("第 {} 局 AI 输棋，走法: {:?}", i + 1, game.moves());
        } else {
            info!("第 {} 局: {}，走法: {:?}", i + 1, outcome, game.moves());
        }
    }

    println!(
        "AI ({}) vs {:?}: {} wins, {} draws, {} losses",
        config.ai_player, args.opponent, tally.wins, tally.draws, tally.losses
    );

    if tally.losses > 0 {
        bail!("engine lost {} of {} games", tally.losses, args.games);
    }

    Ok(())
}
