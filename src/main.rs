//! Octi engine binary
//!
//! Opens the GUI by default; `selfplay` runs an AI-vs-AI match in the
//! terminal and prints the move record.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use octi::ui::{GameMode, GuiSettings, OctiApp};
use octi::{AIEngine, CaptureRule, Match, MatchConfig, Player};

#[derive(Parser, Debug)]
#[command(name = "octi", version, about = "Octi rules engine with an alpha-beta AI")]
struct Cli {
    /// Maximum AI search depth
    #[arg(long, default_value_t = 4)]
    depth: u8,
    /// AI time limit per move in milliseconds (0 searches the full depth)
    #[arg(long, default_value_t = 1000)]
    time_limit_ms: u64,
    /// Total moves after which the match is drawn
    #[arg(long, default_value_t = octi::game::DEFAULT_MAX_MOVES)]
    max_moves: usize,
    /// Only move the attacker in when the defender loses its last prong
    #[arg(long)]
    strict_captures: bool,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play in the desktop GUI
    Gui {
        /// Two humans on one screen
        #[arg(long)]
        pvp: bool,
        /// Which player the human controls against the AI
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
        human: u8,
    },
    /// Let the AI play both sides and print the game
    Selfplay,
}

impl Cli {
    fn match_config(&self) -> MatchConfig {
        MatchConfig {
            max_moves: self.max_moves,
            capture_rule: if self.strict_captures {
                CaptureRule::Strict
            } else {
                CaptureRule::Overwrite
            },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.match_config();

    match cli.cmd {
        Some(Command::Selfplay) => selfplay(config, cli.depth, cli.time_limit_ms),
        Some(Command::Gui { pvp, human }) => {
            let mode = if pvp {
                GameMode::PvP { show_suggestions: false }
            } else {
                let human = Player::from_index(usize::from(human)).context("--human must be 0 or 1")?;
                GameMode::PvE { human }
            };
            run_gui(mode, config, cli.depth, cli.time_limit_ms)
        }
        None => run_gui(GameMode::default(), config, cli.depth, cli.time_limit_ms),
    }
}

fn run_gui(mode: GameMode, match_config: MatchConfig, ai_depth: u8, ai_time_limit_ms: u64) -> Result<()> {
    let settings = GuiSettings {
        ai_depth,
        ai_time_limit_ms,
        match_config,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Octi"),
        ..Default::default()
    };

    info!(?mode, "starting GUI");
    eframe::run_native(
        "Octi",
        options,
        Box::new(move |_cc| Ok(Box::new(OctiApp::with_mode(mode, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}

fn selfplay(config: MatchConfig, depth: u8, time_limit_ms: u64) -> Result<()> {
    let mut game = Match::new(config);
    let mut engine = AIEngine::with_config(depth, time_limit_ms).with_capture_rule(config.capture_rule);

    while !game.is_over() {
        let player = game.current_player();
        let result = engine
            .get_move_with_stats(game.board(), player)
            .with_context(|| format!("{} could not move", player))?;
        let Some(mv) = result.best_move else {
            bail!("{} has no move", player);
        };

        println!(
            "{:>3}. {}: {}  (score {:.1}, depth {}, {} nodes, {}ms)",
            game.move_log().len() + 1,
            player,
            mv,
            result.score,
            result.depth,
            result.nodes,
            result.time_ms
        );
        game.submit_move(mv).context("engine chose a rejected move")?;
    }

    println!();
    println!("{}", game.board());
    match game.outcome() {
        Some(outcome) => match outcome.winner() {
            Some(winner) => println!("{} wins ({:?})", winner, outcome),
            None => println!("draw ({:?})", outcome),
        },
        None => bail!("match ended without an outcome"),
    }
    Ok(())
}
