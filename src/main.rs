//! dlgo-rust: play Go against or between MCTS bots.
//!
//! ## Usage
//!
//! - `dlgo-rust` - Two MCTS bots play each other
//! - `dlgo-rust bot-v-bot` - Same, with options
//! - `dlgo-rust human-v-bot` - Play against the MCTS bot from the terminal
//!
//! Set `RUST_LOG=debug` to see per-move search statistics.

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use flexi_logger::Logger;

use dlgo_rust::agent::{HumanAgent, MctsAgent, MctsConfig};
use dlgo_rust::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_KOMI, DEFAULT_NUM_ROUNDS, DEFAULT_TEMPERATURE, MAX_BOARD_SIZE,
};
use dlgo_rust::coords::format_move;
use dlgo_rust::driver::play_game;
use dlgo_rust::game::{GameState, Move};
use dlgo_rust::types::Player;

/// dlgo-rust: Go with a Monte Carlo Tree Search bot
#[derive(Parser)]
#[command(name = "dlgo-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch two MCTS bots play each other
    BotVBot(GameOpts),
    /// Play against an MCTS bot by typing coordinates such as C3, pass or resign
    HumanVBot {
        #[command(flatten)]
        opts: GameOpts,
        /// Colour the human plays
        #[arg(long, value_enum, default_value_t = Colour::White)]
        human_color: Colour,
    },
}

#[derive(Args, Clone)]
struct GameOpts {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// MCTS rounds per move
    #[arg(long, default_value_t = DEFAULT_NUM_ROUNDS)]
    rounds: usize,
    /// UCT exploration temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,
    /// Compensation points for White
    #[arg(long, default_value_t = DEFAULT_KOMI)]
    komi: f64,
    /// Seed for all randomness (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for GameOpts {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            rounds: DEFAULT_NUM_ROUNDS,
            temperature: DEFAULT_TEMPERATURE,
            komi: DEFAULT_KOMI,
            seed: None,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Colour {
    Black,
    White,
}

impl From<Colour> for Player {
    fn from(c: Colour) -> Self {
        match c {
            Colour::Black => Player::Black,
            Colour::White => Player::White,
        }
    }
}

impl GameOpts {
    fn new_game(&self) -> Result<GameState> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.size) {
            bail!("board size must be between 1 and {MAX_BOARD_SIZE} (got {})", self.size);
        }
        Ok(GameState::new_game_with_komi(self.size, self.komi))
    }

    fn bot(&self, seed_offset: u64) -> Result<MctsAgent> {
        let config =
            MctsConfig::new(self.rounds, self.temperature).context("invalid search settings")?;
        Ok(match self.seed {
            Some(seed) => MctsAgent::with_seed(config, seed.wrapping_add(seed_offset)),
            None => MctsAgent::new(config),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    match cli.command {
        Some(Commands::BotVBot(opts)) => bot_v_bot(&opts),
        Some(Commands::HumanVBot { opts, human_color }) => human_v_bot(&opts, human_color.into()),
        None => bot_v_bot(&GameOpts::default()),
    }
}

fn show(game: &GameState, last_move: Option<&str>) {
    print!("{}[2J", 27 as char);
    println!("{}", game.board());
    if let Some(text) = last_move {
        println!("Last move: {text}");
    }
}

/// Draw the board after `mv`, which the previous player just made.
fn render(game: &GameState, mv: &Move) {
    show(game, Some(&format_move(game.next_player().other(), mv)));
}

fn announce_result(game: &GameState) {
    match game.winner() {
        Some(winner) if game.last_move().is_some_and(|m| m.is_resign()) => {
            println!("{winner} wins by resignation");
        }
        Some(_) => println!("Result: {}", game.game_result()),
        None => println!("Game abandoned"),
    }
}

fn bot_v_bot(opts: &GameOpts) -> Result<()> {
    let game = opts.new_game()?;
    let mut black = opts.bot(0)?;
    let mut white = opts.bot(1)?;

    show(&game, None);
    let end = play_game(game, &mut black, &mut white, render);
    announce_result(&end);
    Ok(())
}

fn human_v_bot(opts: &GameOpts, human: Player) -> Result<()> {
    let game = opts.new_game()?;
    let mut bot = opts.bot(0)?;
    let mut person = HumanAgent::new(io::stdin().lock(), io::stdout());

    show(&game, None);
    let end = match human {
        Player::Black => play_game(game, &mut person, &mut bot, render),
        Player::White => play_game(game, &mut bot, &mut person, render),
    };
    announce_result(&end);
    Ok(())
}
