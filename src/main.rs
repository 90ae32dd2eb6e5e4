#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_engine::{
    init_logging, AiConfig, CellView, Difficulty, GameConfig, GameEvent, GameSession, GameState,
    GridSnapshot, ParticipantId, PlacementRules, Seat, ShotOutcome,
};
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Level {
    Random,
    Parity,
    Smart,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Random => Difficulty::Random,
            Level::Parity => Difficulty::Parity,
            Level::Smart => Difficulty::Smart,
        }
    }
}

#[derive(clap::Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = battleship_engine::BOARD_SIZE)]
    size: usize,
    #[arg(long, value_enum, default_value_t = Level::Smart)]
    difficulty: Level,
    #[arg(long, help = "Allow ships to touch each other")]
    allow_touching: bool,
}

#[derive(clap::Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the AI in this terminal.
    Local(GameArgs),
    /// Watch two AIs play each other.
    Demo {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, value_enum, default_value_t = Level::Parity)]
        opponent: Level,
    },
}

#[cfg(feature = "std")]
const HUMAN: ParticipantId = ParticipantId(1);
#[cfg(feature = "std")]
const BOT: ParticipantId = ParticipantId(2);

#[cfg(feature = "std")]
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            s
        }
        None => rand::random(),
    }
}

#[cfg(feature = "std")]
fn base_config(args: &GameArgs, first: Seat, second: Seat) -> GameConfig {
    GameConfig::new(first, second)
        .board_size(args.size)
        .rules(PlacementRules::default().allow_adjacent(args.allow_touching))
        .seed(resolve_seed(args.seed))
}

#[cfg(feature = "std")]
fn cell_char(cell: CellView) -> char {
    match cell {
        CellView::Unknown | CellView::Empty => '.',
        CellView::Ship => 'S',
        CellView::Miss => 'o',
        CellView::Hit => 'X',
        CellView::Sunk => '#',
    }
}

#[cfg(feature = "std")]
fn print_grid(title: &str, grid: &GridSnapshot) {
    println!("{}", title);
    print!("   ");
    for c in 0..grid.size {
        print!("{:>3}", c + 1);
    }
    println!();
    for (r, row) in grid.cells.iter().enumerate() {
        print!(" {} ", (b'A' + r as u8) as char);
        for cell in row {
            print!("{:>3}", cell_char(*cell));
        }
        println!();
    }
}

#[cfg(feature = "std")]
fn describe(outcome: &ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Miss => "miss".to_string(),
        ShotOutcome::Hit => "hit!".to_string(),
        ShotOutcome::Sunk { species, .. } => format!("hit and sunk the {}!", species.name()),
    }
}

#[cfg(feature = "std")]
fn print_event_log(session: &GameSession) {
    println!("Move log:");
    for event in session.events() {
        match event {
            GameEvent::GameStarted { first, second } => println!("  game started: {} vs {}", first, second),
            GameEvent::Shot { shooter, coordinate, hit } => {
                println!("  {} fired at {} ({})", shooter, coordinate, if *hit { "hit" } else { "miss" })
            }
            GameEvent::Sank { shooter, species, .. } => println!("  {} sank the {}", shooter, species.name()),
            GameEvent::TurnPassed { .. } => {}
            GameEvent::GameFinished { winner } => println!("  {} won", winner),
        }
    }
}

#[cfg(feature = "std")]
fn run_local(args: GameArgs) -> anyhow::Result<()> {
    let ai = AiConfig::with_difficulty(args.difficulty.into());
    let config = base_config(&args, Seat::human(HUMAN), Seat::ai(BOT, ai));
    let mut session = GameSession::create(config).map_err(|e| anyhow::anyhow!(e))?;
    log::info!("local game started on a {0}x{0} board", args.size);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let GameState::AwaitingMove(id) = session.state() {
        if session.is_ai(id).map_err(|e| anyhow::anyhow!(e))? {
            let mv = session.play_ai_turn(id).map_err(|e| anyhow::anyhow!(e))?;
            println!("I fire at {}: {}", mv.coordinate, describe(&mv.outcome));
            continue;
        }
        let view = session.snapshot(HUMAN).map_err(|e| anyhow::anyhow!(e))?;
        print_grid("Your fleet:", &view.own);
        print_grid("Your shots:", &view.opponent);
        print!("Target (e.g. A1): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!("Input closed, leaving the game.");
            return Ok(());
        };
        match session.submit_text(HUMAN, &line?) {
            Ok(mv) => println!("{}: {}", mv.coordinate, describe(&mv.outcome)),
            Err(e) => println!("{}", e),
        }
    }
    if session.winner() == Some(HUMAN) {
        println!("You win the game!");
    } else {
        println!("I win the game!");
    }
    print_event_log(&session);
    Ok(())
}

#[cfg(feature = "std")]
fn run_demo(args: GameArgs, opponent: Level) -> anyhow::Result<()> {
    let first = Seat::ai(ParticipantId(1), AiConfig::with_difficulty(args.difficulty.into()));
    let second = Seat::ai(ParticipantId(2), AiConfig::with_difficulty(opponent.into()));
    let config = base_config(&args, first, second);
    let mut session = GameSession::create(config).map_err(|e| anyhow::anyhow!(e))?;

    while let GameState::AwaitingMove(id) = session.state() {
        let mv = session.play_ai_turn(id).map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("move {}: {} -> {} {:?}", mv.move_number, id, mv.coordinate, mv.outcome);
    }
    for id in session.participants() {
        let view = session.snapshot(id).map_err(|e| anyhow::anyhow!(e))?;
        print_grid(&format!("Fleet of {}:", id), &view.own);
    }
    print_event_log(&session);
    println!("Finished after {} moves", session.move_count());
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Local(args) => run_local(args),
        Commands::Demo { game, opponent } => run_demo(game, opponent),
    }
}
