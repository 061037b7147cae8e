//! Runs seeded matches between automated agents and prints the scores.
//!
//! ```text
//! RUST_LOG=debug selfplay --games 10 --seed 7 --agent greedy
//! ```

use canasta_engine::{
    EngineError, GameConfig, GameResult, GreedyAgent, MatchSetup, PlayerAgent, RandomAgent, StepOutcome, TeamId,
};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Random,
    Greedy,
    /// Greedy on team Red, random on team Blue.
    Mixed,
}

#[derive(Debug, Parser)]
#[command(about = "Play automated Canasta matches")]
struct Args {
    /// Number of matches to play.
    #[arg(short, long, default_value_t = 1)]
    games: u64,

    /// Seed of the first match. Match `n` uses `seed + n`.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    #[arg(short, long, value_enum, default_value_t = AgentKind::Random)]
    agent: AgentKind,

    /// Give up on a match after this many steps.
    #[arg(long, default_value_t = 5_000)]
    max_steps: usize,

    /// Play without jokers.
    #[arg(long)]
    no_jokers: bool,
}

fn seat(kind: AgentKind, seed: u64, seat: u64) -> Box<dyn PlayerAgent> {
    let greedy = match kind {
        AgentKind::Random => false,
        AgentKind::Greedy => true,
        AgentKind::Mixed => seat % 2 == 0,
    };
    if greedy {
        Box::new(GreedyAgent::new())
    } else {
        Box::new(RandomAgent::new(seed.wrapping_mul(31).wrapping_add(seat)))
    }
}

fn main() -> Result<(), EngineError> {
    env_logger::init();
    let args = Args::parse();
    let mut wins = [0u64; 2];
    let mut draws = 0u64;

    for n in 0..args.games {
        let seed = args.seed.wrapping_add(n);
        let config = GameConfig::default()
            .with_seed(seed)
            .with_jokers(!args.no_jokers)
            .with_history(false);
        let agents = [0, 1, 2, 3].map(|i| seat(args.agent, seed, i));
        let mut game = MatchSetup::new(config, agents).initialize()?;

        let mut steps = 0;
        while steps < args.max_steps {
            match game.step() {
                StepOutcome::Finished | StepOutcome::Waiting => break,
                StepOutcome::Applied(_) | StepOutcome::Rejected { .. } => steps += 1,
            }
        }

        let outcome = match game.result() {
            Some(GameResult::Winner(team)) => {
                wins[team.index()] += 1;
                format!("{} wins", team)
            }
            Some(GameResult::Draw) => {
                draws += 1;
                "draw".to_string()
            }
            None => "unfinished".to_string(),
        };
        println!(
            "game {:>4} seed {:>6}: Red {:>5} Blue {:>5} after {:>3} turns ({})",
            n,
            seed,
            game.red_team_score(),
            game.blue_team_score(),
            game.turn(),
            outcome
        );
    }

    println!(
        "{}: {} {}: {} draws: {}",
        TeamId::RED,
        wins[TeamId::RED.index()],
        TeamId::BLUE,
        wins[TeamId::BLUE.index()],
        draws
    );
    Ok(())
}
