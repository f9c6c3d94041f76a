//! Arena CLI — sweep the enemy roster over generated boards from the
//! command line.
//!
//! Usage:
//!   cargo run --release --bin arena -- --games 500 --rows 10 --cols 10
//!   cargo run --release --bin arena -- --policies hoarder,calculator --bomb-marks 2

use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use minecrawl_engine::ai::{resolve_ai_tag, EnemyBrain};
use minecrawl_engine::engine::archetypes::{load_default_archetypes, ArchetypeProfile};
use minecrawl_engine::engine::board::{Board, BoardLayout, CellKind, Mark};
use minecrawl_engine::engine::models::PlayerState;

#[derive(Parser)]
#[command(name = "arena", about = "Run enemy-roster sweeps over generated boards")]
struct Cli {
    /// Encounters per archetype
    #[arg(long, default_value = "200")]
    games: usize,

    /// Base random seed; game i uses seed + i
    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(long, default_value = "8")]
    rows: usize,

    #[arg(long, default_value = "8")]
    cols: usize,

    /// Attack cells per board
    #[arg(long, default_value = "6")]
    attacks: usize,

    /// Gold cells per board
    #[arg(long, default_value = "5")]
    gold: usize,

    /// Trap cells per board
    #[arg(long, default_value = "2")]
    traps: usize,

    /// Comma-separated ai tags; keeps only archetypes using them
    #[arg(long)]
    policies: Option<String>,

    /// Enemy turns per encounter
    #[arg(long, default_value = "20")]
    max_turns: usize,

    /// Bomb-suspect marks dropped on random hidden cells at encounter
    /// start, to exercise reactive play
    #[arg(long, default_value = "0")]
    bomb_marks: usize,
}

/// Per-archetype tallies across all encounters.
#[derive(Default, Clone)]
struct SweepResult {
    games: usize,
    turns: usize,
    attacks_struck: usize,
    gold_looted: usize,
    traps_hit: usize,
    clues_opened: usize,
    blanks_opened: usize,
}

impl SweepResult {
    fn merge(mut self, other: &SweepResult) -> SweepResult {
        self.games += other.games;
        self.turns += other.turns;
        self.attacks_struck += other.attacks_struck;
        self.gold_looted += other.gold_looted;
        self.traps_hit += other.traps_hit;
        self.clues_opened += other.clues_opened;
        self.blanks_opened += other.blanks_opened;
        self
    }

    fn per_game(&self, n: usize) -> f64 {
        n as f64 / self.games.max(1) as f64
    }

    fn summary_line(&self, name: &str) -> String {
        format!(
            "  {:>24}: {:.2} attacks  {:.2} gold  {:.2} traps  {:.2} clues  {:.2} blanks  ({:.1} turns/game)",
            name,
            self.per_game(self.attacks_struck),
            self.per_game(self.gold_looted),
            self.per_game(self.traps_hit),
            self.per_game(self.clues_opened),
            self.per_game(self.blanks_opened),
            self.per_game(self.turns),
        )
    }
}

/// One encounter: generate a board, let the brain reveal cells until the
/// turn budget or the board runs out, tally what it opened.
fn run_encounter(cli: &Cli, name: &str, profile: &ArchetypeProfile, seed: u64) -> SweepResult {
    let layout = BoardLayout {
        attacks: cli.attacks,
        gold: cli.gold,
        traps: cli.traps,
    };
    let mut board_rng = StdRng::seed_from_u64(seed);
    let mut board = Board::generate(cli.rows, cli.cols, &layout, &mut board_rng);

    if cli.bomb_marks > 0 {
        let mut coords: Vec<_> = board.coords().collect();
        coords.shuffle(&mut board_rng);
        for &c in coords.iter().take(cli.bomb_marks) {
            board.set_mark(c, Some(Mark::BombSuspect));
        }
    }

    let mut brain = EnemyBrain::with_seed(resolve_ai_tag(&profile.ai), seed ^ 0x9e37_79b9_7f4a_7c15);
    let enemy = profile.enemy_state(name);
    let player = PlayerState::default();

    let mut result = SweepResult {
        games: 1,
        ..SweepResult::default()
    };
    for _ in 0..cli.max_turns {
        if board.hidden_count() == 0 {
            break;
        }
        let decision = brain.decide_move_sync(&board, &enemy, &player);
        match board.get(decision.target).kind {
            CellKind::Attack => result.attacks_struck += 1,
            CellKind::Gold => result.gold_looted += 1,
            CellKind::Trap => result.traps_hit += 1,
            CellKind::Clue => result.clues_opened += 1,
            CellKind::Empty => result.blanks_opened += 1,
        }
        board.reveal(decision.target);
        result.turns += 1;
    }
    result
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let roster = load_default_archetypes();
    let mut entries: Vec<(String, ArchetypeProfile)> = roster.archetypes.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    if let Some(list) = &cli.policies {
        let wanted: Vec<&str> = list.split(',').map(|t| t.trim()).collect();
        entries.retain(|(_, p)| wanted.contains(&p.ai.as_str()));
    }
    if entries.is_empty() {
        eprintln!("no archetypes match the requested policies");
        std::process::exit(1);
    }

    eprintln!(
        "Arena: {} games/archetype, {}x{} boards, seed={}",
        cli.games, cli.rows, cli.cols, cli.seed
    );

    let mut lines = vec![format!("Roster sweep ({} games each)", cli.games)];
    lines.push("=".repeat(96));
    for (name, profile) in &entries {
        let total = (0..cli.games)
            .into_par_iter()
            .map(|i| run_encounter(&cli, name, profile, cli.seed + i as u64))
            .reduce(SweepResult::default, |a, b| a.merge(&b));
        lines.push(total.summary_line(&format!("{} [{}]", name, profile.ai)));
    }
    println!("{}", lines.join("\n"));
}
