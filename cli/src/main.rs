use std::io::Read as _;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use swooper_core::{Coord, GameState, HunterMode};

use crate::preset::Preset;

mod preset;
mod render;
mod script;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HunterArg {
    Off,
    Hunter,
    Cavehunter,
}

impl From<HunterArg> for HunterMode {
    fn from(other: HunterArg) -> Self {
        match other {
            HunterArg::Off => HunterMode::Disabled,
            HunterArg::Hunter => HunterMode::Hunter,
            HunterArg::Cavehunter => HunterMode::CaveHunter,
        }
    }
}

/// Headless Swooper driver: plays a script of moves against a generated board.
///
/// Script tokens: u/d/l/r move, x reveal, f flag, t one second passes, h hunter moves.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Start from a menu preset
    #[arg(short, long, value_enum, default_value_t = Preset::Easy)]
    preset: Preset,

    /// Override board width
    #[arg(long)]
    cols: Option<Coord>,

    /// Override board height
    #[arg(long)]
    rows: Option<Coord>,

    /// Override per-cell mine probability
    #[arg(long)]
    mine_chance: Option<f64>,

    /// Override vision radius
    #[arg(long, conflicts_with = "no_fog")]
    vision: Option<Coord>,

    /// Disable fog of war
    #[arg(long)]
    no_fog: bool,

    /// Override the hunter mode
    #[arg(long, value_enum)]
    hunter: Option<HunterArg>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Actions to play, read from stdin when absent
    #[arg(long)]
    script: Option<String>,

    /// Print the final snapshot as JSON instead of a board
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<swooper_core::GameConfig> {
        let mut values = self.preset.values();
        if let Some(cols) = self.cols {
            values.cols = cols;
        }
        if let Some(rows) = self.rows {
            values.rows = rows;
        }
        if let Some(mine_chance) = self.mine_chance {
            values.mine_chance = mine_chance;
        }
        if self.no_fog {
            values.vision_radius = None;
        } else if let Some(vision) = self.vision {
            values.vision_radius = Some(vision);
        }
        if let Some(hunter) = self.hunter {
            values.hunter = hunter.into();
        }
        values
            .config()
            .with_context(|| format!("Invalid board settings {values:?}"))
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new(config, &mut rng).context("Could not start game")?;

    let script = match &args.script {
        Some(script) => script.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read script from stdin")?;
            buf
        }
    };
    let actions = script::parse(&script)?;
    let applied = script::run(&mut game, &actions)?;
    log::debug!("Applied {applied} of {} actions", actions.len());

    let snapshot = game.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render::board(&snapshot));
        println!("{}", render::status_message(snapshot.status));
    }
    Ok(())
}
