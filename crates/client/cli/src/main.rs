//! Terminal client entry point.
//!
//! The engine is pure and event-driven; this binary supplies its two
//! injected dependencies — a seeded RNG and a stdin decision provider —
//! and renders the event stream as text.

mod input;
mod render;

use anyhow::Result;
use clap::Parser;

use abyss_content::GameContent;
use abyss_core::{GameConfig, PcgRng};
use abyss_runtime::{Campaign, RunOutcome};

#[derive(Parser, Debug)]
#[command(name = "abyss", about = "A text roguelike descent through ten cursed stages")]
struct Args {
    /// Seed for the run; a random one is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Name of the wanderer.
    #[arg(long, default_value = "the Wanderer")]
    name: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let content = GameContent::standard()?;
    let mut campaign = Campaign::new(&args.name, content, GameConfig::default());
    let mut provider = input::StdinProvider::new();
    let mut sink = render::TerminalSink;
    let mut rng = PcgRng::from_seed(seed);

    println!("...a faint consciousness stirs in the dark (seed {seed})");
    println!("You have been called. Move.\n");

    match campaign.run(&mut provider, &mut sink, &mut rng)? {
        RunOutcome::Cleared => {
            println!("\nYour path was written in blood, and nothing remains here.");
            println!("Thanks for playing :3");
        }
        RunOutcome::Slain { stage } => {
            println!(
                "\nAt depth {stage}, your soul became part of this land."
            );
        }
    }
    Ok(())
}
