//! CLI for maze carving

use clap::Parser;
use maze_carver::path_carver::PathCarver;

/// Carve a thin-corridor maze and print the grid
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated grid height
    #[arg(long, default_value_t = 40)]
    height: usize,

    /// Generated grid width
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print emoji squares instead of digit rows
    #[arg(long)]
    emoji: bool,
}

/// Carve the grid, print to stdout
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut carver = PathCarver::new(args.seed);
    let grid = carver.carve_path(args.height, args.width)?;

    if args.emoji {
        println!("{}", grid.render_emojis());
    } else {
        println!("{}", grid.render_digits());
    }
    Ok(())
}
