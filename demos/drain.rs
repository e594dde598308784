//! Marks a batch of random IDs and drains them back in ascending order.
//!
//! Run with:
//! ```bash
//! cargo run --example drain -- --count 1000000 --spread 100000000
//! ```

use clap::Parser;
use id_tracker::tracker::IdTracker;
use id_tracker::types::{Id, NO_MORE_IDS};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(about = "Mark random IDs, then drain them in ascending order")]
struct Args {
    /// Number of IDs to mark.
    #[arg(long, default_value_t = 1_000_000)]
    count: usize,

    /// IDs are drawn uniformly from [0, spread).
    #[arg(long, default_value_t = 100_000_000)]
    spread: Id,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();
    println!("args = {:?}", args);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut tracker = IdTracker::new();

    let time_mark = std::time::Instant::now();
    for _ in 0..args.count {
        tracker.mark(rng.gen_range(0..args.spread));
    }
    println!(
        "marked {} ids across {} blocks in {:?}",
        args.count,
        tracker.block_count(),
        time_mark.elapsed()
    );

    let time_drain = std::time::Instant::now();
    let mut popped = 0usize;
    let mut last = None::<Id>;
    loop {
        let id = tracker.pop_mark();
        if id == NO_MORE_IDS {
            break;
        }
        if let Some(last) = last {
            assert!(id > last, "pop order violated: {} after {}", id, last);
        }
        last = Some(id);
        popped += 1;
    }
    println!(
        "drained {} distinct ids in ascending order in {:?}",
        popped,
        time_drain.elapsed()
    );
    assert!(tracker.is_empty());

    Ok(())
}
