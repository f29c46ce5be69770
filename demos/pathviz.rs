//! Terminal pathfinding visualizer.
//!
//! Run: cargo run --bin pathviz -- --maze --algorithm bfs

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use pathviz_demos::{Args, Headless, Report, Terminal, run_session};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let report: Report = if args.headless {
        run_session(&args, &mut Headless)?
    } else {
        let mut term = Terminal::new().with_delay(Duration::from_millis(args.delay_ms));
        run_session(&args, &mut term)?
    };

    println!("{}", report.grid);
    println!("{}", report.summary());
    Ok(())
}
