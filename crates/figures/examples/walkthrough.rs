//! Figure and grid walkthroughs with default parameters.
//!
//! Usage:
//!   cargo run -p figures --example walkthrough

use std::io::{self, Write};

use figures::demo::{run_figures, run_grid, DemoCfg};
use figures::grid::Grid;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_grid(&Grid::sample(), &mut out).expect("write grid total");
    run_figures(&DemoCfg::default(), &mut out).expect("default walkthrough");
    out.flush().expect("flush stdout");
}
