//! Optimal lineup selection under a salary cap.
//!
//! Enumerates every lineup-sized subset of the candidate pool, discards
//! those over the cap, and keeps the highest-scoring survivor — the first
//! one in enumeration order when scores tie. Brute force is the contract
//! at this scale: with pools in the tens of candidates C(N, 6) stays
//! tractable, and the exhaustive scan doubles as the optimality baseline
//! any faster search (branch-and-bound, knapsack relaxation) would be
//! validated against.

mod config;
mod evaluator;
mod runner;

pub use config::SlateConfig;
pub use evaluator::{evaluate, LineupTotals};
pub use runner::{OptimizeError, Optimizer};
