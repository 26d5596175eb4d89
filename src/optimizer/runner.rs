//! Exhaustive search execution loop.

use super::config::SlateConfig;
use super::evaluator::{evaluate, LineupTotals};
use crate::candidate::Candidate;
use crate::combine::Combinations;
use crate::prediction::Prediction;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Why a run produced no lineup.
///
/// All variants are recoverable by the caller; the runner never panics on
/// bad input. An error is distinct from a legitimately low-scoring
/// prediction: "no data" and "nothing affordable" are reported as such.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptimizeError {
    /// The configuration failed validation; the search never started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The pool cannot fill a lineup at all.
    #[error("pool has {available} candidates, a lineup needs {required}")]
    InsufficientCandidates { available: usize, required: usize },

    /// Lineups exist, but every one of them busts the salary cap.
    #[error("no lineup of {lineup_size} fits under the salary cap")]
    NoFeasibleLineup { lineup_size: usize },

    /// Cancelled before any feasible lineup had been seen, so there is no
    /// best-so-far to return and no completed scan to call infeasible.
    #[error("search cancelled before a feasible lineup was found")]
    SearchTruncated,
}

/// Running state of one scan: the incumbent, subsets examined, and whether
/// cancellation cut the scan short.
struct Scan {
    best: Option<(Vec<usize>, LineupTotals)>,
    examined: usize,
    truncated: bool,
}

impl Scan {
    fn empty() -> Self {
        Self {
            best: None,
            examined: 0,
            truncated: false,
        }
    }
}

/// Executes the exhaustive lineup search.
///
/// # Usage
///
/// ```
/// use lineup_optimizer::candidate::Candidate;
/// use lineup_optimizer::optimizer::{Optimizer, SlateConfig};
///
/// let pool = vec![
///     Candidate::new("a", 9_000.0, 40.0, 1),
///     Candidate::new("b", 8_000.0, 35.0, 4),
///     Candidate::new("c", 7_000.0, 30.0, 9),
/// ];
/// let config = SlateConfig::default()
///     .with_lineup_size(2)
///     .with_salary_cap(16_000.0);
///
/// let prediction = Optimizer::run(&pool, &config).unwrap();
/// assert_eq!(prediction.lineup.len(), 2);
/// ```
pub struct Optimizer;

impl Optimizer {
    /// Runs the search and returns the optimal feasible lineup.
    ///
    /// Scans every size-`lineup_size` subset of `pool` in lexicographic
    /// order, skips subsets over the salary cap, and keeps the first subset
    /// to reach the running maximum score. The strictly-greater update is
    /// the tie-break contract: among equal maxima, the subset occurring
    /// earliest in enumeration order wins, on every run.
    pub fn run(pool: &[Candidate], config: &SlateConfig) -> Result<Prediction, OptimizeError> {
        Self::run_with_cancel(pool, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked between subset evaluations. When it fires after
    /// a feasible lineup has been seen, the best-so-far is returned with
    /// [`Prediction::truncated`] set — a truncated prediction is never
    /// passed off as a proven optimum. When it fires before any feasible
    /// subset, the run reports [`OptimizeError::SearchTruncated`].
    pub fn run_with_cancel(
        pool: &[Candidate],
        config: &SlateConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Prediction, OptimizeError> {
        config
            .validate()
            .map_err(OptimizeError::InvalidConfiguration)?;

        if pool.len() < config.lineup_size {
            return Err(OptimizeError::InsufficientCandidates {
                available: pool.len(),
                required: config.lineup_size,
            });
        }

        debug!(
            candidates = pool.len(),
            lineup_size = config.lineup_size,
            salary_cap = config.salary_cap,
            "starting exhaustive lineup search"
        );

        let cancel = cancel.as_deref();

        #[cfg(feature = "parallel")]
        let scan = if config.parallel {
            scan_parallel(pool, config, cancel)
        } else {
            scan_serial(pool, config, cancel)
        };
        #[cfg(not(feature = "parallel"))]
        let scan = scan_serial(pool, config, cancel);

        match scan.best {
            Some((picks, totals)) => {
                debug!(
                    total_score = totals.score,
                    subsets_examined = scan.examined,
                    truncated = scan.truncated,
                    "lineup search finished"
                );
                Ok(Prediction::aggregate(
                    pool,
                    &picks,
                    totals,
                    config,
                    scan.examined,
                    scan.truncated,
                ))
            }
            None if scan.truncated => Err(OptimizeError::SearchTruncated),
            None => Err(OptimizeError::NoFeasibleLineup {
                lineup_size: config.lineup_size,
            }),
        }
    }
}

fn cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Linear scan over the full enumeration.
fn scan_serial(pool: &[Candidate], config: &SlateConfig, cancel: Option<&AtomicBool>) -> Scan {
    let mut scan = Scan::empty();

    for picks in Combinations::new(pool.len(), config.lineup_size) {
        if cancelled(cancel) {
            scan.truncated = true;
            break;
        }
        scan.examined += 1;

        let totals = evaluate(pool, &picks, config);
        if totals.salary > config.salary_cap {
            continue;
        }
        // Strictly greater: the first subset to reach a maximum keeps it.
        let improves = scan
            .best
            .as_ref()
            .is_none_or(|(_, best)| totals.score > best.score);
        if improves {
            scan.best = Some((picks, totals));
        }
    }
    scan
}

/// Partitioned scan: one rayon task per leading pool index.
///
/// Subsets whose smallest member is `first` are exactly `{first}` plus a
/// size-`k - 1` combination of the indices above it, so partitions cover
/// the enumeration without overlap and each partition inherits the global
/// lexicographic order. The reduction keeps the maximum under (score,
/// then earlier index vector), the same total order the serial scan
/// applies, which makes the two paths bit-identical.
#[cfg(feature = "parallel")]
fn scan_parallel(pool: &[Candidate], config: &SlateConfig, cancel: Option<&AtomicBool>) -> Scan {
    let n = pool.len();
    let k = config.lineup_size;

    (0..=n - k)
        .into_par_iter()
        .map(|first| {
            let mut scan = Scan::empty();
            let mut picks = Vec::with_capacity(k);

            for rest in Combinations::new(n - first - 1, k - 1) {
                if cancelled(cancel) {
                    scan.truncated = true;
                    break;
                }
                scan.examined += 1;

                picks.clear();
                picks.push(first);
                picks.extend(rest.iter().map(|&r| first + 1 + r));

                let totals = evaluate(pool, &picks, config);
                if totals.salary > config.salary_cap {
                    continue;
                }
                let improves = scan
                    .best
                    .as_ref()
                    .is_none_or(|(_, best)| totals.score > best.score);
                if improves {
                    scan.best = Some((picks.clone(), totals));
                }
            }
            scan
        })
        .reduce(Scan::empty, merge)
}

/// Combines two partition scans, preserving the serial tie-break.
#[cfg(feature = "parallel")]
fn merge(a: Scan, b: Scan) -> Scan {
    let best = match (a.best, b.best) {
        (Some(x), Some(y)) => {
            if y.1.score > x.1.score {
                Some(y)
            } else if x.1.score > y.1.score {
                Some(x)
            } else if x.0 <= y.0 {
                // Equal scores: the lexicographically earlier subset wins.
                Some(x)
            } else {
                Some(y)
            }
        }
        (x, None) => x,
        (None, y) => y,
    };
    Scan {
        best,
        examined: a.examined + b.examined,
        truncated: a.truncated || b.truncated,
    }
}
