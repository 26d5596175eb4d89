//! Optimization result.

use crate::candidate::Candidate;
use crate::optimizer::{LineupTotals, SlateConfig};
use crate::scoring;
use std::fmt;

/// One lineup slot: the chosen candidate and its individual score under the
/// configuration the search ran with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineupEntry {
    /// The chosen candidate.
    pub candidate: Candidate,

    /// The candidate's score under the run's configuration.
    pub score: f64,
}

/// The optimal feasible lineup with its totals.
///
/// Produced once per [`crate::optimizer::Optimizer`] run and immutable
/// thereafter. For a completed (non-truncated) run, `total_score` is the
/// maximum over every feasible lineup of the configured size, not merely a
/// feasible one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    /// Chosen lineup, in pool order.
    pub lineup: Vec<LineupEntry>,

    /// Sum of the lineup's salaries. Never exceeds the configured cap.
    pub total_salary: f64,

    /// Sum of the lineup's scores.
    pub total_score: f64,

    /// Number of subsets evaluated during the search.
    pub subsets_examined: usize,

    /// Whether the search was cancelled before examining every subset.
    ///
    /// A truncated prediction is the best lineup seen so far, not a proven
    /// optimum.
    pub truncated: bool,
}

impl Prediction {
    /// Packages a winning subset and its totals into an immutable result.
    ///
    /// `picks` are ascending indices into `pool`; each member's individual
    /// score is fixed here, under the configuration the search ran with, so
    /// the rendered report cannot drift from the totals.
    pub(crate) fn aggregate(
        pool: &[Candidate],
        picks: &[usize],
        totals: LineupTotals,
        config: &SlateConfig,
        subsets_examined: usize,
        truncated: bool,
    ) -> Self {
        let lineup = picks
            .iter()
            .map(|&i| {
                let candidate = pool[i].clone();
                let score =
                    scoring::score(&candidate, config.differential_weight, config.field_size);
                LineupEntry { candidate, score }
            })
            .collect();
        Self {
            lineup,
            total_salary: totals.salary,
            total_score: totals.score,
            subsets_examined,
            truncated,
        }
    }

    /// Names of the chosen candidates, in pool order.
    pub fn names(&self) -> Vec<&str> {
        self.lineup
            .iter()
            .map(|entry| entry.candidate.name.as_str())
            .collect()
    }
}

impl fmt::Display for Prediction {
    /// Renders the lineup report: a totals header, then one line per member
    /// sorted by descending individual score (stable, so equal scores keep
    /// pool order).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Prediction (Total Salary: ${}, Combined Score: {:.2})",
            self.total_salary, self.total_score
        )?;

        let mut by_score: Vec<&LineupEntry> = self.lineup.iter().collect();
        by_score.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        for entry in by_score {
            let c = &entry.candidate;
            writeln!(
                f,
                "{} - Start: P{}, Salary: ${}, Avg PPG: {:.2}, Score: {:.2}",
                c.name, c.start_pos, c.salary, c.avg_points, entry.score
            )?;
        }
        Ok(())
    }
}
