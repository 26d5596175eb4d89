//! Lineup evaluation.

use super::config::SlateConfig;
use crate::candidate::Candidate;
use crate::scoring;

/// Total salary and score of one lineup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineupTotals {
    /// Sum of member salaries.
    pub salary: f64,

    /// Sum of member scores under the active configuration.
    pub score: f64,
}

/// Computes the totals of the lineup formed by `picks` (indices into
/// `pool`).
///
/// Pure and O(k). Members are summed in pick order; the serial and parallel
/// search paths both pass picks in ascending index order, so a given subset
/// always produces bit-identical totals.
pub fn evaluate(pool: &[Candidate], picks: &[usize], config: &SlateConfig) -> LineupTotals {
    let mut salary = 0.0;
    let mut score = 0.0;
    for &i in picks {
        let candidate = &pool[i];
        salary += candidate.salary;
        score += scoring::score(candidate, config.differential_weight, config.field_size);
    }
    LineupTotals { salary, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Candidate> {
        vec![
            Candidate::new("a", 8_000.0, 30.0, 1),
            Candidate::new("b", 7_500.0, 25.0, 5),
            Candidate::new("c", 6_000.0, 20.0, 10),
        ]
    }

    #[test]
    fn test_totals_sum_members() {
        let config = SlateConfig::default().with_field_size(40);
        let totals = evaluate(&pool(), &[0, 2], &config);

        assert!((totals.salary - 14_000.0).abs() < 1e-10);
        // a: 30 + (40 - 1) = 69, c: 20 + (40 - 10) = 50
        assert!((totals.score - 119.0).abs() < 1e-10);
    }

    #[test]
    fn test_weight_scales_score_not_salary() {
        let flat = SlateConfig::default().with_differential_weight(0.0);
        let heavy = SlateConfig::default().with_differential_weight(2.0);

        let totals_flat = evaluate(&pool(), &[0, 1, 2], &flat);
        let totals_heavy = evaluate(&pool(), &[0, 1, 2], &heavy);

        assert!((totals_flat.salary - totals_heavy.salary).abs() < 1e-10);
        assert!((totals_flat.score - 75.0).abs() < 1e-10);
        assert!((totals_heavy.score - (75.0 + 2.0 * (39.0 + 35.0 + 30.0))).abs() < 1e-10);
    }

    #[test]
    fn test_empty_picks() {
        let totals = evaluate(&pool(), &[], &SlateConfig::default());
        assert_eq!(totals, LineupTotals { salary: 0.0, score: 0.0 });
    }
}
