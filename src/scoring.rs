//! Candidate scoring.
//!
//! A candidate's score combines raw average output with the upside of
//! gaining positions from its starting spot. How much that upside counts
//! is venue-dependent: short tracks with heavy passing reward a deep
//! starting spot far more than a superspeedway does. The caller resolves
//! the venue to a single `differential_weight` scalar (see
//! [`crate::venue::VenueWeights`]) and the same pool re-ranks accordingly.

use crate::candidate::Candidate;

/// Scores a candidate under the given weight and field size.
///
/// `score = avg_points + differential_weight * (field_size - start_pos)`
///
/// Pure and total: any finite inputs produce a defined score. A start
/// position beyond `field_size` simply yields a negative gain term.
pub fn score(candidate: &Candidate, differential_weight: f64, field_size: u32) -> f64 {
    let potential_gain = f64::from(field_size) - f64::from(candidate.start_pos);
    candidate.avg_points + differential_weight * potential_gain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pole_sitter_gains_most() {
        let pole = Candidate::new("pole", 9000.0, 30.0, 1);
        let backmarker = Candidate::new("back", 9000.0, 30.0, 40);

        assert!(score(&pole, 1.0, 40) > score(&backmarker, 1.0, 40));
        assert!((score(&pole, 1.0, 40) - 69.0).abs() < 1e-10);
        assert!((score(&backmarker, 1.0, 40) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_weight_is_raw_output() {
        let c = Candidate::new("c", 8000.0, 27.5, 12);
        assert!((score(&c, 0.0, 40) - 27.5).abs() < 1e-10);
    }

    #[test]
    fn test_weight_reranks_pool() {
        // High average starting deep vs. modest average starting up front:
        // a passing-friendly venue (high weight) flips the ranking.
        let deep = Candidate::new("deep", 9000.0, 45.0, 35);
        let front = Candidate::new("front", 9000.0, 30.0, 3);

        assert!(score(&deep, 0.3, 40) > score(&front, 0.3, 40));
        assert!(score(&front, 2.0, 40) > score(&deep, 2.0, 40));
    }

    #[test]
    fn test_start_beyond_field_size_is_negative_gain() {
        let c = Candidate::new("c", 7000.0, 10.0, 43);
        assert!((score(&c, 1.0, 40) - 7.0).abs() < 1e-10);
    }
}
