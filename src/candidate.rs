//! Candidate data model.

/// A selectable entry in the candidate pool.
///
/// Candidates are constructed once at ingestion (e.g., from a slate file)
/// and never mutated afterwards. Scores are not stored here — they depend
/// on the run configuration and are computed on demand by
/// [`crate::scoring::score`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Display name, also the candidate's identity within a pool.
    pub name: String,

    /// Roster salary. Non-negative; zero-salary candidates are valid.
    pub salary: f64,

    /// Average fantasy points per game (base performance).
    pub avg_points: f64,

    /// Starting position, 1 = pole (best).
    pub start_pos: u32,
}

impl Candidate {
    /// Creates a candidate record.
    pub fn new(name: impl Into<String>, salary: f64, avg_points: f64, start_pos: u32) -> Self {
        Self {
            name: name.into(),
            salary,
            avg_points,
            start_pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let c = Candidate::new("Kyle Larson", 10_400.0, 45.1, 2);
        assert_eq!(c.name, "Kyle Larson");
        assert!((c.salary - 10_400.0).abs() < 1e-10);
        assert!((c.avg_points - 45.1).abs() < 1e-10);
        assert_eq!(c.start_pos, 2);
    }
}
