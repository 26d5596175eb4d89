//! Slate configuration.

/// Configuration for one optimization run over a slate.
///
/// Immutable once built; every run takes the pool and configuration as
/// plain arguments, so runs are independent and repeatable.
///
/// # Defaults
///
/// ```
/// use lineup_optimizer::optimizer::SlateConfig;
///
/// let config = SlateConfig::default();
/// assert_eq!(config.lineup_size, 6);
/// assert_eq!(config.salary_cap, 50_000.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use lineup_optimizer::optimizer::SlateConfig;
///
/// let config = SlateConfig::default()
///     .with_salary_cap(48_000.0)
///     .with_differential_weight(1.6)
///     .with_field_size(38);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlateConfig {
    /// Number of candidates in a lineup.
    pub lineup_size: usize,

    /// Maximum total salary a lineup may spend.
    pub salary_cap: f64,

    /// Weight applied to position-differential upside.
    ///
    /// Venue-dependent; resolve it with [`crate::venue::VenueWeights`].
    /// May be negative.
    pub differential_weight: f64,

    /// Notional number of starters, used when computing potential gain.
    pub field_size: u32,

    /// Whether to partition the search across threads using rayon.
    ///
    /// Requires the `parallel` cargo feature; without it the flag is
    /// ignored and the scan runs serially. Both paths return bit-identical
    /// results.
    pub parallel: bool,
}

impl Default for SlateConfig {
    fn default() -> Self {
        Self {
            lineup_size: 6,
            salary_cap: 50_000.0,
            differential_weight: 1.0,
            field_size: 40,
            parallel: false,
        }
    }
}

impl SlateConfig {
    pub fn with_lineup_size(mut self, n: usize) -> Self {
        self.lineup_size = n;
        self
    }

    pub fn with_salary_cap(mut self, cap: f64) -> Self {
        self.salary_cap = cap;
        self
    }

    pub fn with_differential_weight(mut self, weight: f64) -> Self {
        self.differential_weight = weight;
        self
    }

    pub fn with_field_size(mut self, n: u32) -> Self {
        self.field_size = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.lineup_size == 0 {
            return Err("lineup_size must be positive".into());
        }
        if self.salary_cap.is_nan() || self.salary_cap < 0.0 {
            return Err(format!(
                "salary_cap must be non-negative, got {}",
                self.salary_cap
            ));
        }
        if self.field_size == 0 {
            return Err("field_size must be positive".into());
        }
        Ok(())
    }
}
