//! Venue-specific differential weight resolution.
//!
//! Passing difficulty and position volatility vary by venue, so the weight
//! given to position-differential upside does too. The table is supplied by
//! the caller (estimated, scraped, or configured — this crate ships no venue
//! constants); unlisted venues fall back to an explicit default.

use std::collections::HashMap;

/// Caller-supplied venue → differential weight mapping with a default for
/// unlisted venues.
///
/// # Examples
///
/// ```
/// use lineup_optimizer::venue::VenueWeights;
///
/// let weights = VenueWeights::new(1.0)
///     .with_weight("Martinsville Speedway", 2.0)
///     .with_weight("Daytona International Speedway", 0.3);
///
/// assert_eq!(weights.resolve("Martinsville Speedway"), 2.0);
/// assert_eq!(weights.resolve("Circuit of the Americas"), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueWeights {
    weights: HashMap<String, f64>,
    default: f64,
}

impl VenueWeights {
    /// Creates an empty table with the given default weight.
    pub fn new(default: f64) -> Self {
        Self {
            weights: HashMap::new(),
            default,
        }
    }

    /// Adds or replaces a venue's weight.
    pub fn with_weight(mut self, venue: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(venue.into(), weight);
        self
    }

    /// Resolves a venue name to its weight, falling back to the default.
    pub fn resolve(&self, venue: &str) -> f64 {
        self.weights.get(venue).copied().unwrap_or(self.default)
    }

    /// The weight used for unlisted venues.
    pub fn default_weight(&self) -> f64 {
        self.default
    }

    /// Number of explicitly listed venues.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no venue is explicitly listed.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for VenueWeights {
    /// An empty table resolving every venue to 1.0.
    fn default() -> Self {
        Self::new(1.0)
    }
}
