use std::fmt;

use crate::params;

/// Result type for canopy-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised when constructing projection parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tree count below the allowed minimum
    TreesOutOfRange(u32),

    /// Absorption rate is zero, negative, or not finite
    RateOutOfRange(f64),

    /// Projection horizon outside the supported window
    YearsOutOfRange(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TreesOutOfRange(trees) => write!(
                f,
                "number of trees must be at least {}, got {}",
                params::MIN_TREES,
                trees
            ),
            Error::RateOutOfRange(rate) => write!(
                f,
                "CO2 absorbed per tree per year must be a positive number of kilograms, got {}",
                rate
            ),
            Error::YearsOutOfRange(years) => write!(
                f,
                "projection years must be between {} and {}, got {}",
                params::MIN_YEARS,
                params::MAX_YEARS,
                years
            ),
        }
    }
}

impl std::error::Error for Error {}
