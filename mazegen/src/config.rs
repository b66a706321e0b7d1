use serde::{Deserialize, Serialize};

use crate::error::{LimitsError, PreconditionError};

/// Smallest width or height that makes a maze with a distinct start and target.
pub const MIN_DIM: i32 = 2;
/// Largest width or height. Keeps the edge count of the binary header within `i32`.
pub const MAX_DIM: i32 = 5000;

/// Accepted maze dimensions, used both for generation requests and for loaded files.
///
/// Always a non-empty range inside `MIN_DIM..=MAX_DIM`, both when built with [`Limits::new`]
/// and when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct Limits {
    min_dim: i32,
    max_dim: i32,
}

impl Limits {
    pub fn new(min_dim: i32, max_dim: i32) -> Result<Self, LimitsError> {
        if min_dim < MIN_DIM {
            return Err(LimitsError::MinTooSmall(min_dim));
        }
        if max_dim > MAX_DIM {
            return Err(LimitsError::MaxTooLarge(max_dim));
        }
        if min_dim > max_dim {
            return Err(LimitsError::Empty { min_dim, max_dim });
        }

        Ok(Self { min_dim, max_dim })
    }

    pub fn min_dim(&self) -> i32 {
        self.min_dim
    }

    pub fn max_dim(&self) -> i32 {
        self.max_dim
    }

    pub fn contains(&self, dim: i32) -> bool {
        (self.min_dim..=self.max_dim).contains(&dim)
    }

    pub fn validate(&self, width: i32, height: i32) -> Result<(), PreconditionError> {
        if self.contains(width) && self.contains(height) {
            Ok(())
        } else {
            Err(PreconditionError::InvalidDimensions {
                width,
                height,
                min: self.min_dim,
                max: self.max_dim,
            })
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_dim: MIN_DIM,
            max_dim: MAX_DIM,
        }
    }
}

/// Unchecked form read from config files, missing keys take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawLimits {
    min_dim: i32,
    max_dim: i32,
}

impl Default for RawLimits {
    fn default() -> Self {
        Self {
            min_dim: MIN_DIM,
            max_dim: MAX_DIM,
        }
    }
}

impl TryFrom<RawLimits> for Limits {
    type Error = LimitsError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        Limits::new(raw.min_dim, raw.max_dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_inclusive() {
        let limits = Limits::default();
        assert!(limits.validate(2, 5000).is_ok());
        assert!(limits.validate(1, 10).is_err());
        assert!(limits.validate(10, 5001).is_err());
        assert!(limits.validate(0, 0).is_err());
    }

    #[test]
    fn error_carries_the_bounds() {
        let limits = Limits::new(3, 8).unwrap();
        assert_eq!(
            limits.validate(9, 4),
            Err(PreconditionError::InvalidDimensions {
                width: 9,
                height: 4,
                min: 3,
                max: 8
            })
        );
    }

    #[test]
    fn bounds_must_stay_in_the_supported_range() {
        assert_eq!(Limits::new(-5, 5), Err(LimitsError::MinTooSmall(-5)));
        assert_eq!(Limits::new(0, 5), Err(LimitsError::MinTooSmall(0)));
        assert_eq!(Limits::new(2, 40000), Err(LimitsError::MaxTooLarge(40000)));
        assert_eq!(
            Limits::new(9, 4),
            Err(LimitsError::Empty {
                min_dim: 9,
                max_dim: 4
            })
        );
        assert_eq!(Limits::new(MIN_DIM, MAX_DIM), Ok(Limits::default()));
        assert!(Limits::new(4, 4).is_ok());
    }

    #[test]
    fn no_limits_admit_a_size_below_two() {
        for min in [MIN_DIM, 3, 10] {
            let limits = Limits::new(min, MAX_DIM).unwrap();
            for dim in [-3, 0, 1] {
                assert!(limits.validate(dim, 4).is_err());
                assert!(limits.validate(4, dim).is_err());
            }
        }
    }
}
