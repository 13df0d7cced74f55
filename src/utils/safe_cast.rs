//! Checked numeric conversions for pixel coordinates and matrix indices.

use crate::{Error, Result};

/// Convert a usize index to i32 with overflow checking
///
/// # Errors
///
/// Returns an error if the value exceeds `i32::MAX`
pub fn usize_to_i32(value: usize) -> Result<i32> {
    value
        .try_into()
        .map_err(|_| Error::InvalidInput(format!("Index {value} does not fit in i32")))
}

/// Convert an f64 coordinate to i32, rejecting non-finite values and
/// magnitudes outside the i32 range
///
/// # Errors
///
/// Returns an error if the value is not finite or outside the i32 range
#[allow(clippy::cast_possible_truncation)] // Truncation after bounds check is safe
pub fn f64_to_i32(value: f64) -> Result<i32> {
    if value.is_finite() && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value) {
        Ok(value as i32)
    } else {
        Err(Error::InvalidInput(format!(
            "Coordinate {value} cannot be safely converted to i32"
        )))
    }
}

/// Convert an f32 coordinate to i32
///
/// # Errors
///
/// Returns an error if the value is not finite or outside the i32 range
pub fn f32_to_i32(value: f32) -> Result<i32> {
    f64_to_i32(f64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_usize_to_i32() {
        assert_eq!(usize_to_i32(0).unwrap(), 0);
        assert_eq!(usize_to_i32(42).unwrap(), 42);
        assert_eq!(usize_to_i32(i32::MAX as usize).unwrap(), i32::MAX);

        if std::mem::size_of::<usize>() > 4 {
            assert!(usize_to_i32(i32::MAX as usize + 1).is_err());
        }
    }

    #[test]
    fn test_f64_to_i32() {
        assert_eq!(f64_to_i32(42.0).unwrap(), 42);
        assert_eq!(f64_to_i32(-42.9).unwrap(), -42);
        assert_eq!(f64_to_i32(2_147_483_647.0).unwrap(), i32::MAX);
        assert_eq!(f64_to_i32(-2_147_483_648.0).unwrap(), i32::MIN);

        assert!(f64_to_i32(2_147_483_648.0).is_err());
        assert!(f64_to_i32(f64::INFINITY).is_err());
        assert!(f64_to_i32(f64::NEG_INFINITY).is_err());
        assert!(f64_to_i32(f64::NAN).is_err());
    }

    #[test]
    fn test_f32_to_i32() {
        assert_eq!(f32_to_i32(42.0).unwrap(), 42);
        assert_eq!(f32_to_i32(-0.9).unwrap(), 0);

        assert!(f32_to_i32(f32::NAN).is_err());
        assert!(f32_to_i32(f32::INFINITY).is_err());
        assert!(f32_to_i32(i32::MAX as f32 * 2.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_f64_roundtrip(value in i32::MIN..=i32::MAX) {
            prop_assert_eq!(f64_to_i32(f64::from(value)).unwrap(), value);
        }

        #[test]
        fn prop_usize_within_bounds(value in 0..=i32::MAX as usize) {
            prop_assert_eq!(usize_to_i32(value).unwrap() as usize, value);
        }
    }
}
