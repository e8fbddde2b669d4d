//! Construction-time validation errors.

/// Errors raised when a grid component is built from invalid parameters.
///
/// Queries on a constructed grid never fail: out-of-range positions are
/// standardized or clamped instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The sphere radius was zero, negative, or not finite.
    #[error("grid radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    /// The number of vertices along a square side was not positive.
    #[error("vertices per square side must be positive, got {0}")]
    InvalidSide(i32),

    /// A fine resolution is not an exact multiple of a coarse one.
    #[error("fine side {fine} is not a multiple of coarse side {coarse}")]
    IncompatibleResolutions {
        /// Vertices per square side of the fine indexing.
        fine: i32,
        /// Vertices per square side of the coarse indexing.
        coarse: i32,
    },
}

/// Check the `(radius, side)` pair shared by every grid constructor.
pub(crate) fn validate(radius: f64, vertices_per_square_side: i32) -> Result<(), GridError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GridError::InvalidRadius(radius));
    }
    validate_side(vertices_per_square_side)
}

pub(crate) fn validate_side(vertices_per_square_side: i32) -> Result<(), GridError> {
    if vertices_per_square_side <= 0 {
        return Err(GridError::InvalidSide(vertices_per_square_side));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_parameters() {
        assert_eq!(validate(2.0, 40), Ok(()));
        assert_eq!(validate(1e-6, 1), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        assert_eq!(validate(0.0, 4), Err(GridError::InvalidRadius(0.0)));
        assert_eq!(validate(-1.0, 4), Err(GridError::InvalidRadius(-1.0)));
        assert!(matches!(
            validate(f64::NAN, 4),
            Err(GridError::InvalidRadius(_))
        ));
        assert!(matches!(
            validate(f64::INFINITY, 4),
            Err(GridError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_side() {
        assert_eq!(validate(1.0, 0), Err(GridError::InvalidSide(0)));
        assert_eq!(validate_side(-3), Err(GridError::InvalidSide(-3)));
    }

    #[test]
    fn test_error_messages() {
        let err = GridError::IncompatibleResolutions { fine: 40, coarse: 15 };
        assert_eq!(
            err.to_string(),
            "fine side 40 is not a multiple of coarse side 15"
        );
        assert_eq!(
            GridError::InvalidSide(0).to_string(),
            "vertices per square side must be positive, got 0"
        );
    }
}
