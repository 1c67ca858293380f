use num::BigRational;
use num::bigint::BigInt;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaneRectError {
    #[error("{axis} interval must be non-empty: {from} is not below {to}")]
    InvalidInterval {
        axis: Axis,
        from: BigRational,
        to: BigRational,
    },
}

/// A rectangle of the complex plane: `[from_x, to_x) x [from_y, to_y)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaneRect {
    from_x: BigRational,
    to_x: BigRational,
    from_y: BigRational,
    to_y: BigRational,
}

fn check_interval(axis: Axis, from: &BigRational, to: &BigRational) -> Result<(), PlaneRectError> {
    if from >= to {
        return Err(PlaneRectError::InvalidInterval {
            axis,
            from: from.clone(),
            to: to.clone(),
        });
    }

    Ok(())
}

fn two() -> BigRational {
    BigRational::from_integer(BigInt::from(2))
}

impl PlaneRect {
    pub fn new(
        from_x: BigRational,
        to_x: BigRational,
        from_y: BigRational,
        to_y: BigRational,
    ) -> Result<Self, PlaneRectError> {
        check_interval(Axis::X, &from_x, &to_x)?;
        check_interval(Axis::Y, &from_y, &to_y)?;

        Ok(Self {
            from_x,
            to_x,
            from_y,
            to_y,
        })
    }

    #[must_use]
    pub fn from_x(&self) -> &BigRational {
        &self.from_x
    }

    #[must_use]
    pub fn to_x(&self) -> &BigRational {
        &self.to_x
    }

    #[must_use]
    pub fn from_y(&self) -> &BigRational {
        &self.from_y
    }

    #[must_use]
    pub fn to_y(&self) -> &BigRational {
        &self.to_y
    }

    #[must_use]
    pub fn interval(&self, axis: Axis) -> (&BigRational, &BigRational) {
        match axis {
            Axis::X => (&self.from_x, &self.to_x),
            Axis::Y => (&self.from_y, &self.to_y),
        }
    }

    #[must_use]
    pub fn span(&self, axis: Axis) -> BigRational {
        let (from, to) = self.interval(axis);
        to - from
    }

    #[must_use]
    pub fn midpoint(&self, axis: Axis) -> BigRational {
        let (from, to) = self.interval(axis);
        (from + to) / two()
    }

    /// Shifts both bounds of each axis, leaving the spans untouched.
    #[must_use]
    pub fn translated(&self, dx: &BigRational, dy: &BigRational) -> Self {
        Self {
            from_x: &self.from_x + dx,
            to_x: &self.to_x + dx,
            from_y: &self.from_y + dy,
            to_y: &self.to_y + dy,
        }
    }

    /// Resizes each axis to the given span, keeping the old midpoint.
    pub fn rescaled(
        &self,
        span_x: &BigRational,
        span_y: &BigRational,
    ) -> Result<Self, PlaneRectError> {
        let shrink_x = (self.span(Axis::X) - span_x) / two();
        let shrink_y = (self.span(Axis::Y) - span_y) / two();

        Self::new(
            &self.from_x + &shrink_x,
            &self.to_x - &shrink_x,
            &self.from_y + &shrink_y,
            &self.to_y - &shrink_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Zero;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    fn int(value: i64) -> BigRational {
        ratio(value, 1)
    }

    #[test]
    fn test_plane_rect_new_valid() {
        let rect = PlaneRect::new(ratio(-5, 2), ratio(3, 2), int(-2), int(2)).unwrap();

        assert_eq!(rect.from_x(), &ratio(-5, 2));
        assert_eq!(rect.to_x(), &ratio(3, 2));
        assert_eq!(rect.from_y(), &int(-2));
        assert_eq!(rect.to_y(), &int(2));
    }

    #[test]
    fn test_plane_rect_intervals_must_be_non_empty() {
        let zero_width = PlaneRect::new(int(0), int(0), int(0), int(100));
        let negative_width = PlaneRect::new(int(0), int(-100), int(0), int(10));
        let zero_height = PlaneRect::new(int(0), int(100), int(0), int(0));
        let negative_height = PlaneRect::new(int(0), int(100), int(0), int(-10));

        assert_eq!(
            zero_width,
            Err(PlaneRectError::InvalidInterval {
                axis: Axis::X,
                from: int(0),
                to: int(0),
            })
        );
        assert_eq!(
            negative_width,
            Err(PlaneRectError::InvalidInterval {
                axis: Axis::X,
                from: int(0),
                to: int(-100),
            })
        );
        assert_eq!(
            zero_height,
            Err(PlaneRectError::InvalidInterval {
                axis: Axis::Y,
                from: int(0),
                to: int(0),
            })
        );
        assert_eq!(
            negative_height,
            Err(PlaneRectError::InvalidInterval {
                axis: Axis::Y,
                from: int(0),
                to: int(-10),
            })
        );
    }

    #[test]
    fn test_plane_rect_spans_and_midpoints() {
        let rect = PlaneRect::new(ratio(-5, 2), int(1), int(-1), int(1)).unwrap();

        assert_eq!(rect.span(Axis::X), ratio(7, 2));
        assert_eq!(rect.span(Axis::Y), int(2));
        assert_eq!(rect.midpoint(Axis::X), ratio(-3, 4));
        assert!(rect.midpoint(Axis::Y).is_zero());
    }

    #[test]
    fn test_translated_preserves_span() {
        let rect = PlaneRect::new(int(-2), int(2), ratio(-5, 2), ratio(3, 2)).unwrap();
        let moved = rect.translated(&ratio(1, 10), &ratio(-1, 10));

        assert_eq!(moved.from_x(), &ratio(-19, 10));
        assert_eq!(moved.to_y(), &ratio(14, 10));
        assert_eq!(moved.span(Axis::X), rect.span(Axis::X));
        assert_eq!(moved.span(Axis::Y), rect.span(Axis::Y));
    }

    #[test]
    fn test_rescaled_recentres_on_midpoint() {
        let rect = PlaneRect::new(int(-2), int(2), int(0), int(4)).unwrap();
        let smaller = rect.rescaled(&int(2), &int(1)).unwrap();

        assert_eq!(smaller.from_x(), &int(-1));
        assert_eq!(smaller.to_x(), &int(1));
        assert_eq!(smaller.from_y(), &ratio(3, 2));
        assert_eq!(smaller.to_y(), &ratio(5, 2));
        assert_eq!(smaller.midpoint(Axis::X), rect.midpoint(Axis::X));
        assert_eq!(smaller.midpoint(Axis::Y), rect.midpoint(Axis::Y));
    }

    #[test]
    fn test_rescaled_rejects_collapsed_span() {
        let rect = PlaneRect::new(int(-2), int(2), int(0), int(4)).unwrap();

        assert!(matches!(
            rect.rescaled(&int(0), &int(1)),
            Err(PlaneRectError::InvalidInterval { axis: Axis::X, .. })
        ));
        assert!(matches!(
            rect.rescaled(&int(1), &int(-1)),
            Err(PlaneRectError::InvalidInterval { axis: Axis::Y, .. })
        ));
    }
}
