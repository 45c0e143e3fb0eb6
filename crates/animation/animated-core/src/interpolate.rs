//! Interpolation capability for animatable values.
//!
//! A type is animatable when it can be blended affinely between two
//! endpoints: `start + (end - start) * t`. [`Offset`] adds the "plus a delta"
//! half needed by [`TransitionBuilder::by`](crate::builder::TransitionBuilder::by).

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Blend from `self` towards `end` by factor `t`.
    ///
    /// Callers pass `t` in `[0, 1]`; implementations do not clamp.
    fn lerp(&self, end: &Self, t: f32) -> Self;
}

/// Trait for values that can be displaced by a delta of the same type
pub trait Offset: Interpolate {
    fn offset(&self, delta: &Self) -> Self;
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Interpolate for f32 {
    #[inline]
    fn lerp(&self, end: &Self, t: f32) -> Self {
        lerp_f32(*self, *end, t)
    }
}

impl Offset for f32 {
    #[inline]
    fn offset(&self, delta: &Self) -> Self {
        self + delta
    }
}

impl Interpolate for f64 {
    #[inline]
    fn lerp(&self, end: &Self, t: f32) -> Self {
        self + (end - self) * f64::from(t)
    }
}

impl Offset for f64 {
    #[inline]
    fn offset(&self, delta: &Self) -> Self {
        self + delta
    }
}

// Integers blend in i128 and only the scaled span goes through f64, so
// `end - start` never underflows and large values keep every bit at t == 0.
macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl Interpolate for $ty {
                #[inline]
                fn lerp(&self, end: &Self, t: f32) -> Self {
                    if t <= 0.0 {
                        return *self;
                    }
                    let a = *self as i128;
                    let b = *end as i128;
                    let step = ((b - a) as f64 * f64::from(t)).round() as i128;
                    (a + step).clamp(a.min(b), a.max(b)) as $ty
                }
            }

            impl Offset for $ty {
                #[inline]
                fn offset(&self, delta: &Self) -> Self {
                    self.saturating_add(*delta)
                }
            }
        )*
    };
}

impl_integer!(u8, u16, u32, i32, i64);

impl<const N: usize> Interpolate for [f32; N] {
    #[inline]
    fn lerp(&self, end: &Self, t: f32) -> Self {
        std::array::from_fn(|i| lerp_f32(self[i], end[i], t))
    }
}

impl<const N: usize> Offset for [f32; N] {
    #[inline]
    fn offset(&self, delta: &Self) -> Self {
        std::array::from_fn(|i| self[i] + delta[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_float_lerp() {
        assert_relative_eq!(0.0f32.lerp(&10.0, 0.25), 2.5);
        assert_relative_eq!((-4.0f64).lerp(&4.0, 0.5), 0.0);
        assert_eq!(3.0f32.lerp(&7.0, 0.0), 3.0);
        assert_eq!(3.0f32.lerp(&7.0, 1.0), 7.0);
    }

    #[test]
    fn test_integer_lerp_rounds() {
        assert_eq!(0i32.lerp(&100, 0.5), 50);
        assert_eq!(0i32.lerp(&3, 0.5), 2);
        assert_eq!(100i32.lerp(&0, 0.25), 75);
        assert_eq!((-10i64).lerp(&10, 0.75), 5);
    }

    #[test]
    fn test_large_i64_lerp_is_exact_at_start() {
        let start = (1i64 << 53) + 1;
        let end = start + 1000;
        assert_eq!(start.lerp(&end, 0.0), start);
        assert_eq!(start.lerp(&end, 0.5), start + 500);
        assert_eq!(i64::MIN.lerp(&i64::MAX, 1.0), i64::MAX);
        assert_eq!(i64::MAX.lerp(&i64::MIN, 0.0), i64::MAX);
    }

    #[test]
    fn test_unsigned_lerp_descending() {
        // 255 -> 0 must not underflow on the way down
        assert_eq!(255u8.lerp(&0, 0.5), 127);
        assert_eq!(200u8.lerp(&100, 1.0), 100);
    }

    #[test]
    fn test_offset() {
        assert_eq!(200.0f32.offset(&100.0), 300.0);
        assert_eq!(250u8.offset(&10), 255);
        assert_eq!(i32::MAX.offset(&1), i32::MAX);
        assert_eq!([1.0f32, 2.0].offset(&[0.5, -2.0]), [1.5, 0.0]);
    }

    #[test]
    fn test_array_lerp() {
        let a = [0.0f32, 10.0, -2.0];
        let b = [1.0f32, 20.0, 2.0];
        assert_eq!(a.lerp(&b, 0.5), [0.5, 15.0, 0.0]);
    }
}
