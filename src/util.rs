//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if this interval contains the value.
    ///
    /// Unordered values such as NaN are never contained.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: std::ops::Sub<T, Output = T> + Copy> Interval<T> {
    /// Gets the magnitude of the interval.
    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T: Float> Interval<T> {
    /// Maps `t` in `[0, 1]` to the corresponding value in the interval.
    pub fn lerp(&self, t: T) -> T {
        self.min + t * (self.max - self.min)
    }

    /// Maps a value in the interval back to `[0, 1]`.
    pub fn inv_lerp(&self, value: T) -> T {
        (value - self.min) / (self.max - self.min)
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;

    #[test]
    fn contains_is_inclusive() {
        let unit = Interval::new(0.0, 1.0);
        assert!(unit.contains(0.0));
        assert!(unit.contains(1.0));
        assert!(!unit.contains(1.0001));
        assert!(!unit.contains(-0.0001));
        assert!(!unit.contains(f64::NAN));
    }

    #[test]
    fn lerp_round_trip() {
        let range = Interval::new(0.25, 0.5);
        assert_eq!(range.lerp(0.5), 0.375);
        assert_eq!(range.inv_lerp(0.375), 0.5);
        assert_eq!(range.inv_lerp(0.25), 0.0);
        assert_eq!(range.length(), 0.25);
    }
}
