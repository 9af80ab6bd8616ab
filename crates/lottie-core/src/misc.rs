//! Small numeric helpers shared by value interpolation.

use glam::Vec2;

/// Linear interpolation `a + t * (b - a)`.
pub trait Lerp: Copy {
    type Factor: Copy;

    fn lerp(self, other: Self, t: Self::Factor) -> Self;
}

impl Lerp for f32 {
    type Factor = f32;

    fn lerp(self, other: Self, t: f32) -> Self {
        self + t * (other - self)
    }
}

impl Lerp for f64 {
    type Factor = f64;

    fn lerp(self, other: Self, t: f64) -> Self {
        self + t * (other - self)
    }
}

/// Computed in `f64`, then truncated toward zero (not rounded).
impl Lerp for i32 {
    type Factor = f32;

    fn lerp(self, other: Self, t: f32) -> Self {
        let a = self as f64;
        (a + t as f64 * (other as f64 - a)) as i32
    }
}

impl Lerp for Vec2 {
    type Factor = f32;

    fn lerp(self, other: Self, t: f32) -> Self {
        self + t * (other - self)
    }
}

pub fn lerp<T: Lerp>(a: T, b: T, t: T::Factor) -> T {
    a.lerp(b, t)
}

/// Division rounded toward negative infinity.
///
/// # Panics
/// Panics if `y` is zero, or on overflow (`i32::MIN / -1`).
pub fn floor_div(x: i32, y: i32) -> i32 {
    let r = x / y;
    if (x ^ y) < 0 && x % y != 0 {
        r - 1
    } else {
        r
    }
}

/// Floor modulo: the result takes the sign of `y` (or is zero).
///
/// `floor_mod(-1, 4) == 3`, where `-1 % 4 == -1`.
///
/// # Panics
/// Panics if `y` is zero.
pub fn floor_mod(x: i32, y: i32) -> i32 {
    let r = x.wrapping_rem(y);
    if r != 0 && (r ^ y) < 0 {
        r + y
    } else {
        r
    }
}

/// [`floor_mod`] on arguments truncated toward zero to `i32`.
pub fn floor_mod_f32(x: f32, y: f32) -> i32 {
    floor_mod(x as i32, y as i32)
}

/// Clamps `n` into `[min, max]`, evaluated as `max(min, min(max, n))`.
///
/// Unlike [`f32::clamp`] this never panics: with `min > max` the result is `min`.
pub fn clamp<T: PartialOrd + Copy>(n: T, min: T, max: T) -> T {
    let upper = if max < n { max } else { n };
    if min > upper {
        min
    } else {
        upper
    }
}

/// Inclusive range test.
pub fn contains<T: PartialOrd>(n: T, range_min: T, range_max: T) -> bool {
    n >= range_min && n <= range_max
}
