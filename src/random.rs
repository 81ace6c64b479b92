//! Random generators over any [`rand::Rng`].
//!
//! Pass `&mut rand::thread_rng()` for casual use, or a seeded
//! [`rand::rngs::StdRng`] when the sequence has to be reproducible.

use num_traits::Float;
use rand::Rng;

const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Largest integer every float format the crate uses holds exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Uniform float in `[0, 1)`.
#[inline]
pub fn random_unit<F: Float, R: Rng + ?Sized>(rng: &mut R) -> F {
    let value = F::from(rng.gen::<f64>()).unwrap_or_else(F::zero);
    // Narrowing to `f32` can round the sample up to exactly one.
    if value < F::one() {
        value
    } else {
        just_below(F::one())
    }
}

/// Uniform float in `[min, max)`.
///
/// Computed as `unit * (max - min) + min`, so equal bounds return `min`
/// and reversed bounds sample `(max, min]`.
pub fn random_range<F: Float, R: Rng + ?Sized>(rng: &mut R, min: F, max: F) -> F {
    let value = random_unit::<F, R>(rng) * (max - min) + min;
    if min < max && value >= max {
        return just_below(max).max(min);
    }
    value
}

#[inline]
fn just_below<F: Float>(bound: F) -> F {
    bound - (bound.abs() * F::epsilon()).max(F::min_positive_value())
}

/// Integer in `[0, MAX_SAFE_INTEGER)`.
pub fn random_positive_integer<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(0..MAX_SAFE_INTEGER)
}

/// Integer in `(-MAX_SAFE_INTEGER, 0]`.
pub fn random_negative_integer<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    -random_positive_integer(rng)
}

/// Integer strictly between `-MAX_SAFE_INTEGER` and `MAX_SAFE_INTEGER`.
pub fn random_integer<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(1 - MAX_SAFE_INTEGER..MAX_SAFE_INTEGER)
}

/// Integer in `[round(min), round(max))`. Returns `round(min)` for an
/// empty range.
pub fn random_integer_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
    let (lo, hi) = (min.round() as i64, max.round() as i64);
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..hi)
}

#[inline]
pub fn random_bool<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

pub fn random_alphanumeric_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char
}

/// Printable ASCII, `!` through `~`, or starting at space when
/// `include_space` is set.
pub fn random_char<R: Rng + ?Sized>(rng: &mut R, include_space: bool) -> char {
    let start = if include_space { b' ' } else { b'!' };
    rng.gen_range(start..=b'~') as char
}

pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize, alphanumeric: bool) -> String {
    (0..len)
        .map(|_| {
            if alphanumeric {
                random_alphanumeric_char(rng)
            } else {
                random_char(rng, false)
            }
        })
        .collect()
}

/// A short identifier: a random positive integer written in base 36.
pub fn create_uid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut value = random_positive_integer(rng).unsigned_abs();
    if value == 0 {
        return "0".to_owned();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHANUMERIC[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SaturatedRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn unit_stays_in_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let v: f64 = random_unit(&mut rng);
            assert!((0. ..1.).contains(&v));
        }
    }

    #[test]
    fn narrowed_samples_stay_below_one() {
        let mut rng = SaturatedRng;
        let unit: f32 = random_unit(&mut rng);
        assert!(unit < 1.);
        assert!(random_unit::<f64, _>(&mut rng) < 1.);

        assert!(random_range(&mut rng, 3_f32, 6.) < 6.);
        assert!(random_range(&mut rng, -1e-3_f32, 0.) < 0.);
        assert!(random_range(&mut rng, 1e7_f32, 1e7 + 1.) >= 1e7);
        assert!(random_range(&mut rng, 3_f64, 6.) < 6.);
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = random_range(&mut rng, 3., 6.);
            assert!((3. ..6.).contains(&v));
        }
        assert_eq!(random_range(&mut rng, 2., 2.), 2.);
    }

    #[test]
    fn integer_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = random_integer_range(&mut rng, 0., 10.);
            assert!((0..10).contains(&v));
        }
        assert_eq!(random_integer_range(&mut rng, 5., 5.), 5);
    }

    #[test]
    fn signed_integers() {
        let mut rng = rng();
        for _ in 0..100 {
            assert!((0..MAX_SAFE_INTEGER).contains(&random_positive_integer(&mut rng)));
            assert!(random_negative_integer(&mut rng) <= 0);
            assert!(random_integer(&mut rng).abs() < MAX_SAFE_INTEGER);
        }
    }

    #[test]
    fn strings() {
        let mut rng = rng();
        let s = random_string(&mut rng, 16, true);
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));

        let s = random_string(&mut rng, 32, false);
        assert!(s.chars().all(|c| c.is_ascii_graphic()));

        assert!(random_char(&mut rng, true).is_ascii());
    }

    #[test]
    fn uid_is_base36() {
        let mut rng = rng();
        let uid = create_uid(&mut rng);
        assert!(!uid.is_empty());
        assert!(uid
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
