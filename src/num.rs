use num_traits::{Float, FloatConst};

/// Clamps `value` into `[min, max]`.
///
/// Reversed bounds are swapped first. A `NaN` input can't be placed inside
/// the range, so it returns `F::max_value()` instead.
pub fn clamp_float<F: Float>(value: F, min: F, max: F) -> F {
    if value.is_nan() {
        log::warn!("clamp_float received NaN, returning max value");
        return F::max_value();
    }

    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    value.max(lo).min(hi)
}

/// Clamps into the unit interval `[0, 1]`. `NaN` becomes `0`.
pub fn clamp_unit<F: Float>(value: F) -> F {
    if value.is_nan() {
        return F::zero();
    }
    value.max(F::zero()).min(F::one())
}

/// Clamps into `[0, 360]`. `NaN` becomes `0`.
pub fn clamp_degree<F: Float>(value: F) -> F {
    if value.is_nan() {
        return F::zero();
    }
    let full_turn = F::from(360.).unwrap_or_else(F::max_value);
    value.max(F::zero()).min(full_turn)
}

#[inline]
pub fn deg_to_rad<F: Float + FloatConst>(deg: F) -> F {
    deg * F::PI() / half_turn()
}

#[inline]
pub fn rad_to_deg<F: Float + FloatConst>(rad: F) -> F {
    rad * half_turn() / F::PI()
}

#[inline]
fn half_turn<F: Float>() -> F {
    F::from(180.).unwrap_or_else(F::max_value)
}

/// Checks `|a - b| < F::epsilon()`.
#[inline]
pub fn equals<F: Float>(a: F, b: F) -> bool {
    equals_within(a, b, F::epsilon())
}

#[inline]
pub fn equals_within<F: Float>(a: F, b: F, tolerance: F) -> bool {
    (a - b).abs() < tolerance
}

/// Linearly interpolates from `start` (alpha 0) to `end` (alpha 1).
#[inline]
pub fn linear_interp<F: Float>(start: F, end: F, alpha: F) -> F {
    start * (F::one() - alpha) + end * alpha
}

/// Finds where `value` sits between `start` and `end`, as an alpha clamped
/// to `[0, 1]`.
///
/// `inverse_linear_interp(50., 100., 75.) == 0.5`
pub fn inverse_linear_interp<F: Float>(start: F, end: F, value: F) -> F {
    clamp_float((value - start) / (end - start), F::zero(), F::one())
}

/// Maps `value` from the range `from_start..from_end` onto `to_start..to_end`.
pub fn rescale<F: Float>(value: F, from_start: F, from_end: F, to_start: F, to_end: F) -> F {
    linear_interp(
        to_start,
        to_end,
        inverse_linear_interp(from_start, from_end, value),
    )
}

/// Wraps `value` into `[0, range)`, counting negatives back from `range`.
pub fn wrap_to_positive<F: Float>(value: F, range: F) -> F {
    let rem = value % range;
    if rem < F::zero() {
        rem + range
    } else {
        rem
    }
}

pub fn precision_round<F: Float>(value: F, decimals: i32) -> F {
    let mult = F::from(10.).unwrap_or_else(F::one).powi(decimals);
    (value * mult).round() / mult
}

pub fn precision_floor<F: Float>(value: F, decimals: i32) -> F {
    let mult = F::from(10.).unwrap_or_else(F::one).powi(decimals);
    (value * mult).floor() / mult
}

pub fn precision_ceil<F: Float>(value: F, decimals: i32) -> F {
    let mult = F::from(10.).unwrap_or_else(F::one).powi(decimals);
    (value * mult).ceil() / mult
}

/// Remainder of `value / modulus` floored to `decimals` places.
/// `decimals <= 0` floors to a whole number.
///
/// `precision_modulo(7.25, 2., 2) == 1.25`
pub fn precision_modulo<F: Float>(value: F, modulus: F, decimals: i32) -> F {
    let mult = decimal_shift(decimals.max(0));
    ((value * mult) % (modulus * mult)).floor() / mult
}

/// Whole-number check. Infinities and `NaN` are not integers.
#[inline]
pub fn is_integer<F: Float>(value: F) -> bool {
    value.is_finite() && value.fract().is_zero()
}

/// A finite number with a fractional part.
#[inline]
pub fn is_float<F: Float>(value: F) -> bool {
    value.is_finite() && !value.fract().is_zero()
}

/// `value >= 0`. Zero counts as positive, `NaN` as neither.
#[inline]
pub fn is_positive<F: Float>(value: F) -> bool {
    value >= F::zero()
}

#[inline]
pub fn is_negative<F: Float>(value: F) -> bool {
    value < F::zero()
}

/// Odd check on the whole part. Non-integers are first shifted left by
/// `decimals` places and truncated, so `is_odd(3.1415, 3)` tests `3141`.
/// Sign is ignored.
pub fn is_odd<F: Float>(value: F, decimals: i32) -> bool {
    parity(value, decimals) == Some(F::one())
}

/// Even counterpart of [`is_odd`].
pub fn is_even<F: Float>(value: F, decimals: i32) -> bool {
    parity(value, decimals) == Some(F::zero())
}

fn parity<F: Float>(value: F, decimals: i32) -> Option<F> {
    if !value.is_finite() {
        return None;
    }

    let whole = if is_integer(value) {
        value
    } else {
        (value * decimal_shift(decimals.max(0))).trunc()
    };
    let two = F::one() + F::one();
    Some((whole % two).abs())
}

/// Whether `value` divides evenly by `multiple`. Nothing is a multiple of 0.
pub fn is_multiple<F: Float>(value: F, multiple: F) -> bool {
    !multiple.is_zero() && (value % multiple).is_zero()
}

/// Negative values become 0.
#[inline]
pub fn positive<F: Float>(value: F) -> F {
    value.max(F::zero())
}

/// [`clamp_float`], then truncated toward zero.
pub fn clamp_integer<F: Float>(value: F, min: F, max: F) -> F {
    clamp_float(value, min, max).trunc()
}

/// Clamps into a byte. `NaN` saturates to `255`, following [`clamp_float`].
pub fn clamp_byte<F: Float>(value: F) -> u8 {
    let byte = F::from(u8::MAX).unwrap_or_else(F::max_value);
    clamp_integer(value, F::zero(), byte)
        .to_u8()
        .unwrap_or(u8::MAX)
}

#[inline]
fn decimal_shift<F: Float>(decimals: i32) -> F {
    F::from(10.).unwrap_or_else(F::one).powi(decimals)
}
