use std::fmt;
use std::ops::*;
use std::str::FromStr;

use num_traits::{Float, FloatConst};
use rand::Rng;

use super::source::{ensure_finite, scan_numbers, Operand, Vector2Fields, Vector2Source};
use super::{Angle, Vector, VectorError, VectorResult};
use crate::num::{clamp_float, deg_to_rad};
use crate::util::{max, min, Lerp};

/// A vector with exactly two components, `x` and `y`.
///
/// Offers the same operations as [`Vector`], narrowed to two components:
/// operands of any length are accepted, and reading past their end gives
/// `0`, but only the `x` and `y` of the result are kept.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector2<F = f64> {
    components: [F; 2],
}

impl<F> Vector2<F> {
    /// Unchecked constructor. Use [`build`](Self::build) to validate.
    #[inline]
    pub const fn new(x: F, y: F) -> Self {
        Self { components: [x, y] }
    }

    #[inline]
    pub const fn count(&self) -> usize {
        2
    }

    #[inline]
    pub fn as_slice(&self) -> &[F] {
        &self.components
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.components.iter()
    }
}

impl<F: Float> Vector2<F> {
    /// Both components set to `v`.
    #[inline]
    pub fn splat(v: F) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(F::zero())
    }

    /// Builds a vector from any accepted [`Vector2Source`].
    pub fn build<'a>(source: impl Into<Vector2Source<'a, F>>) -> VectorResult<Self>
    where
        F: 'a,
    {
        match source.into() {
            Vector2Source::Components(components) => Self::from_components(components),
            Vector2Source::Text(text) => Self::from_text(text),
            Vector2Source::Vector(vector) => Ok(Self::from_vector(vector)),
            Vector2Source::Fields(fields) => Self::from_fields(fields),
        }
    }

    /// Takes the first two values. A lone value becomes `x`, with `y` at `0`.
    pub fn from_components(components: &[F]) -> VectorResult<Self> {
        match *components {
            [] => Err(VectorError::EmptySource),
            [x] => {
                ensure_finite(&[x], "Vector2::from_components")?;
                Ok(Self::new(x, F::zero()))
            }
            [x, y, ..] => {
                ensure_finite(&[x, y], "Vector2::from_components")?;
                Ok(Self::new(x, y))
            }
        }
    }

    /// Parses exactly two numbers out of `text`.
    pub fn from_text(text: &str) -> VectorResult<Self> {
        match *scan_numbers(text)? {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(VectorError::InvalidArgument("Vector2::from_text")),
        }
    }

    /// The first two components of `vector`, padding `y` with `0`.
    pub fn from_vector(vector: &Vector<F>) -> Self {
        Self::narrow(vector.as_slice())
    }

    /// An absent or non-finite field reads as `0`, but one of the two has to
    /// be usable.
    pub fn from_fields(fields: Vector2Fields<F>) -> VectorResult<Self> {
        let x = fields.x.filter(|v| v.is_finite());
        let y = fields.y.filter(|v| v.is_finite());
        if x.is_none() && y.is_none() {
            return Err(VectorError::InvalidArgument("Vector2::from_fields"));
        }
        Ok(Self::new(
            x.unwrap_or_else(F::zero),
            y.unwrap_or_else(F::zero),
        ))
    }

    fn narrow(components: &[F]) -> Self {
        match *components {
            [] => Self::zero(),
            [x] => Self::new(x, F::zero()),
            [x, y, ..] => Self::new(x, y),
        }
    }

    /// The first component.
    #[inline]
    pub fn x(&self) -> F {
        self.components[0]
    }

    /// The second component.
    #[inline]
    pub fn y(&self) -> F {
        self.components[1]
    }

    /// Validated write to `x`.
    pub fn set_x(&mut self, x: F) -> VectorResult<&mut Self> {
        self.set_component(0, x)
    }

    /// Validated write to `y`.
    pub fn set_y(&mut self, y: F) -> VectorResult<&mut Self> {
        self.set_component(1, y)
    }

    /// `x` at index 0, `y` at index 1. Anything else is `OutOfRange`.
    pub fn get(&self, index: usize) -> VectorResult<F> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::OutOfRange { index, count: 2 })
    }

    /// The components as `[x, y]`.
    #[inline]
    pub fn to_array(&self) -> [F; 2] {
        self.components
    }

    /// Upcasts to a two component [`Vector`].
    pub fn to_vector(&self) -> Vector<F> {
        Vector::from_vec(self.components.to_vec())
    }

    /// `x * x + y * y`.
    #[inline]
    pub fn magnitude_sqr(&self) -> F {
        self.dot_product(*self)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> F {
        self.magnitude_sqr().sqrt()
    }

    #[inline]
    pub fn max_component(&self) -> F {
        max(self.x(), self.y())
    }

    #[inline]
    pub fn min_component(&self) -> F {
        min(self.x(), self.y())
    }

    pub fn reduce(&self, f: impl FnMut(F, F) -> F) -> F {
        self.fold(F::zero(), f)
    }

    pub fn fold(&self, initial: F, mut f: impl FnMut(F, F) -> F) -> F {
        self.components.iter().fold(initial, |acc, &v| f(acc, v))
    }

    /// Sets both components to `value`.
    pub fn fill(&mut self, value: F) -> &mut Self {
        self.components = [value; 2];
        self
    }

    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.fill(F::zero())
    }

    /// Overwrites `x`, then `y`, with as many `values` as are given.
    pub fn set(&mut self, values: &[F]) -> VectorResult<&mut Self> {
        ensure_finite(values, "Vector2::set")?;
        self.components
            .iter_mut()
            .zip(values)
            .for_each(|(c, &v)| *c = v);
        Ok(self)
    }

    /// Writes `x` or `y` by index. The value must be finite.
    pub fn set_component(&mut self, index: usize, value: F) -> VectorResult<&mut Self> {
        ensure_finite(&[value], "Vector2::set_component")?;
        let slot = self
            .components
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, count: 2 })?;
        *slot = value;
        Ok(self)
    }

    /// Applies `f` to both components.
    #[inline]
    #[must_use]
    pub fn map(self, mut f: impl FnMut(F) -> F) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }

    #[must_use]
    pub fn map_indexed(self, mut f: impl FnMut(F, usize, &[F]) -> F) -> Self {
        let all = self.components;
        Self::new(f(all[0], 0, &all), f(all[1], 1, &all))
    }

    /// Like [`Vector::map_with`], keeping the first two results.
    ///
    /// When `other` has more than two components it is the longer operand,
    /// so its value comes first in the callback.
    #[must_use]
    pub fn map_with<'a>(
        self,
        other: impl Into<Operand<'a, F>>,
        mut f: impl FnMut(F, F, usize, bool) -> F,
    ) -> Self
    where
        F: 'a,
    {
        let other = other.into();
        let other_longer = other.len().map_or(false, |len| len > 2);
        let mut apply = |index: usize| {
            let own = self.components[index];
            match other.component(index) {
                Some(v) if other_longer => f(v, own, index, false),
                Some(v) => f(own, v, index, false),
                None => f(own, F::zero(), index, true),
            }
        };
        Self::new(apply(0), apply(1))
    }

    /// Component-wise sum. A scalar is added to both components.
    #[must_use]
    pub fn add<'a>(self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        self.zip_with(other.into(), |a, b| a + b.unwrap_or_else(F::zero))
    }

    /// Component-wise product.
    #[must_use]
    pub fn multiply<'a>(self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        self.zip_with(other.into(), |a, b| a * b.unwrap_or_else(F::zero))
    }

    /// A missing component in `other` leaves this vector's value as-is.
    #[must_use]
    pub fn subtract<'a>(self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        self.zip_with(other.into(), |a, b| a - b.unwrap_or_else(F::zero))
    }

    /// A missing component in `other` gives `0`.
    #[must_use]
    pub fn divide<'a>(self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        self.zip_with(other.into(), |a, b| b.map_or_else(F::zero, |b| a / b))
    }

    fn zip_with(self, other: Operand<'_, F>, mut f: impl FnMut(F, Option<F>) -> F) -> Self {
        Self::new(
            f(self.x(), other.component(0)),
            f(self.y(), other.component(1)),
        )
    }

    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        self.map(F::abs)
    }

    #[inline]
    #[must_use]
    pub fn ceil(self) -> Self {
        self.map(F::ceil)
    }

    #[inline]
    #[must_use]
    pub fn floor(self) -> Self {
        self.map(F::floor)
    }

    /// Rounds half away from zero.
    #[inline]
    #[must_use]
    pub fn round(self) -> Self {
        self.map(F::round)
    }

    #[inline]
    #[must_use]
    pub fn trunc(self) -> Self {
        self.map(F::trunc)
    }

    #[inline]
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.map(F::sqrt)
    }

    #[inline]
    #[must_use]
    pub fn pow(self, exponent: F) -> Self {
        self.map(|v| v.powf(exponent))
    }

    #[inline]
    #[must_use]
    pub fn scale(self, multiplier: F) -> Self {
        self.map(|v| v * multiplier)
    }

    /// Clamps both components into `[min, max]`.
    #[must_use]
    pub fn clamp(self, min: F, max: F) -> Self {
        self.map(|v| clamp_float(v, min, max))
    }

    #[inline]
    #[must_use]
    pub fn clamp_unit(self) -> Self {
        self.clamp(F::zero(), F::one())
    }

    /// Returns this vector scaled to a magnitude of one, or unchanged if both
    /// components are zero. Uses the same overflow-safe scaling as
    /// [`Vector::normalize`].
    #[must_use]
    pub fn normalize(self) -> Self {
        let largest = max(self.x().abs(), self.y().abs());
        if largest.is_zero() {
            log::debug!("normalizing a zero Vector2");
            return self;
        }
        let scaled = self.map(|v| v / largest);
        let magnitude = scaled.magnitude();
        scaled.map(|v| v / magnitude)
    }

    /// Sum of the absolute differences, counting every component of `other`
    /// past `y` in full.
    pub fn difference<'a>(&self, other: impl Into<Operand<'a, F>>) -> F
    where
        F: 'a,
    {
        match other.into() {
            Operand::Scalar(s) => self.fold(F::zero(), |acc, v| acc + (v - s).abs()),
            operand => self.to_vector().difference(operand),
        }
    }

    pub fn equals<'a>(&self, other: impl Into<Operand<'a, F>>) -> bool
    where
        F: 'a,
    {
        self.equals_within(other, F::epsilon())
    }

    pub fn equals_within<'a>(&self, other: impl Into<Operand<'a, F>>, tolerance: F) -> bool
    where
        F: 'a,
    {
        self.difference(other) < tolerance
    }

    /// `x1 * x2 + y1 * y2`.
    #[inline]
    pub fn dot_product(self, other: Self) -> F {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Squared distance, cheaper than [`distance`](Self::distance).
    #[inline]
    pub fn distance_sqr(self, other: Self) -> F {
        (self - other).magnitude_sqr()
    }

    /// Euclidean distance between the two points.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_sqr(other).sqrt()
    }

    /// Projects this vector onto the direction of `onto`.
    #[must_use]
    pub fn project(self, onto: Self) -> Self {
        let direction = onto.normalize();
        direction.scale(self.dot_product(direction))
    }

    /// Components uniform in `[0, 1)`, from the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// [`random`](Self::random) drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_range_with(rng, F::zero(), F::one())
    }

    /// Components uniform in `[min, max)`, from the thread-local RNG.
    pub fn random_range(min: F, max: F) -> Self {
        Self::random_range_with(&mut rand::thread_rng(), min, max)
    }

    /// Components uniform in `[min, max)`. The bounds may be given in either
    /// order.
    pub fn random_range_with<R: Rng + ?Sized>(rng: &mut R, min: F, max: F) -> Self {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        Self::new(
            crate::random::random_range(rng, lo, hi),
            crate::random::random_range(rng, lo, hi),
        )
    }
}

impl<F: Float + FloatConst> Vector2<F> {
    /// The unit vector pointing at `angle`, `(cos, sin)`.
    pub fn from_angle(angle: Angle<F>) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// The unsigned angle between the two directions, in `[0, PI]`.
    ///
    /// `NaN` when either vector is zero.
    pub fn angle_between(self, other: Self) -> Angle<F> {
        let cos = self.dot_product(other) / (self.magnitude() * other.magnitude());
        // Rounding can push parallel vectors just past 1.
        Angle::radians(cos.max(-F::one()).min(F::one()).acos())
    }

    /// Rotates counter-clockwise about the origin by `radians`.
    #[must_use]
    pub fn rotate(self, radians: F) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Same as [`rotate`](Self::rotate), in degrees.
    #[inline]
    #[must_use]
    pub fn rotate_deg(self, degrees: F) -> Self {
        self.rotate(deg_to_rad(degrees))
    }

    /// Rotates about the origin by `angle`.
    #[inline]
    #[must_use]
    pub fn rotate_by(self, angle: Angle<F>) -> Self {
        self.rotate(angle.get())
    }

    /// Rotates this point about `center`.
    #[must_use]
    pub fn rotate_around(self, center: Self, angle: Angle<F>) -> Self {
        (self - center).rotate_by(angle) + center
    }

    /// A random direction with a magnitude of one.
    pub fn random_unit() -> Self {
        Self::random_unit_with(&mut rand::thread_rng())
    }

    /// [`random_unit`](Self::random_unit) drawing from `rng`.
    pub fn random_unit_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let theta: F = crate::random::random_range(rng, F::zero(), F::TAU());
        let (sin, cos) = theta.sin_cos();
        Self::new(sin, cos)
    }
}

impl<F: Float> Lerp<F> for Vector2<F> {
    fn lerp(self, to: Self, fac: F) -> Self {
        Self::new(self.x().lerp(to.x(), fac), self.y().lerp(to.y(), fac))
    }
}

impl<F: Float + fmt::Display> fmt::Display for Vector2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x(), self.y())
    }
}

impl<F: Float> FromStr for Vector2<F> {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<F> From<[F; 2]> for Vector2<F> {
    fn from(components: [F; 2]) -> Self {
        Self { components }
    }
}

impl<F> From<(F, F)> for Vector2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F> From<Vector2<F>> for [F; 2] {
    fn from(vector: Vector2<F>) -> Self {
        vector.components
    }
}

impl<F: Float> From<&Vector<F>> for Vector2<F> {
    fn from(vector: &Vector<F>) -> Self {
        Self::from_vector(vector)
    }
}

impl<F: Float> From<Vector2<F>> for Vector<F> {
    fn from(vector: Vector2<F>) -> Self {
        vector.to_vector()
    }
}

impl<F> AsRef<[F]> for Vector2<F> {
    fn as_ref(&self) -> &[F] {
        &self.components
    }
}

impl<F> Index<usize> for Vector2<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<F: Float> Neg for Vector2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

macro_rules! vector2_op {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $method:ident) => {
        impl<F: Float> $trait for Vector2<F> {
            type Output = Self;

            #[inline]
            fn $fn(self, other: Self) -> Self {
                Vector2::$method(self, &other)
            }
        }

        impl<F: Float> $trait<F> for Vector2<F> {
            type Output = Self;

            #[inline]
            fn $fn(self, scalar: F) -> Self {
                Vector2::$method(self, scalar)
            }
        }

        impl<F: Float> $assign_trait for Vector2<F> {
            #[inline]
            fn $assign_fn(&mut self, other: Self) {
                *self = Vector2::$method(*self, &other);
            }
        }
    };
}

vector2_op!(Add, add, AddAssign, add_assign, add);
vector2_op!(Sub, sub, SubAssign, sub_assign, subtract);
vector2_op!(Mul, mul, MulAssign, mul_assign, multiply);
vector2_op!(Div, div, DivAssign, div_assign, divide);
