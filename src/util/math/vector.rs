use std::fmt;
use std::ops::*;
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};
use num_traits::Float;
use rand::Rng;

use super::source::{ensure_finite, scan_numbers, Operand, VectorSource};
use crate::num::clamp_float;
use crate::util::{max, min, Lerp};

#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// An input had the wrong shape, or held `NaN` or an infinity where a
    /// finite number was required. The offending operation is provided in the error.
    InvalidArgument(&'static str),
    /// An empty list was given where at least one component is required.
    EmptySource,
    /// Text with no numbers in it. The text is provided in the error.
    UnparsableString(String),
    /// A component index outside `0..count`.
    OutOfRange { index: usize, count: usize },
    /// A component count below 1 was requested.
    InvalidSize(usize),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(what) => {
                write!(f, "{what}: every value must be a finite number")
            }
            VectorError::EmptySource => write!(f, "at least one component is required"),
            VectorError::UnparsableString(text) => {
                write!(f, "no numbers could be parsed from {text:?}")
            }
            VectorError::OutOfRange { index, count } => {
                write!(f, "component index {index} is out of range for {count} components")
            }
            VectorError::InvalidSize(size) => {
                write!(f, "{size} is not a valid number of components")
            }
        }
    }
}

impl std::error::Error for VectorError {}

pub type VectorResult<T> = Result<T, VectorError>;

/// An N-dimensional vector with a fixed number of components.
///
/// Algebra never mutates the receiver; it returns a new vector. The only
/// in-place operations are [`fill`](Vector::fill), [`reset`](Vector::reset),
/// [`set`](Vector::set) and [`set_component`](Vector::set_component).
///
/// Binary operations accept vectors of any length. Indices past the end of
/// the shorter operand read as `0` (see [`map_with`](Vector::map_with)).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<F>",
        into = "Vec<F>",
        bound(
            serialize = "F: Float + serde::Serialize",
            deserialize = "F: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct Vector<F = f64> {
    components: Vec<F>,
}

impl<F> Vector<F> {
    /// Number of components, always at least one.
    #[inline]
    pub fn count(&self) -> usize {
        self.components.len()
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

impl<F: Float> Vector<F> {
    /// Builds a vector from any accepted [`VectorSource`].
    ///
    /// ```
    /// use toolbox::math::Vector;
    ///
    /// let zeros = Vector::<f64>::new(3).unwrap();
    /// let pair = Vector::new(&[5., 10.]).unwrap();
    /// let parsed = Vector::<f64>::new("{3, 6, 9}").unwrap();
    ///
    /// assert_eq!(zeros.to_array(), [0., 0., 0.]);
    /// assert_eq!(pair.count(), 2);
    /// assert_eq!(parsed.to_array(), [3., 6., 9.]);
    /// ```
    pub fn new<'a>(source: impl Into<VectorSource<'a, F>>) -> VectorResult<Self>
    where
        F: 'a,
    {
        match source.into() {
            VectorSource::Count(count) => Self::from_count(count),
            VectorSource::Components(components) => Self::from_components(components),
            VectorSource::Text(text) => Self::from_text(text),
            VectorSource::Vector(vector, extra) => Self::from_vector(vector, extra),
        }
    }

    /// `count` zeroed components.
    pub fn from_count(count: usize) -> VectorResult<Self> {
        if count < 1 {
            return Err(VectorError::InvalidSize(count));
        }
        Ok(Self {
            components: vec![F::zero(); count],
        })
    }

    /// Copies `components`, which must be non-empty and finite.
    pub fn from_components(components: &[F]) -> VectorResult<Self> {
        if components.is_empty() {
            return Err(VectorError::EmptySource);
        }
        ensure_finite(components, "Vector::from_components")?;
        Ok(Self {
            components: components.to_vec(),
        })
    }

    /// Scans `text` for numbers, so `"{3, 6}"`, `"[ 3.0 6.0"` and `"3 6"`
    /// all give `[3, 6]`.
    pub fn from_text(text: &str) -> VectorResult<Self> {
        Ok(Self {
            components: scan_numbers(text)?,
        })
    }

    /// A copy of `other` followed by `extra`.
    pub fn from_vector(other: &Self, extra: &[F]) -> VectorResult<Self> {
        ensure_finite(extra, "Vector::from_vector")?;
        let mut components = Vec::with_capacity(other.count() + extra.len());
        components.extend_from_slice(&other.components);
        components.extend_from_slice(extra);
        Ok(Self { components })
    }

    /// Callers guarantee `components` is non-empty.
    #[inline]
    pub(crate) fn from_vec(components: Vec<F>) -> Self {
        debug_assert!(!components.is_empty());
        Self { components }
    }

    /// The component at `index`, or `OutOfRange` past the end.
    pub fn get(&self, index: usize) -> VectorResult<F> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::OutOfRange {
                index,
                count: self.count(),
            })
    }

    /// A fresh copy of the components.
    #[inline]
    pub fn to_array(&self) -> Vec<F> {
        self.components.clone()
    }

    /// Sum of the squared components.
    pub fn magnitude_sqr(&self) -> F {
        self.fold(F::zero(), |acc, v| acc + v * v)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> F {
        self.magnitude_sqr().sqrt()
    }

    /// Largest component.
    pub fn max_component(&self) -> F {
        self.components[1..]
            .iter()
            .fold(self.components[0], |acc, &v| max(acc, v))
    }

    pub fn min_component(&self) -> F {
        self.components[1..]
            .iter()
            .fold(self.components[0], |acc, &v| min(acc, v))
    }

    /// Left fold over the components, starting at `0`.
    pub fn reduce(&self, f: impl FnMut(F, F) -> F) -> F {
        self.fold(F::zero(), f)
    }

    /// Left fold over the components from `initial`.
    pub fn fold(&self, initial: F, mut f: impl FnMut(F, F) -> F) -> F {
        self.components.iter().fold(initial, |acc, &v| f(acc, v))
    }

    /// Sets every component to `value`.
    pub fn fill(&mut self, value: F) -> &mut Self {
        self.components.iter_mut().for_each(|c| *c = value);
        self
    }

    /// Zeroes every component.
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.fill(F::zero())
    }

    /// Overwrites the leading components with `values`.
    ///
    /// Extra values are ignored and components past the end of `values` keep
    /// their current value. Nothing is written if any value is not finite.
    pub fn set(&mut self, values: &[F]) -> VectorResult<&mut Self> {
        ensure_finite(values, "Vector::set")?;
        self.components
            .iter_mut()
            .zip(values)
            .for_each(|(c, &v)| *c = v);
        Ok(self)
    }

    /// Writes one component. Fails past the end or on a non-finite `value`.
    pub fn set_component(&mut self, index: usize, value: F) -> VectorResult<&mut Self> {
        ensure_finite(&[value], "Vector::set_component")?;
        let count = self.count();
        let slot = self
            .components
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, count })?;
        *slot = value;
        Ok(self)
    }

    /// Applies `f` to each component.
    #[inline]
    #[must_use]
    pub fn map(&self, f: impl FnMut(F) -> F) -> Self {
        Self::from_vec(self.components.iter().copied().map(f).collect())
    }

    /// Maps each component with its index and the full component list.
    #[must_use]
    pub fn map_indexed(&self, mut f: impl FnMut(F, usize, &[F]) -> F) -> Self {
        let all = self.as_slice();
        Self::from_vec(
            all.iter()
                .enumerate()
                .map(|(index, &v)| f(v, index, all))
                .collect(),
        )
    }

    /// Combines this vector with `other` component by component.
    ///
    /// The longer operand drives the iteration (this vector when both are
    /// the same length). The callback receives the longer operand's value,
    /// the shorter operand's value, the index, and whether the shorter
    /// operand ran out at that index, in which case its value is `0`.
    /// The result has `max(self.count(), other.len())` components.
    ///
    /// A scalar operand is broadcast across every component.
    #[must_use]
    pub fn map_with<'a>(
        &self,
        other: impl Into<Operand<'a, F>>,
        mut f: impl FnMut(F, F, usize, bool) -> F,
    ) -> Self
    where
        F: 'a,
    {
        let other = match other.into() {
            Operand::Scalar(s) => return self.map_indexed(|v, index, _| f(v, s, index, false)),
            operand => operand.as_slice().unwrap_or_default(),
        };

        let (longer, shorter) = if other.len() > self.count() {
            (other, self.as_slice())
        } else {
            (self.as_slice(), other)
        };

        Self::from_vec(
            longer
                .iter()
                .enumerate()
                .map(|(index, &b)| match shorter.get(index) {
                    Some(&a) => f(b, a, index, false),
                    None => f(b, F::zero(), index, true),
                })
                .collect(),
        )
    }

    /// Component-wise sum, reading any missing component as `0`.
    #[must_use]
    pub fn add<'a>(&self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        match other.into() {
            Operand::Scalar(s) => self.map(|v| v + s),
            operand => self.map_with(operand, |b, a, _, _| b + a),
        }
    }

    /// Component-wise product. Components missing on either side become `0`.
    #[must_use]
    pub fn multiply<'a>(&self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        match other.into() {
            Operand::Scalar(s) => self.map(|v| v * s),
            operand => self.map_with(operand, |b, a, _, _| b * a),
        }
    }

    /// Component-wise `self - other`. A missing component on either side
    /// reads as `0`, so components past the end of `other` are kept.
    #[must_use]
    pub fn subtract<'a>(&self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        self.zip_with(other.into(), |pair| match pair {
            EitherOrBoth::Both(a, b) => a - b,
            EitherOrBoth::Left(a) => a,
            EitherOrBoth::Right(b) => -b,
        })
    }

    /// Component-wise `self / other`. Any index missing from either side
    /// produces `0` instead of dividing by the zero fill.
    #[must_use]
    pub fn divide<'a>(&self, other: impl Into<Operand<'a, F>>) -> Self
    where
        F: 'a,
    {
        self.zip_with(other.into(), |pair| match pair {
            EitherOrBoth::Both(a, b) => a / b,
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => F::zero(),
        })
    }

    /// Pairs `self` (left) with `other` (right) up to the longer length.
    fn zip_with(&self, other: Operand<'_, F>, f: impl FnMut(EitherOrBoth<F, F>) -> F) -> Self {
        match other {
            Operand::Scalar(s) => Self::from_vec(
                self.components
                    .iter()
                    .map(|&v| EitherOrBoth::Both(v, s))
                    .map(f)
                    .collect(),
            ),
            operand => {
                let rhs = operand.as_slice().unwrap_or_default();
                Self::from_vec(
                    self.components
                        .iter()
                        .copied()
                        .zip_longest(rhs.iter().copied())
                        .map(f)
                        .collect(),
                )
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        self.map(F::abs)
    }

    #[inline]
    #[must_use]
    pub fn ceil(&self) -> Self {
        self.map(F::ceil)
    }

    #[inline]
    #[must_use]
    pub fn floor(&self) -> Self {
        self.map(F::floor)
    }

    /// Rounds half away from zero.
    #[inline]
    #[must_use]
    pub fn round(&self) -> Self {
        self.map(F::round)
    }

    #[inline]
    #[must_use]
    pub fn trunc(&self) -> Self {
        self.map(F::trunc)
    }

    #[inline]
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.map(F::sqrt)
    }

    /// Raises every component to `exponent`.
    #[inline]
    #[must_use]
    pub fn pow(&self, exponent: F) -> Self {
        self.map(|v| v.powf(exponent))
    }

    /// Multiplies every component by `multiplier`.
    #[inline]
    #[must_use]
    pub fn scale(&self, multiplier: F) -> Self {
        self.map(|v| v * multiplier)
    }

    /// Clamps every component into `[min, max]`. Reversed bounds are swapped.
    #[must_use]
    pub fn clamp(&self, min: F, max: F) -> Self {
        self.map(|v| clamp_float(v, min, max))
    }

    /// Clamps every component into `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn clamp_unit(&self) -> Self {
        self.clamp(F::zero(), F::one())
    }

    /// This vector followed by each of `others`, in order.
    #[must_use]
    pub fn concat<I>(&self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[F]>,
    {
        let mut components = self.components.clone();
        for other in others {
            components.extend_from_slice(other.as_ref());
        }
        Self::from_vec(components)
    }

    /// A longer copy with `values` appended.
    pub fn append(&self, values: &[F]) -> VectorResult<Self> {
        Self::from_vector(self, values)
    }

    /// Truncates, or pads with `fill`, to `new_count` components.
    pub fn resize(&self, new_count: usize, fill: F) -> VectorResult<Self> {
        if new_count < 1 {
            return Err(VectorError::InvalidSize(new_count));
        }
        let mut components = self.components.clone();
        components.resize(new_count, fill);
        Ok(Self::from_vec(components))
    }

    /// Returns this vector scaled to a magnitude of one.
    ///
    /// A vector with every component at zero has no direction, so it is
    /// returned as-is. Components are divided by the largest of them before
    /// the magnitude is taken, so huge or tiny vectors don't overflow.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let largest = self.fold(F::zero(), |acc, v| max(acc, v.abs()));
        if largest.is_zero() {
            log::debug!("normalizing a zero vector of {} components", self.count());
            return self.clone();
        }
        let scaled = self.map(|v| v / largest);
        let magnitude = scaled.magnitude();
        scaled.map(|v| v / magnitude)
    }

    /// Sum of the absolute differences between components, with missing
    /// components read as `0`. The argument order doesn't matter.
    pub fn difference<'a>(&self, other: impl Into<Operand<'a, F>>) -> F
    where
        F: 'a,
    {
        self.zip_with(other.into(), |pair| match pair {
            EitherOrBoth::Both(a, b) => (a - b).abs(),
            EitherOrBoth::Left(v) | EitherOrBoth::Right(v) => v.abs(),
        })
        .reduce(|acc, v| acc + v)
    }

    /// [`equals_within`](Self::equals_within) using `F::epsilon()`.
    pub fn equals<'a>(&self, other: impl Into<Operand<'a, F>>) -> bool
    where
        F: 'a,
    {
        self.equals_within(other, F::epsilon())
    }

    /// True when [`difference`](Self::difference) is below `tolerance`.
    pub fn equals_within<'a>(&self, other: impl Into<Operand<'a, F>>, tolerance: F) -> bool
    where
        F: 'a,
    {
        self.difference(other) < tolerance
    }

    /// Components uniform in `[0, 1)`, from the thread-local RNG.
    pub fn random(count: usize) -> VectorResult<Self> {
        Self::random_with(&mut rand::thread_rng(), count)
    }

    /// [`random`](Self::random) drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> VectorResult<Self> {
        Self::random_range_with(rng, count, F::zero(), F::one())
    }

    /// A random direction with a magnitude of one.
    pub fn random_unit(count: usize) -> VectorResult<Self> {
        Self::random_unit_with(&mut rand::thread_rng(), count)
    }

    pub fn random_unit_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> VectorResult<Self> {
        Ok(Self::random_with(rng, count)?.normalize())
    }

    /// Components uniform in `[min, max)`. The bounds may be given in either
    /// order.
    pub fn random_range(count: usize, min: F, max: F) -> VectorResult<Self> {
        Self::random_range_with(&mut rand::thread_rng(), count, min, max)
    }

    /// [`random_range`](Self::random_range) drawing from `rng`. Components
    /// stay below the upper bound unless the bounds are equal.
    pub fn random_range_with<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        min: F,
        max: F,
    ) -> VectorResult<Self> {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        let mut vector = Self::from_count(count)?;
        vector
            .components
            .iter_mut()
            .for_each(|c| *c = crate::random::random_range(rng, lo, hi));
        Ok(vector)
    }
}

impl<F: Float> Lerp<F> for Vector<F> {
    /// Interpolates each component, reading missing ones as `0`.
    fn lerp(self, to: Self, fac: F) -> Self {
        Self::from_vec(
            self.components
                .iter()
                .copied()
                .zip_longest(to.components.iter().copied())
                .map(|pair| match pair {
                    EitherOrBoth::Both(a, b) => a.lerp(b, fac),
                    EitherOrBoth::Left(a) => a.lerp(F::zero(), fac),
                    EitherOrBoth::Right(b) => F::zero().lerp(b, fac),
                })
                .collect(),
        )
    }
}

impl<F: Float + fmt::Display> fmt::Display for Vector<F> {
    /// Writes `[a, b, c]`, which [`Vector::from_text`] reads back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.components.iter().join(", "))
    }
}

impl<F: Float> FromStr for Vector<F> {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<F: Float> TryFrom<Vec<F>> for Vector<F> {
    type Error = VectorError;

    fn try_from(components: Vec<F>) -> Result<Self, Self::Error> {
        if components.is_empty() {
            return Err(VectorError::EmptySource);
        }
        ensure_finite(&components, "Vector::try_from")?;
        Ok(Self { components })
    }
}

impl<F: Float> TryFrom<&[F]> for Vector<F> {
    type Error = VectorError;

    fn try_from(components: &[F]) -> Result<Self, Self::Error> {
        Self::from_components(components)
    }
}

impl<F> From<Vector<F>> for Vec<F> {
    fn from(vector: Vector<F>) -> Self {
        vector.components
    }
}

impl<F> AsRef<[F]> for Vector<F> {
    fn as_ref(&self) -> &[F] {
        &self.components
    }
}

impl<F> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<'v, F: Float> IntoIterator for &'v Vector<F> {
    type Item = &'v F;
    type IntoIter = std::slice::Iter<'v, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<F: Float> Neg for Vector<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<F: Float> Neg for &Vector<F> {
    type Output = Vector<F>;

    #[inline]
    fn neg(self) -> Vector<F> {
        self.map(|v| -v)
    }
}

// Only implemented for references: an owned `Vector` receiver would pick
// `Add::add` over the inherent `add` whenever `std::ops::Add` is in scope.
macro_rules! vector_op {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl<F: Float> $trait<&Vector<F>> for &Vector<F> {
            type Output = Vector<F>;

            #[inline]
            fn $fn(self, other: &Vector<F>) -> Vector<F> {
                Vector::$method(self, other)
            }
        }

        impl<F: Float> $trait<F> for &Vector<F> {
            type Output = Vector<F>;

            #[inline]
            fn $fn(self, scalar: F) -> Vector<F> {
                Vector::$method(self, scalar)
            }
        }
    };
}

vector_op!(Add, add, add);
vector_op!(Sub, sub, subtract);
vector_op!(Mul, mul, multiply);
vector_op!(Div, div, divide);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{init_test, SaturatedRng};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vec(components: &[f64]) -> Vector {
        Vector::from_components(components).unwrap()
    }

    #[test]
    fn count_constructor_zeroes() {
        for n in 1..8 {
            let v = Vector::<f64>::new(n).unwrap();
            assert_eq!(v.count(), n);
            assert!(v.iter().all(|&c| c == 0.));
        }
        assert_eq!(Vector::<f64>::new(0), Err(VectorError::InvalidSize(0)));
    }

    #[test]
    fn component_constructor() {
        let v = Vector::new(&[3., 6.]).unwrap();
        assert_eq!(v.to_array(), [3., 6.]);
        assert_eq!(v.count(), 2);
        assert_eq!(vec(&[3., 6., 9.]).to_array(), [3., 6., 9.]);
    }

    #[test]
    fn component_constructor_rejects_empty_and_nan() {
        assert_eq!(
            Vector::<f64>::from_components(&[]),
            Err(VectorError::EmptySource)
        );
        assert!(matches!(
            Vector::from_components(&[3., f64::NAN]),
            Err(VectorError::InvalidArgument(_))
        ));
        assert!(Vector::<f32>::try_from(Vec::new()).is_err());
    }

    #[test]
    fn infinities_are_rejected_at_every_input() {
        assert!(matches!(
            Vector::from_components(&[f64::INFINITY, 1.]),
            Err(VectorError::InvalidArgument(_))
        ));
        assert!(Vector::<f64>::try_from(vec![1., f64::NEG_INFINITY]).is_err());
        assert!(Vector::<f64>::from_text("1e400 2").is_err());

        let mut v = vec(&[3., 6.]);
        assert!(v.set(&[f64::INFINITY]).is_err());
        assert!(v.set_component(0, f64::NEG_INFINITY).is_err());
        assert!(v.append(&[f64::INFINITY]).is_err());
        assert_eq!(v.to_array(), [3., 6.]);
    }

    #[test]
    fn text_constructor() {
        assert_eq!(Vector::<f64>::new("{3, 6}").unwrap().to_array(), [3., 6.]);
        assert_eq!(
            "[ 3.0 6.0".parse::<Vector>().unwrap().to_array(),
            [3., 6.]
        );
        assert_eq!(Vector::<f64>::from_text("-3 6.0").unwrap().to_array(), [-3., 6.]);
        assert!(matches!(
            Vector::<f64>::new("some string"),
            Err(VectorError::UnparsableString(_))
        ));
    }

    #[test]
    fn vector_constructor_copies_and_appends() {
        let v = vec(&[3., 6.]);
        let copy = Vector::new(&v).unwrap();
        assert_eq!(copy, v);

        let longer = Vector::new(VectorSource::Vector(&v, &[9.])).unwrap();
        assert_eq!(longer.to_array(), [3., 6., 9.]);

        assert!(Vector::from_vector(&v, &[f64::NAN]).is_err());
    }

    #[test]
    fn display_round_trips() {
        init_test();
        assert_eq!(vec(&[3., 6.]).to_string(), "[3, 6]");
        assert_eq!(vec(&[3.14159, -6.28]).to_string(), "[3.14159, -6.28]");

        let v = vec(&[3.14159, 6., -1e-7, 12345.678]);
        let parsed: Vector = v.to_string().parse().unwrap();
        assert!(parsed.equals_within(&v, 1e-12));
    }

    #[test]
    fn to_array_is_a_copy() {
        let mut v = vec(&[3., 6.]);
        let snapshot = v.to_array();
        v.fill(1.);
        assert_eq!(snapshot, [3., 6.]);
    }

    #[test]
    fn get_bounds() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.get(1), Ok(6.));
        assert_eq!(
            v.get(2),
            Err(VectorError::OutOfRange { index: 2, count: 2 })
        );
        assert!(v.get(usize::MAX).is_err());
    }

    #[test]
    fn magnitudes_and_extremes() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.magnitude_sqr(), 45.);
        assert_abs_diff_eq!(v.magnitude(), 45f64.sqrt());
        assert_eq!(v.max_component(), 6.);
        assert_eq!(v.min_component(), 3.);
        assert_eq!(v.reduce(|acc, cur| acc + cur), 9.);
        assert_eq!(v.fold(1., |acc, cur| acc * cur), 18.);
    }

    #[test]
    fn mutators() {
        let mut v = vec(&[3., 6.]);
        assert_eq!(v.fill(9.).to_array(), [9., 9.]);
        assert_eq!(v.reset().to_array(), [0., 0.]);

        let mut v = vec(&[3., 6.]);
        assert_eq!(v.set(&[9., 12.]).unwrap().to_array(), [9., 12.]);
        assert_eq!(v.set(&[1., 2., 3.]).unwrap().to_array(), [1., 2.]);
        assert_eq!(v.set(&[7.]).unwrap().to_array(), [7., 2.]);
        assert!(v.set(&[f64::NAN]).is_err());
        assert_eq!(v.to_array(), [7., 2.]);

        assert_eq!(v.set_component(1, 9.).unwrap().to_array(), [7., 9.]);
        assert_eq!(
            v.set_component(2, 9.).err(),
            Some(VectorError::OutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn unary_math() {
        assert_eq!(vec(&[3., -6.]).abs().to_array(), [3., 6.]);
        assert_eq!(vec(&[-3.14, 6.9]).ceil().to_array(), [-3., 7.]);
        assert_eq!(vec(&[-3.14, 6.67]).floor().to_array(), [-4., 6.]);
        assert_eq!(vec(&[-3.14, 6.5]).round().to_array(), [-3., 7.]);
        assert_eq!(vec(&[-3.14, 6.1234]).trunc().to_array(), [-3., 6.]);
        assert_eq!(vec(&[9., 36.]).sqrt().to_array(), [3., 6.]);
        assert_eq!(vec(&[3., 6.]).pow(2.).to_array(), [9., 36.]);
        assert_eq!(vec(&[3., 6.]).scale(2.).to_array(), [6., 12.]);
    }

    #[test]
    fn abs_is_idempotent() {
        let v = vec(&[-1.5, 2., -0., 7.25]);
        assert_eq!(v.abs().abs().to_array(), v.abs().to_array());
    }

    #[test]
    fn clamping() {
        assert_eq!(vec(&[3., 6.]).clamp(0., 5.).to_array(), [3., 5.]);
        assert_eq!(vec(&[3., 6.]).clamp(5., 0.).to_array(), [3., 5.]);
        assert_eq!(vec(&[0.25, 6.]).clamp_unit().to_array(), [0.25, 1.]);
    }

    #[test]
    fn algebra_does_not_mutate() {
        let v = vec(&[3., 6.]);
        let _ = v.add(1.).subtract(&[2.]).scale(4.).normalize();
        assert_eq!(v.to_array(), [3., 6.]);
    }

    #[test]
    fn map_passes_index_and_components() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.map_indexed(|_, i, _| i as f64).to_array(), [0., 1.]);
        assert_eq!(
            v.map_indexed(|val, _, all| val / all.len() as f64).to_array(),
            [1.5, 3.]
        );
    }

    #[test]
    fn map_with_fills_missing_with_zero() {
        let v = vec(&[3., 6.]);
        let sum = |b: f64, a: f64, _: usize, _: bool| b + a;

        assert_eq!(v.map_with(&vec(&[2., 1.]), sum).to_array(), [5., 7.]);
        assert_eq!(v.map_with(&vec(&[2.]), sum).to_array(), [5., 6.]);
        assert_eq!(v.map_with(&vec(&[2., 1., -3.]), sum).to_array(), [5., 7., -3.]);
        assert_eq!(v.map_with(&[2., 1.], sum).to_array(), [5., 7.]);
    }

    #[test]
    fn map_with_flags_out_of_bounds() {
        let v = vec(&[3., 6.]);
        let pick = |b: f64, a: f64, _: usize, out: bool| if out { b } else { a };
        assert_eq!(v.map_with(&vec(&[2.]), pick).to_array(), [2., 6.]);

        let mut flags = Vec::new();
        let _ = vec(&[1.]).map_with(&[4., 5., 6.], |b, _, i, out| {
            flags.push((i, out));
            b
        });
        assert_eq!(flags, [(0, false), (1, true), (2, true)]);
    }

    #[test]
    fn add_and_multiply() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.add(&vec(&[2., 2.])).to_array(), [5., 8.]);
        assert_eq!(v.add(&[2., 2.]).to_array(), [5., 8.]);
        assert_eq!(v.add(2.).to_array(), [5., 8.]);
        assert_eq!(v.multiply(&vec(&[2., 2.])).to_array(), [6., 12.]);
        assert_eq!(v.multiply(&[2., 2.]).to_array(), [6., 12.]);
        assert_eq!(v.multiply(2.).to_array(), [6., 12.]);
        assert_eq!(v.multiply(&[2.]).to_array(), [6., 0.]);
    }

    #[test]
    fn subtract_keeps_unmatched_components() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.subtract(&vec(&[2., 2.])).to_array(), [1., 4.]);
        assert_eq!(v.subtract(&vec(&[2.])).to_array(), [1., 6.]);
        assert_eq!(v.subtract(&[2.]).to_array(), [1., 6.]);
        assert_eq!(v.subtract(2.).to_array(), [1., 4.]);
        assert_eq!(v.subtract(&[1., 1., 5.]).to_array(), [2., 5., -5.]);
    }

    #[test]
    fn divide_zeroes_unmatched_components() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.divide(&vec(&[3., 2.])).to_array(), [1., 3.]);
        assert_eq!(v.divide(&vec(&[3.])).to_array(), [1., 0.]);
        assert_eq!(v.divide(&[3.]).to_array(), [1., 0.]);
        assert_eq!(v.divide(2.).to_array(), [1.5, 3.]);
        assert_eq!(v.divide(&[3., 2., 4.]).to_array(), [1., 3., 0.]);
    }

    #[test]
    fn operators() {
        let a = vec(&[3., 6.]);
        let b = vec(&[2., 2.]);
        assert_eq!((&a + &b).to_array(), [5., 8.]);
        assert_eq!((&a - &b).to_array(), [1., 4.]);
        assert_eq!((&a * 2.).to_array(), [6., 12.]);
        assert_eq!((&a / &b).to_array(), [1.5, 3.]);
        assert_eq!((-a).to_array(), [-3., -6.]);
    }

    #[test]
    fn concat_and_append() {
        let v = vec(&[3., 6.]);
        let w = vec(&[9., 12.]);
        assert_eq!(v.concat([[9., 12.]]).to_array(), [3., 6., 9., 12.]);
        assert_eq!(v.concat([&w, &w]).to_array(), [3., 6., 9., 12., 9., 12.]);
        assert_eq!(
            v.concat([w.as_slice(), &[15.][..]]).to_array(),
            [3., 6., 9., 12., 15.]
        );
        assert_eq!(v.append(&[9., 12.]).unwrap().to_array(), [3., 6., 9., 12.]);
        assert!(v.append(&[f64::NAN]).is_err());
    }

    #[test]
    fn resizing() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.resize(2, 0.).unwrap(), v);
        assert_eq!(v.resize(1, 0.).unwrap().to_array(), [3.]);
        assert_eq!(v.resize(3, 9.).unwrap().to_array(), [3., 6., 9.]);
        assert_eq!(v.resize(0, 0.), Err(VectorError::InvalidSize(0)));
    }

    #[test]
    fn normalizing() {
        init_test();
        let n = vec(&[3., 6.]).normalize();
        assert_abs_diff_eq!(n[0], 1. / 5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(n[1], 2. / 5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(n.magnitude(), 1., epsilon = 1e-12);
        assert_eq!(vec(&[0., 0., 0.]).normalize().to_array(), [0., 0., 0.]);
    }

    #[test]
    fn normalizing_extreme_magnitudes() {
        let big = vec(&[1e200, 1e200]).normalize();
        assert_abs_diff_eq!(big[0], 0.5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(big[1], 0.5f64.sqrt(), epsilon = 1e-12);

        let tiny = vec(&[1e-200, 0.]).normalize();
        assert_eq!(tiny.to_array(), [1., 0.]);

        let mixed = vec(&[-f64::MAX, f64::MAX, 0.]).normalize();
        assert_abs_diff_eq!(mixed.magnitude(), 1., epsilon = 1e-12);
        assert!(mixed[0] < 0.);
    }

    #[test]
    fn differences() {
        let v = vec(&[3., 6.]);
        assert_eq!(v.difference(&vec(&[-3., 2.])), 10.);
        assert_eq!(v.difference(&vec(&[-3.])), 12.);
        assert_eq!(v.difference(&vec(&[-3., 2., 4.])), 14.);
        assert_eq!(vec(&[-3., 2., 4.]).difference(&v), 14.);
    }

    #[test]
    fn equality_with_tolerance() {
        let a = vec(&[3. / 4., 6. / 9.]);
        let b = vec(&[3. / 4., 6. / 9.]);
        assert!(a.equals(&b));

        let a = vec(&[3.123456, 6.123456]);
        let b = vec(&[3.123999, 6.123999]);
        assert!(a.equals_within(&b, 0.01));
        assert!(!a.equals(&b));
    }

    #[test]
    fn lerp_between_vectors() {
        let a = vec(&[0., 10.]);
        let b = vec(&[10., 20., 4.]);
        assert_eq!(a.lerp(b, 0.5).to_array(), [5., 15., 2.]);
    }

    #[test]
    fn random_vectors() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = Vector::<f64>::random_with(&mut rng, 2).unwrap();
            assert!(v.max_component() < 1.);
            assert!(v.min_component() >= 0.);

            let v = Vector::<f64>::random_range_with(&mut rng, 2, 6., 3.).unwrap();
            assert!(v.max_component() < 6.);
            assert!(v.min_component() >= 3.);

            let v = Vector::<f64>::random_unit_with(&mut rng, 2).unwrap();
            assert_abs_diff_eq!(v.magnitude(), 1., epsilon = 1e-12);
        }

        assert!(Vector::<f64>::random(0).is_err());
        assert!(Vector::<f64>::random_unit(0).is_err());
        assert!(Vector::<f64>::random_range(0, 0., 1.).is_err());
        assert_eq!(Vector::<f32>::random(3).unwrap().count(), 3);
    }

    #[test]
    fn saturated_samples_stay_below_the_bound() {
        let v = Vector::<f32>::random_range_with(&mut SaturatedRng, 3, 3., 6.).unwrap();
        assert!(v.max_component() < 6.);
        assert!(v.min_component() >= 3.);
        assert!(Vector::<f32>::random_with(&mut SaturatedRng, 2).unwrap().max_component() < 1.);
    }
}
