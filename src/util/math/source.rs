use std::sync::OnceLock;

use num_traits::Float;
use regex::Regex;

use super::{Vector, Vector2, VectorError, VectorResult};

/// The accepted shapes for building a [`Vector`].
#[derive(Debug, Clone, Copy)]
pub enum VectorSource<'a, F = f64> {
    /// A number of zeroed components. Must be at least 1.
    Count(usize),
    /// Component values, in order.
    Components(&'a [F]),
    /// Text containing numbers, like `"[3, 6, 9]"` or `"(1.5 -2e3)"`.
    Text(&'a str),
    /// A copy of another vector, with extra components appended.
    Vector(&'a Vector<F>, &'a [F]),
}

impl<'a, F> From<usize> for VectorSource<'a, F> {
    fn from(count: usize) -> Self {
        VectorSource::Count(count)
    }
}

impl<'a, F> From<&'a [F]> for VectorSource<'a, F> {
    fn from(components: &'a [F]) -> Self {
        VectorSource::Components(components)
    }
}

impl<'a, F, const N: usize> From<&'a [F; N]> for VectorSource<'a, F> {
    fn from(components: &'a [F; N]) -> Self {
        VectorSource::Components(components)
    }
}

impl<'a, F> From<&'a str> for VectorSource<'a, F> {
    fn from(text: &'a str) -> Self {
        VectorSource::Text(text)
    }
}

impl<'a, F> From<&'a Vector<F>> for VectorSource<'a, F> {
    fn from(vector: &'a Vector<F>) -> Self {
        VectorSource::Vector(vector, &[])
    }
}

/// The accepted shapes for building a [`Vector2`].
#[derive(Debug, Clone, Copy)]
pub enum Vector2Source<'a, F = f64> {
    /// The first two values. A missing `y` reads as `0`.
    Components(&'a [F]),
    /// Text holding exactly two numbers.
    Text(&'a str),
    /// The first two components of a vector of any size.
    Vector(&'a Vector<F>),
    Fields(Vector2Fields<F>),
}

/// A record with optional `x` and `y`, for building a [`Vector2`] out of
/// partial data. At least one field must hold a number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2Fields<F = f64> {
    pub x: Option<F>,
    pub y: Option<F>,
}

impl<'a, F> From<&'a [F]> for Vector2Source<'a, F> {
    fn from(components: &'a [F]) -> Self {
        Vector2Source::Components(components)
    }
}

impl<'a, F, const N: usize> From<&'a [F; N]> for Vector2Source<'a, F> {
    fn from(components: &'a [F; N]) -> Self {
        Vector2Source::Components(components)
    }
}

impl<'a, F> From<&'a str> for Vector2Source<'a, F> {
    fn from(text: &'a str) -> Self {
        Vector2Source::Text(text)
    }
}

impl<'a, F> From<&'a Vector<F>> for Vector2Source<'a, F> {
    fn from(vector: &'a Vector<F>) -> Self {
        Vector2Source::Vector(vector)
    }
}

impl<'a, F> From<Vector2Fields<F>> for Vector2Source<'a, F> {
    fn from(fields: Vector2Fields<F>) -> Self {
        Vector2Source::Fields(fields)
    }
}

/// Right-hand side of a binary vector operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, F = f64> {
    /// Applied to every component.
    Scalar(F),
    Components(&'a [F]),
    Vector(&'a Vector<F>),
}

impl<'a, F: Copy> Operand<'a, F> {
    /// Number of components, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Components(c) => Some(c.len()),
            Operand::Vector(v) => Some(v.count()),
        }
    }

    /// The component at `index`. A scalar has every index.
    pub fn component(&self, index: usize) -> Option<F> {
        match self {
            Operand::Scalar(s) => Some(*s),
            Operand::Components(c) => c.get(index).copied(),
            Operand::Vector(v) => v.as_slice().get(index).copied(),
        }
    }

    pub(crate) fn as_slice(&self) -> Option<&'a [F]> {
        match *self {
            Operand::Scalar(_) => None,
            Operand::Components(c) => Some(c),
            Operand::Vector(v) => Some(v.as_slice()),
        }
    }
}

impl<'a, F: Float> From<F> for Operand<'a, F> {
    fn from(scalar: F) -> Self {
        Operand::Scalar(scalar)
    }
}

impl<'a, F> From<&'a [F]> for Operand<'a, F> {
    fn from(components: &'a [F]) -> Self {
        Operand::Components(components)
    }
}

impl<'a, F, const N: usize> From<&'a [F; N]> for Operand<'a, F> {
    fn from(components: &'a [F; N]) -> Self {
        Operand::Components(components)
    }
}

impl<'a, F> From<&'a Vec<F>> for Operand<'a, F> {
    fn from(components: &'a Vec<F>) -> Self {
        Operand::Components(components)
    }
}

impl<'a, F> From<&'a Vector<F>> for Operand<'a, F> {
    fn from(vector: &'a Vector<F>) -> Self {
        Operand::Vector(vector)
    }
}

impl<'a, F> From<&'a Vector2<F>> for Operand<'a, F> {
    fn from(vector: &'a Vector2<F>) -> Self {
        Operand::Components(vector.as_slice())
    }
}

fn number_token() -> &'static Regex {
    static NUMBER_TOKEN: OnceLock<Regex> = OnceLock::new();
    NUMBER_TOKEN.get_or_init(|| {
        Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?")
            .expect("number token pattern is valid")
    })
}

/// Pulls every signed decimal number out of `text`, ignoring whatever
/// brackets or separators surround them.
///
/// A token too large for `F` fails with `InvalidArgument` rather than
/// turning into an infinity.
pub fn scan_numbers<F: Float>(text: &str) -> VectorResult<Vec<F>> {
    let values = number_token()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .map(|value| {
            num_traits::cast::<f64, F>(value)
                .filter(|v| v.is_finite())
                .ok_or(VectorError::InvalidArgument("scan_numbers"))
        })
        .collect::<VectorResult<Vec<F>>>()?;

    if values.is_empty() {
        return Err(VectorError::UnparsableString(text.to_owned()));
    }

    log::trace!("scanned {} numbers from {:?}", values.len(), text);
    Ok(values)
}

/// Rejects `NaN` and the infinities. Components are always finite.
pub(crate) fn ensure_finite<F: Float>(values: &[F], what: &'static str) -> VectorResult<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(VectorError::InvalidArgument(what));
    }
    Ok(())
}
