use num_traits::Num;

/// Linear interpolation from `self` toward `to` by `fac`.
pub trait Lerp<F>: Sized {
    fn lerp(self, to: Self, fac: F) -> Self;
}

impl<F: Num + Copy> Lerp<F> for F {
    fn lerp(self, to: F, fac: F) -> F {
        to * fac + (F::one() - fac) * self
    }
}
