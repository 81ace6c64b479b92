use std::ops::*;

use num_traits::{Float, FloatConst};

use crate::num::{deg_to_rad, rad_to_deg, wrap_to_positive};

/// An angle, stored in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle<F = f64> {
    pub radians: F,
}

impl<F> Angle<F> {
    #[inline]
    pub const fn radians(radians: F) -> Self {
        Angle { radians }
    }

    #[inline]
    pub fn get(self) -> F {
        self.radians
    }
}

impl<F: Trig> Angle<F> {
    #[inline]
    pub fn degrees(deg: F) -> Self {
        Angle {
            radians: F::degrees_to_radians(deg),
        }
    }

    #[inline]
    pub fn to_degrees(self) -> F {
        F::radians_to_degrees(self.radians)
    }
}

impl<F: Float + FloatConst> Angle<F> {
    /// Returns this angle in the [0..2*PI[ range.
    pub fn positive(self) -> Self {
        Angle::radians(wrap_to_positive(self.radians, Angle::two_pi().radians))
    }

    /// Returns this angle in the ]-PI..PI] range.
    pub fn signed(self) -> Self {
        Angle::pi() - (Angle::pi() - self).positive()
    }

    /// Returns (sin(self), cos(self)).
    #[inline]
    pub fn sin_cos(self) -> (F, F) {
        self.radians.sin_cos()
    }

    pub fn zero() -> Self {
        Angle::radians(F::zero())
    }

    pub fn pi() -> Self {
        Angle::radians(F::PI())
    }

    pub fn two_pi() -> Self {
        Angle::radians(F::TAU())
    }

    pub fn frac_pi_2() -> Self {
        Angle::radians(F::FRAC_PI_2())
    }

    pub fn frac_pi_4() -> Self {
        Angle::radians(F::FRAC_PI_4())
    }
}

impl<F: Add<Output = F>> Add for Angle<F> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Angle::radians(self.radians + other.radians)
    }
}

impl<F: AddAssign> AddAssign for Angle<F> {
    fn add_assign(&mut self, other: Self) {
        self.radians += other.radians;
    }
}

impl<F: Sub<Output = F>> Sub for Angle<F> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Angle::radians(self.radians - other.radians)
    }
}

impl<F: SubAssign> SubAssign for Angle<F> {
    fn sub_assign(&mut self, other: Self) {
        self.radians -= other.radians;
    }
}

impl<F: Mul<Output = F>> Mul<F> for Angle<F> {
    type Output = Self;
    #[inline]
    fn mul(self, factor: F) -> Self {
        Angle::radians(self.radians * factor)
    }
}

impl<F: Div<Output = F>> Div<F> for Angle<F> {
    type Output = Self;
    #[inline]
    fn div(self, factor: F) -> Self {
        Angle::radians(self.radians / factor)
    }
}

impl<F: Neg<Output = F>> Neg for Angle<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Angle::radians(-self.radians)
    }
}

pub trait Trig: Float + FloatConst {
    fn degrees_to_radians(deg: Self) -> Self;
    fn radians_to_degrees(rad: Self) -> Self;
}

macro_rules! trig {
    ($ty:ident) => {
        impl Trig for $ty {
            #[inline]
            fn degrees_to_radians(deg: Self) -> Self {
                deg_to_rad(deg)
            }

            #[inline]
            fn radians_to_degrees(rad: Self) -> Self {
                rad_to_deg(rad)
            }
        }
    };
}

trig!(f32);
trig!(f64);
