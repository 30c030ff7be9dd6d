use crate::model::{CostModel, GaussianElimination, InverseMethod, Method};
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// Side-by-side operation counts for one system size.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub n: i64,
    pub gaussian: BigInt,
    pub inverse: BigInt,
}

impl Comparison {
    pub fn new(n: i64) -> Self {
        let gaussian = GaussianElimination.cost(n);
        let inverse = InverseMethod.cost(n);
        log::debug!("n = {}: gaussian = {}, inverse = {}", n, gaussian, inverse);
        Self {
            n,
            gaussian,
            inverse,
        }
    }

    /// Operations spent by the inverse approach beyond elimination.
    pub fn extra_work(&self) -> BigInt {
        &self.inverse - &self.gaussian
    }

    /// `inverse / gaussian`, undefined while elimination costs nothing.
    pub fn ratio(&self) -> Option<f64> {
        if self.gaussian.is_zero() {
            return None;
        }
        Some(self.inverse.to_f64()? / self.gaussian.to_f64()?)
    }

    /// The cheaper method. Elimination wins ties since it never forms the
    /// full inverse.
    pub fn preferred(&self) -> Method {
        if self.inverse < self.gaussian {
            Method::Inverse
        } else {
            Method::Gauss
        }
    }
}
