use crate::cost::{big_gaussian_elimination_cost, big_inverse_method_cost};
use clap::ValueEnum;
use num_bigint::BigInt;

pub trait CostModel {
    /// Label used in report output.
    fn name(&self) -> &'static str;

    /// Asymptotic class of the modelled cost.
    fn complexity(&self) -> &'static str;

    /// Exact estimated operation count for an `n x n` system.
    fn cost(&self, n: i64) -> BigInt;
}

/// Gaussian elimination without pivoting.
pub struct GaussianElimination;

impl CostModel for GaussianElimination {
    fn name(&self) -> &'static str {
        "Gaussian Elimination"
    }

    fn complexity(&self) -> &'static str {
        "O(n^3)"
    }

    fn cost(&self, n: i64) -> BigInt {
        big_gaussian_elimination_cost(n)
    }
}

/// Explicit inversion followed by a matrix-vector product.
pub struct InverseMethod;

impl CostModel for InverseMethod {
    fn name(&self) -> &'static str {
        "Inverse Method"
    }

    fn complexity(&self) -> &'static str {
        "O(n^3 + n^2)"
    }

    fn cost(&self, n: i64) -> BigInt {
        big_inverse_method_cost(n)
    }
}

#[derive(Debug, PartialEq, Copy, Clone, ValueEnum)]
pub enum Method {
    /// Gaussian elimination without pivoting.
    Gauss,
    /// Explicit inverse times the right-hand side.
    Inverse,
}

impl Method {
    pub fn model(&self) -> &'static dyn CostModel {
        match self {
            Method::Gauss => &GaussianElimination,
            Method::Inverse => &InverseMethod,
        }
    }

    pub fn all() -> [Method; 2] {
        [Method::Gauss, Method::Inverse]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_delegate() {
        assert_eq!(Method::Gauss.model().cost(100), BigInt::from(495_000));
        assert_eq!(Method::Inverse.model().cost(100), BigInt::from(1_010_000));
        assert_eq!(
            Method::Inverse.model().cost(3_000_000).to_string(),
            "27000009000000000000"
        );
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = Method::all().iter().map(|m| m.model().name()).collect();
        assert_eq!(names, vec!["Gaussian Elimination", "Inverse Method"]);
    }

    #[test]
    fn test_method_from_str() -> Result<(), String> {
        assert_eq!(Method::from_str("gauss", false)?, Method::Gauss);
        assert_eq!(Method::from_str("inverse", false)?, Method::Inverse);
        assert!(Method::from_str("lu", false).is_err());
        Ok(())
    }
}
