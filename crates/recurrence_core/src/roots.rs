use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::relation::Recurrence;

/// Real roots of the characteristic polynomial, in quadratic-formula order
/// for order 2 (`+√discriminant` first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CharacteristicRoots {
    Order1(f64),
    Order2(f64, f64),
}

/// Computes the root(s) of the characteristic polynomial.
///
/// A negative discriminant yields [`SolveError::NoRealSolution`]. A zero
/// discriminant is not special-cased: both roots come out equal and the
/// coefficient solver rejects the resulting singular system.
pub fn characteristic_roots(relation: &Recurrence) -> Result<CharacteristicRoots, SolveError> {
    if relation.leading_coefficient() == 0.0 {
        return Err(SolveError::ZeroLeadingCoefficient);
    }

    match relation {
        Recurrence::Order1 { coeffs, .. } => {
            let root = -coeffs[1] / coeffs[0];
            debug!("characteristic root: {root}");
            Ok(CharacteristicRoots::Order1(root))
        }
        Recurrence::Order2 { coeffs, .. } => {
            let discriminant = coeffs[1] * coeffs[1] - 4.0 * coeffs[0] * coeffs[2];
            if discriminant < 0.0 {
                return Err(SolveError::NoRealSolution { discriminant });
            }
            let sqrt_d = discriminant.sqrt();
            let first = (-coeffs[1] + sqrt_d) / (2.0 * coeffs[0]);
            let second = (-coeffs[1] - sqrt_d) / (2.0 * coeffs[0]);
            debug!("characteristic roots: {first}, {second}");
            Ok(CharacteristicRoots::Order2(first, second))
        }
    }
}
