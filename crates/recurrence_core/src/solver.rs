use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::relation::Recurrence;
use crate::roots::CharacteristicRoots;

/// The closed form `S(k) = Σ coefficient_i · root_i^k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClosedForm {
    Order1 {
        coefficient: f64,
        root: f64,
    },
    Order2 {
        coefficients: [f64; 2],
        roots: [f64; 2],
    },
}

impl ClosedForm {
    /// Evaluates the closed form at sequence index `k`.
    pub fn eval(&self, k: u32) -> f64 {
        match self {
            Self::Order1 { coefficient, root } => coefficient * root.powi(k as i32),
            Self::Order2 {
                coefficients,
                roots,
            } => {
                coefficients[0] * roots[0].powi(k as i32)
                    + coefficients[1] * roots[1].powi(k as i32)
            }
        }
    }
}

/// Solves for the closed-form coefficients from the initial conditions.
///
/// For order 2 the two conditions give the 2×2 system
/// `root_j^index_i · x_j = value_i`, solved by LU factorization. A singular
/// matrix (repeated root, or both conditions at the same index) and any
/// non-finite result surface as [`SolveError::SingularSystem`].
pub fn solve(
    relation: &Recurrence,
    roots: &CharacteristicRoots,
) -> Result<ClosedForm, SolveError> {
    match (relation, roots) {
        (Recurrence::Order1 { condition, .. }, CharacteristicRoots::Order1(root)) => {
            let denominator = root.powi(condition.index as i32);
            if denominator == 0.0 {
                return Err(SolveError::SingularSystem(
                    "zero root raised to a positive index".into(),
                ));
            }
            let coefficient = finite_or_singular(condition.value / denominator)?;
            Ok(ClosedForm::Order1 {
                coefficient,
                root: *root,
            })
        }
        (Recurrence::Order2 { conditions, .. }, CharacteristicRoots::Order2(first, second)) => {
            // One row per initial condition, one column per root.
            let matrix = Matrix2::new(
                first.powi(conditions[0].index as i32),
                second.powi(conditions[0].index as i32),
                first.powi(conditions[1].index as i32),
                second.powi(conditions[1].index as i32),
            );
            let rhs = Vector2::new(conditions[0].value, conditions[1].value);
            let solution = matrix.lu().solve(&rhs).ok_or_else(|| {
                SolveError::SingularSystem(
                    "the initial conditions do not determine the coefficients \
                     (repeated root or duplicate condition index)"
                        .into(),
                )
            })?;
            Ok(ClosedForm::Order2 {
                coefficients: [
                    finite_or_singular(solution[0])?,
                    finite_or_singular(solution[1])?,
                ],
                roots: [*first, *second],
            })
        }
        _ => Err(SolveError::OrderMismatch),
    }
}

fn finite_or_singular(value: f64) -> Result<f64, SolveError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolveError::SingularSystem(format!(
            "solver produced a non-finite coefficient ({value})"
        )))
    }
}
