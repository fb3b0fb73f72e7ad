use serde::{Deserialize, Serialize};

/// A known value of the sequence at a specific index: `S(index) = value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialCondition {
    pub index: u32,
    pub value: f64,
}

/// A linear homogeneous recurrence relation, written as
/// `coeffs[0]·S(k) + coeffs[1]·S(k−1) [+ coeffs[2]·S(k−2)] = 0`.
///
/// The order is carried by the variant, so the coefficient count and the
/// number of initial conditions always agree by construction. Coefficients
/// run from highest to lowest order and are fixed once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recurrence {
    Order1 {
        coeffs: [f64; 2],
        condition: InitialCondition,
    },
    Order2 {
        coeffs: [f64; 3],
        conditions: [InitialCondition; 2],
    },
}

impl Recurrence {
    pub fn order(&self) -> usize {
        match self {
            Self::Order1 { .. } => 1,
            Self::Order2 { .. } => 2,
        }
    }

    pub fn leading_coefficient(&self) -> f64 {
        match self {
            Self::Order1 { coeffs, .. } => coeffs[0],
            Self::Order2 { coeffs, .. } => coeffs[0],
        }
    }
}
