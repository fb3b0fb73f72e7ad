use std::fmt;

use crate::solver::ClosedForm;

/// Renders the closed form as `S(k) = c(r)^k [+ c(r)^k]`. Order-1 solutions
/// print with six decimal places, order-2 with three, matching the reference
/// output.
impl fmt::Display for ClosedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosedForm::Order1 { coefficient, root } => {
                write!(f, "S(k) = {coefficient:.6}({root:.6})^k")
            }
            ClosedForm::Order2 {
                coefficients,
                roots,
            } => write!(
                f,
                "S(k) = {:.3}({:.3})^k + {:.3}({:.3})^k",
                coefficients[0], roots[0], coefficients[1], roots[1]
            ),
        }
    }
}
