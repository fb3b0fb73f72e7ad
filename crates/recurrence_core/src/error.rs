use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between loading an input file and printing
/// a closed form.
///
/// `NoRealSolution` is a valid mathematical outcome rather than a defect;
/// the driver treats it as a normal termination path.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(
        "Could not open file: {}. Please check that the file exists and contains proper data.",
        path.display()
    )]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Too few terms. Check your data.")]
    TooFewTerms { terms: i64 },

    #[error("Too few conditions. Check your data.")]
    TooFewConditions { conditions: i64 },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Leading coefficient must be nonzero.")]
    ZeroLeadingCoefficient,

    #[error("No real solution")]
    NoRealSolution { discriminant: f64 },

    /// The initial conditions do not pin down the closed-form coefficients,
    /// e.g. a repeated characteristic root or two conditions at the same
    /// index. The reference implementation silently produced NaN here.
    #[error("Singular system: {0}")]
    SingularSystem(String),

    #[error("Root set does not match recurrence order.")]
    OrderMismatch,
}
