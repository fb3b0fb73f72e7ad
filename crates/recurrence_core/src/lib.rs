//! Closed-form solutions of linear homogeneous recurrence relations of
//! order 1 and 2.
//!
//! The pipeline runs in four stages: `input` loads a relation from a text
//! file, `roots` computes the roots of its characteristic polynomial,
//! `solver` determines the closed-form coefficients from the initial
//! conditions, and `report` renders the resulting formula.
//!
//! Every stage is a pure function returning `Result`; nothing in this crate
//! prints or terminates the process.

pub mod error;
pub mod input;
pub mod relation;
pub mod report;
pub mod roots;
pub mod solver;
