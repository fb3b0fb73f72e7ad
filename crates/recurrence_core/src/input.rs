use std::fs;
use std::path::Path;

use crate::error::SolveError;
use crate::relation::{InitialCondition, Recurrence};

/// Reads a recurrence relation from a plain-text input file.
///
/// Layout (whitespace-separated numeric tokens):
/// ```text
/// <terms>                       2 or 3
/// <coeff_0> <coeff_1> [<coeff_2>]
/// <conditionCount>              terms − 1
/// <index_0> <value_0>
/// [<index_1> <value_1>]
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<Recurrence, SolveError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SolveError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses the token stream of an input file. Separated from [`load`] so the
/// grammar can be exercised without touching the filesystem.
pub fn parse(text: &str) -> Result<Recurrence, SolveError> {
    let mut tokens = text.split_whitespace();

    let terms = next_int(&mut tokens, "term count")?;
    if terms < 2 {
        return Err(SolveError::TooFewTerms { terms });
    }
    if terms > 3 {
        return Err(SolveError::MalformedInput(format!(
            "recurrences of order greater than 2 are not supported, got {terms} terms"
        )));
    }

    let mut coeffs = [0.0f64; 3];
    for (i, slot) in coeffs.iter_mut().take(terms as usize).enumerate() {
        *slot = next_f64(&mut tokens, &format!("coefficient {i}"))?;
    }

    let conditions = next_int(&mut tokens, "condition count")?;
    if conditions < 1 {
        return Err(SolveError::TooFewConditions { conditions });
    }
    if conditions != terms - 1 {
        return Err(SolveError::MalformedInput(format!(
            "an order-{} recurrence needs exactly {} initial condition(s), got {conditions}",
            terms - 1,
            terms - 1
        )));
    }

    if terms == 2 {
        let condition = next_condition(&mut tokens, 0)?;
        Ok(Recurrence::Order1 {
            coeffs: [coeffs[0], coeffs[1]],
            condition,
        })
    } else {
        let first = next_condition(&mut tokens, 0)?;
        let second = next_condition(&mut tokens, 1)?;
        Ok(Recurrence::Order2 {
            coeffs,
            conditions: [first, second],
        })
    }
}

fn next_f64<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<f64, SolveError> {
    let token = tokens
        .next()
        .ok_or_else(|| SolveError::MalformedInput(format!("missing {what}")))?;
    token
        .parse::<f64>()
        .map_err(|_| SolveError::MalformedInput(format!("expected a number for {what}, got {token:?}")))
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<i64, SolveError> {
    let token = tokens
        .next()
        .ok_or_else(|| SolveError::MalformedInput(format!("missing {what}")))?;
    token
        .parse::<i64>()
        .map_err(|_| SolveError::MalformedInput(format!("expected an integer for {what}, got {token:?}")))
}

fn next_condition<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    slot: usize,
) -> Result<InitialCondition, SolveError> {
    // The index token is a real number truncated toward zero, matching the
    // reference input format.
    let index = next_f64(tokens, &format!("index of initial condition {slot}"))?.trunc();
    if index < 0.0 {
        return Err(SolveError::MalformedInput(format!(
            "initial condition {slot} has negative index {index}"
        )));
    }
    let value = next_f64(tokens, &format!("value of initial condition {slot}"))?;
    Ok(InitialCondition {
        index: index as u32,
        value,
    })
}
