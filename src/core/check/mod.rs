use std::fmt::Display;

use tracing::{info, instrument};

use crate::core::counter::Counter;
use crate::core::increment::double_increment;
use crate::error::Error;

/// Values left behind by a successful [`run_checks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub integer: i32,
    pub counter: Counter,
}

/// Runs `double_increment` over an `i32` seeded with `start` and over a
/// fresh [`Counter`], verifying both land two steps further on.
#[instrument(name = "run_checks", level = "info")]
pub fn run_checks(start: i32) -> Result<CheckReport, Error> {
    let expected = start.checked_add(2).ok_or(Error::StartOutOfRange(start))?;

    let mut x = start;
    let result = *double_increment(&mut x);
    ensure("double_increment result", expected, result)?;
    ensure("incremented variable", expected, x)?;
    info!("Integer {} double-incremented to {}", start, x);

    let mut counter = Counter::default();
    double_increment(&mut counter);
    ensure("counter value", 2, counter.value)?;
    info!("Counter double-incremented to {}", counter.value);

    Ok(CheckReport { integer: x, counter })
}

/// Returns `Error::Mismatch` (and logs it) unless `expected == actual`.
pub(crate) fn ensure<T>(check: &'static str, expected: T, actual: T) -> Result<(), Error>
where
    T: PartialEq + Display,
{
    if expected == actual {
        return Ok(());
    }
    tracing::error!("{} mismatch: expected {}, got {}", check, expected, actual);
    Err(Error::Mismatch {
        check,
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}
