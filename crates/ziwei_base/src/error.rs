//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the chart pipeline.
///
/// Every stage reports through this one type, so a failed stage surfaces as a
/// single error from [`compute_chart`](crate::compute_chart) and no partial
/// chart is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// A lunisolar input field is outside its contract.
    InvalidInput(&'static str),
    /// A lookup into a table that is total by construction came back empty.
    TableInconsistency(&'static str),
}

impl ChartError {
    /// Whether the caller supplied bad input (as opposed to an engine defect).
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid lunisolar input: {msg}"),
            Self::TableInconsistency(msg) => write!(f, "table consistency failure: {msg}"),
        }
    }
}

impl Error for ChartError {}
