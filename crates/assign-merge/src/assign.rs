//! The selective merge.
//!
//! [`assign_defined`] copies each source's own enumerable properties onto a
//! destination, left to right, skipping any property whose value is
//! [`Value::Undefined`]. Values are moved in as-is: nested containers and
//! callables keep their identity, nothing is cloned deeply or invoked.
//!
//! # Invariants
//!
//! - The returned reference is the destination passed in.
//! - For each key, the last source holding a defined value for it wins.
//! - A key no source defines keeps its prior destination value, including a
//!   prior `Undefined`.

use tracing::{debug, trace};

use assign_types::{Container, Value};

use crate::error::AssignResult;
use crate::source::AssignSource;

/// Counters describing one merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignReport {
    /// Sources processed, null ones included.
    pub sources: usize,
    /// Sources that exposed no own enumerable entries.
    pub empty_sources: usize,
    /// Properties written onto the destination.
    pub assigned: usize,
    /// Properties skipped because their value was undefined.
    pub skipped_undefined: usize,
}

/// Merge `sources` into `destination`, skipping undefined values.
///
/// Returns the destination itself. Fails only if the destination refuses an
/// assignment; see [`AssignError`](crate::AssignError).
pub fn assign_defined<'d, I>(
    destination: &'d mut Container,
    sources: I,
) -> AssignResult<&'d mut Container>
where
    I: IntoIterator,
    I::Item: AssignSource,
{
    assign_defined_with_report(destination, sources).map(|(destination, _)| destination)
}

/// Same as [`assign_defined`], also returning an [`AssignReport`].
pub fn assign_defined_with_report<'d, I>(
    destination: &'d mut Container,
    sources: I,
) -> AssignResult<(&'d mut Container, AssignReport)>
where
    I: IntoIterator,
    I::Item: AssignSource,
{
    let mut report = AssignReport::default();

    for (position, source) in sources.into_iter().enumerate() {
        report.sources += 1;
        let entries = source.own_entries();
        if entries.is_empty() {
            report.empty_sources += 1;
            continue;
        }

        for (key, value) in entries {
            if let Value::Undefined = value {
                trace!(source = position, key = %key, "skipped undefined value");
                report.skipped_undefined += 1;
                continue;
            }
            destination.set(key, value)?;
            report.assigned += 1;
        }
    }

    debug!(
        sources = report.sources,
        empty = report.empty_sources,
        assigned = report.assigned,
        skipped = report.skipped_undefined,
        "assigned defined properties"
    );

    Ok((destination, report))
}
