//! The two-pass constrained-greedy assignment engine.
//!
//! Generation is a single synchronous computation: the date range is
//! expanded, every anchor day (Saturday) is assigned first, then every
//! remaining day is filled while honoring adjacency and weekend
//! constraints. There is no backtracking: when constraints cannot all be
//! satisfied on a day they are degraded in a fixed priority order, and a
//! poor earlier choice is never revisited. The only external input besides
//! the roster and range is the injected tie-break random source.

mod anchor_pass;
mod cycle;
mod fairness;
mod fill_pass;
mod weekend;

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Person, Schedule};

pub use anchor_pass::assign_anchor_days;
pub use cycle::cycle_assignment;
pub use fairness::{FairnessCounters, FairnessTracker};
pub use fill_pass::assign_fill_days;
pub use weekend::{in_weekend_window, is_anchor_day, last_elapsed_weekend, worked_last_weekend};

/// The result of a full generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    /// The finished schedule: exactly one entry per day of the range.
    pub schedule: Schedule,
    /// Final fairness counters per person, for display only.
    pub fairness: BTreeMap<String, FairnessCounters>,
}

/// Generates a schedule for the given range and roster.
///
/// Runs the anchor pass and then the fill pass over the expanded day
/// sequence and returns the finished schedule together with the final
/// fairness snapshot. The function is pure apart from `rng`: with a fixed
/// seed the output is fully deterministic, otherwise tie-break ordering
/// among equally-ranked candidates varies run to run by design.
///
/// # Errors
///
/// - [`EngineError::InvalidRange`] when the range's start is after its end.
/// - [`EngineError::InvalidRoster`] on an empty or duplicate person id.
///
/// A day with no eligible candidate is not an error; it is recorded as an
/// explicit unassigned entry and generation continues.
///
/// # Example
///
/// ```
/// use stable_scheduler::engine::generate;
/// use stable_scheduler::models::{DateRange, Person};
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// ).unwrap();
/// let people = vec![
///     Person { id: "a".into(), name: "A".into(), blocked_dates: Default::default() },
///     Person { id: "b".into(), name: "B".into(), blocked_dates: Default::default() },
/// ];
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let outcome = generate(range, &people, &mut rng).unwrap();
/// assert_eq!(outcome.schedule.len(), 31);
/// ```
pub fn generate<R: Rng + ?Sized>(
    range: DateRange,
    people: &[Person],
    rng: &mut R,
) -> EngineResult<GenerationOutcome> {
    // Re-validate: a range arriving through deserialization bypasses
    // DateRange::new.
    let range = DateRange::new(range.start, range.end)?;
    validate_roster(people)?;

    let days = range.days();
    let mut schedule = Schedule::new();
    let mut tracker = FairnessTracker::new(people);

    assign_anchor_days(&days, people, &mut schedule, &mut tracker, rng);
    assign_fill_days(&days, people, &mut schedule, &mut tracker, rng);

    Ok(GenerationOutcome {
        schedule,
        fairness: tracker.snapshot(),
    })
}

/// Rejects rosters with empty or duplicate person ids.
///
/// An empty roster is accepted: every day simply ends up unassigned.
fn validate_roster(people: &[Person]) -> EngineResult<()> {
    let mut seen = BTreeSet::new();
    for person in people {
        if person.id.is_empty() {
            return Err(EngineError::InvalidRoster {
                field: "id".to_string(),
                message: "person id must not be empty".to_string(),
            });
        }
        if !seen.insert(person.id.as_str()) {
            return Err(EngineError::InvalidRoster {
                field: "id".to_string(),
                message: format!("duplicate person id '{}'", person.id),
            });
        }
    }
    Ok(())
}
