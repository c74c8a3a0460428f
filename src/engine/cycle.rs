//! Manual override cycling.
//!
//! Lets a human correct a single already-generated day without re-running
//! the engine: each invocation advances the day's assignment to the next
//! eligible person, then to explicitly unassigned, then wraps around. The
//! operation is constraint-unaware on purpose: it never consults fairness
//! counters, adjacency, or weekend rules.

use chrono::NaiveDate;

use crate::models::{Assignment, Person, Schedule};

/// Advances one day's assignment to the next eligible candidate.
///
/// The candidate list is every person whose blocked dates exclude the day,
/// in roster order, followed by a trailing unassigned slot. The current
/// assignee's position in that list determines the successor; an
/// unassigned day sits on the trailing slot, and a stale assignee (no
/// longer eligible or no longer in the roster) is treated as not found, so
/// the next invocation lands on the first eligible candidate. A day absent
/// from the schedule is treated as currently unassigned.
///
/// Returns a new schedule with exactly that one day changed; the input is
/// never mutated.
///
/// # Example
///
/// ```
/// use stable_scheduler::engine::cycle_assignment;
/// use stable_scheduler::models::{Assignment, Person, Schedule};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let people = vec![
///     Person { id: "a".into(), name: "A".into(), blocked_dates: Default::default() },
///     Person { id: "b".into(), name: "B".into(), blocked_dates: Default::default() },
/// ];
/// let mut schedule = Schedule::new();
/// schedule.set(day, Assignment::Person("a".into()));
///
/// let next = cycle_assignment(&schedule, day, &people);
/// assert_eq!(next.assigned_person(day), Some("b"));
/// ```
pub fn cycle_assignment(schedule: &Schedule, day: NaiveDate, people: &[Person]) -> Schedule {
    let eligible: Vec<&str> = people
        .iter()
        .filter(|person| person.is_available(day))
        .map(|person| person.id.as_str())
        .collect();

    // Position in the cycle: eligible people occupy 0..len, the trailing
    // unassigned slot occupies len, a stale assignee reads as -1.
    let position: i64 = match schedule.get(day) {
        Some(Assignment::Person(current)) => eligible
            .iter()
            .position(|id| *id == current)
            .map(|index| index as i64)
            .unwrap_or(-1),
        Some(Assignment::Unassigned) | None => eligible.len() as i64,
    };

    let slots = eligible.len() as i64 + 1;
    let next = (position + 1).rem_euclid(slots) as usize;

    let assignment = match eligible.get(next) {
        Some(id) => Assignment::Person((*id).to_string()),
        None => Assignment::Unassigned,
    };

    let mut updated = schedule.clone();
    updated.set(day, assignment);
    updated
}
