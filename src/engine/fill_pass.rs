//! Fill assignment pass.
//!
//! Assigns every non-anchor day after the anchor pass has completed,
//! consulting the partially-built schedule for both the previous and the
//! following day. Adjacency is a hard constraint with a single documented
//! relaxation; repeating the most recently elapsed weekend is a soft
//! constraint that never empties the candidate pool.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Assignment, Person, Schedule};

use super::fairness::FairnessTracker;
use super::weekend::{in_weekend_window, is_anchor_day, worked_last_weekend};

/// Assigns all remaining (non-anchor) days, in ascending date order.
///
/// For each day:
///
/// 1. Candidates are all people not blocked on the day.
/// 2. Whoever holds the immediately preceding day and whoever holds the
///    immediately following day are removed. If that empties the pool, the
///    preceding-day person is re-admitted while the following-day person
///    stays excluded (the following day may hold a not-yet-surrounded
///    anchor result, and conflicting with a finalized day is worse). If
///    the pool is still empty the day is recorded unassigned.
/// 3. Inside a Friday/Saturday/Sunday window, candidates who worked any
///    day of the most recently fully elapsed weekend are removed, but only
///    if at least one candidate remains (soft constraint).
/// 4. Remaining candidates are shuffled, then stably sorted by ascending
///    total-day count; the first is assigned and their total advances.
pub fn assign_fill_days<R: Rng + ?Sized>(
    days: &[NaiveDate],
    people: &[Person],
    schedule: &mut Schedule,
    tracker: &mut FairnessTracker,
    rng: &mut R,
) {
    for &day in days.iter().filter(|&&day| !is_anchor_day(day)) {
        let eligible: Vec<&Person> = people
            .iter()
            .filter(|person| person.is_available(day))
            .collect();

        let Some(mut candidates) = apply_adjacency(&eligible, schedule, day) else {
            schedule.set(day, Assignment::Unassigned);
            continue;
        };

        if in_weekend_window(day) {
            let rested: Vec<&Person> = candidates
                .iter()
                .copied()
                .filter(|person| !worked_last_weekend(schedule, &person.id, day))
                .collect();
            if !rested.is_empty() {
                candidates = rested;
            }
        }

        candidates.shuffle(rng);
        candidates.sort_by_key(|person| tracker.total_days(&person.id));

        let chosen = candidates[0];
        tracker.record_day(&chosen.id);
        schedule.set(day, Assignment::Person(chosen.id.clone()));
    }
}

/// Applies the hard adjacency constraint with its single relaxation.
///
/// Returns `None` when no candidate survives even after re-admitting the
/// preceding-day person.
fn apply_adjacency<'a>(
    eligible: &[&'a Person],
    schedule: &Schedule,
    day: NaiveDate,
) -> Option<Vec<&'a Person>> {
    let previous = day
        .pred_opt()
        .and_then(|d| schedule.assigned_person(d).map(str::to_string));
    let following = day
        .checked_add_days(Days::new(1))
        .and_then(|d| schedule.assigned_person(d).map(str::to_string));

    let strict: Vec<&Person> = eligible
        .iter()
        .copied()
        .filter(|person| {
            Some(person.id.as_str()) != previous.as_deref()
                && Some(person.id.as_str()) != following.as_deref()
        })
        .collect();
    if !strict.is_empty() {
        return Some(strict);
    }

    // Relaxation: re-admit the preceding-day person, keep excluding the
    // following-day person.
    let relaxed: Vec<&Person> = eligible
        .iter()
        .copied()
        .filter(|person| Some(person.id.as_str()) != following.as_deref())
        .collect();
    if relaxed.is_empty() { None } else { Some(relaxed) }
}
