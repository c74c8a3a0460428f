//! Anchor assignment pass.
//!
//! Assigns every anchor day (Saturday) before any other day is considered,
//! ranking candidates purely on anchor-specific load so that no later,
//! lower-value day can starve fairness on the highest-value day.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Assignment, Person, Schedule};

use super::fairness::FairnessTracker;
use super::weekend::is_anchor_day;

/// Assigns all anchor days within the expanded day sequence, in ascending
/// date order.
///
/// For each anchor day:
///
/// 1. Candidates are all people not blocked on the day. An empty pool
///    records an explicit unassigned entry and leaves counters untouched.
/// 2. The person who held the anchor day exactly 7 days earlier is removed,
///    but only if at least one candidate remains (soft constraint).
/// 3. Remaining candidates are shuffled, then stably sorted by ascending
///    anchor-day count and total-day count, so equally-ranked candidates
///    are chosen with equal probability rather than in input order.
/// 4. The first candidate is assigned and both of their counters advance.
pub fn assign_anchor_days<R: Rng + ?Sized>(
    days: &[NaiveDate],
    people: &[Person],
    schedule: &mut Schedule,
    tracker: &mut FairnessTracker,
    rng: &mut R,
) {
    for &day in days.iter().filter(|&&day| is_anchor_day(day)) {
        let mut candidates: Vec<&Person> = people
            .iter()
            .filter(|person| person.is_available(day))
            .collect();

        if candidates.is_empty() {
            schedule.set(day, Assignment::Unassigned);
            continue;
        }

        if let Some(previous_holder) = previous_anchor_holder(schedule, day) {
            let without_repeat: Vec<&Person> = candidates
                .iter()
                .copied()
                .filter(|person| person.id != previous_holder)
                .collect();
            if !without_repeat.is_empty() {
                candidates = without_repeat;
            }
        }

        candidates.shuffle(rng);
        candidates.sort_by_key(|person| {
            (tracker.anchor_days(&person.id), tracker.total_days(&person.id))
        });

        let chosen = candidates[0];
        tracker.record_anchor_day(&chosen.id);
        schedule.set(day, Assignment::Person(chosen.id.clone()));
    }
}

/// Returns the id of whoever holds the anchor day exactly one week earlier.
fn previous_anchor_holder(schedule: &Schedule, day: NaiveDate) -> Option<String> {
    let week_earlier = day.checked_sub_days(Days::new(7))?;
    schedule.assigned_person(week_earlier).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn person(id: &str, blocked: &[&str]) -> Person {
        Person {
            id: id.to_string(),
            name: id.to_uppercase(),
            blocked_dates: blocked.iter().map(|s| date(s)).collect(),
        }
    }

    fn run_pass(range: (&str, &str), people: &[Person], seed: u64) -> (Schedule, FairnessTracker) {
        let range = DateRange::new(date(range.0), date(range.1)).unwrap();
        let days = range.days();
        let mut schedule = Schedule::new();
        let mut tracker = FairnessTracker::new(people);
        let mut rng = SmallRng::seed_from_u64(seed);
        assign_anchor_days(&days, people, &mut schedule, &mut tracker, &mut rng);
        (schedule, tracker)
    }

    #[test]
    fn test_only_saturdays_are_processed() {
        let people = vec![person("a", &[])];
        // 2024-03-01 (Fri) through 2024-03-14 (Thu): Saturdays are Mar 2 and Mar 9.
        let (schedule, _) = run_pass(("2024-03-01", "2024-03-14"), &people, 1);

        assert_eq!(schedule.len(), 2);
        assert!(schedule.get(date("2024-03-02")).is_some());
        assert!(schedule.get(date("2024-03-09")).is_some());
        assert!(schedule.get(date("2024-03-01")).is_none());
    }

    #[test]
    fn test_blocked_person_is_never_assigned() {
        let people = vec![person("a", &["2024-03-02"]), person("b", &[])];
        let (schedule, _) = run_pass(("2024-03-02", "2024-03-02"), &people, 1);

        assert_eq!(schedule.assigned_person(date("2024-03-02")), Some("b"));
    }

    #[test]
    fn test_empty_pool_yields_explicit_unassigned_without_counter_update() {
        let people = vec![person("a", &["2024-03-02"])];
        let (schedule, tracker) = run_pass(("2024-03-02", "2024-03-02"), &people, 1);

        assert_eq!(
            schedule.get(date("2024-03-02")),
            Some(&Assignment::Unassigned)
        );
        assert_eq!(tracker.total_days("a"), 0);
        assert_eq!(tracker.anchor_days("a"), 0);
    }

    #[test]
    fn test_consecutive_saturdays_alternate_between_two_people() {
        let people = vec![person("a", &[]), person("b", &[])];
        // Four Saturdays: Mar 2, 9, 16, 23.
        let (schedule, _) = run_pass(("2024-03-01", "2024-03-24"), &people, 7);

        let saturdays = [
            date("2024-03-02"),
            date("2024-03-09"),
            date("2024-03-16"),
            date("2024-03-23"),
        ];
        for pair in saturdays.windows(2) {
            assert_ne!(
                schedule.assigned_person(pair[0]),
                schedule.assigned_person(pair[1]),
                "adjacent Saturdays shared an assignee"
            );
        }
    }

    #[test]
    fn test_repeat_avoidance_relaxes_for_a_single_person_roster() {
        let people = vec![person("a", &[])];
        let (schedule, tracker) = run_pass(("2024-03-01", "2024-03-10"), &people, 1);

        assert_eq!(schedule.assigned_person(date("2024-03-02")), Some("a"));
        assert_eq!(schedule.assigned_person(date("2024-03-09")), Some("a"));
        assert_eq!(tracker.anchor_days("a"), 2);
    }

    #[test]
    fn test_anchor_fairness_spread_is_at_most_one() {
        let people = vec![person("a", &[]), person("b", &[]), person("c", &[])];
        // 2024-03-01..2024-04-30: nine Saturdays.
        let (_, tracker) = run_pass(("2024-03-01", "2024-04-30"), &people, 42);

        let counts: Vec<u32> = ["a", "b", "c"]
            .iter()
            .map(|id| tracker.anchor_days(id))
            .collect();
        let max = *counts.iter().max().unwrap();
        let min = *counts.iter().min().unwrap();
        assert_eq!(counts.iter().sum::<u32>(), 9);
        assert!(max - min <= 1, "anchor spread {:?} exceeds 1", counts);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let people = vec![person("a", &[]), person("b", &[]), person("c", &[])];
        let (first, _) = run_pass(("2024-03-01", "2024-04-30"), &people, 99);
        let (second, _) = run_pass(("2024-03-01", "2024-04-30"), &people, 99);
        assert_eq!(first, second);
    }
}
