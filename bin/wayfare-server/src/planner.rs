//! Offline itinerary generator.
//!
//! Produces a deterministic-shaped, randomly-seeded multi-day plan: the day
//! count and per-day activity count are fully determined by the input, while
//! activity wording and time slots are drawn from templates with thread-local
//! randomness.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use utoipa::ToSchema;

/// How densely each day is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Serialize, Deserialize, ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    Moderate,
    Packed,
}

impl Pace {
    /// Activities per day; always within the documented 2–4 band.
    pub fn activities_per_day(self) -> usize {
        match self {
            Pace::Relaxed => 2,
            Pace::Moderate => 3,
            Pace::Packed => 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    /// Clock-time slot, e.g. `"09:30"`.
    pub time: String,
    pub title: String,
    pub interest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Plan {
    pub duration_days: u32,
    pub pace: Pace,
    pub days: Vec<DayPlan>,
}

const TEMPLATES: &[&str] = &[
    "Guided morning walk exploring {}",
    "Hands-on workshop: {}",
    "Local's tour of the best {} spots",
    "Self-guided afternoon around {}",
    "Evening dedicated to {}",
    "Hidden-gem crawl for {} lovers",
];

const SLOTS: &[&[&str]] = &[
    &["09:00", "09:30", "10:00"],
    &["13:00", "13:30", "14:00"],
    &["16:00", "16:30", "17:00"],
    &["19:30", "20:00", "20:30"],
];

/// Build a plan with `duration_days` days at the given pace, assigning
/// interests round-robin across the whole plan.
///
/// Validation (positive duration, non-empty interests) happens at the route
/// layer; this function assumes sane inputs.
pub fn generate(interests: &[String], duration_days: u32, pace: Pace) -> Plan {
    let mut rng = rand::thread_rng();
    let per_day = pace.activities_per_day();
    let mut interest_cursor = 0usize;

    let days = (1..=duration_days)
        .map(|day| {
            let activities = (0..per_day)
                .map(|slot_idx| {
                    let interest = interests[interest_cursor % interests.len()].clone();
                    interest_cursor += 1;

                    let template = TEMPLATES[rng.gen_range(0..TEMPLATES.len())];
                    let slot_band = SLOTS[slot_idx % SLOTS.len()];
                    let time = slot_band
                        .choose(&mut rng)
                        .copied()
                        .unwrap_or("09:00")
                        .to_owned();

                    Activity {
                        time,
                        title: template.replace("{}", &interest),
                        interest,
                    }
                })
                .collect();
            DayPlan { day, activities }
        })
        .collect();

    Plan { duration_days, pace, days }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn interests(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn relaxed_three_days_has_three_days_of_two() {
        let plan = generate(&interests(&["food", "music"]), 3, Pace::Relaxed);
        assert_eq!(plan.days.len(), 3);
        for day in &plan.days {
            assert!((2..=4).contains(&day.activities.len()));
            assert_eq!(day.activities.len(), 2);
        }
    }

    #[test]
    fn interests_rotate_round_robin() {
        let plan = generate(&interests(&["food", "music", "art"]), 2, Pace::Packed);
        let seen: Vec<&str> = plan
            .days
            .iter()
            .flat_map(|d| d.activities.iter().map(|a| a.interest.as_str()))
            .collect();
        let expected = ["food", "music", "art", "food", "music", "art", "food", "music"];
        assert_eq!(seen, expected);
    }

    #[test]
    fn single_interest_fills_every_slot() {
        let plan = generate(&interests(&["history"]), 1, Pace::Moderate);
        assert!(plan.days[0].activities.iter().all(|a| a.interest == "history"));
    }

    #[test]
    fn day_numbers_are_one_based_and_sequential() {
        let plan = generate(&interests(&["food"]), 4, Pace::Relaxed);
        let numbers: Vec<u32> = plan.days.iter().map(|d| d.day).collect();
        assert_eq!(numbers, [1, 2, 3, 4]);
    }

    #[test]
    fn pace_parses_lowercase_only_known_values() {
        assert_eq!(Pace::from_str("relaxed").unwrap(), Pace::Relaxed);
        assert_eq!(Pace::from_str("packed").unwrap(), Pace::Packed);
        assert!(Pace::from_str("extreme").is_err());
    }
}
