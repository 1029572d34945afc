//! Watering Reminders
//!
//! Polling check that finds saved plants still waiting for water inside the
//! current reminder window. The check itself is a pure function of the store
//! and a wall-clock time so both front ends can drive it from their own
//! timers:
//!
//! - the browser crate runs it from a gloo interval and asks with
//!   `window.confirm`
//! - natively, [`runner::ReminderRunner`] drives it from a tokio interval
//!   and asks through a [`prompt::Prompter`]

#[cfg(feature = "native")]
pub mod prompt;
#[cfg(feature = "native")]
pub mod runner;

use std::collections::HashSet;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::model::{PlantId, WateringTime};
use crate::store::PlantStore;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_MAX_JITTER_MS: u64 = 5000;

/// Local-clock hour range `[start_hour, end_hour)` for one watering time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    pub time: WateringTime,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl ReminderWindow {
    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

pub const DEFAULT_WINDOWS: [ReminderWindow; 2] = [
    ReminderWindow {
        time: WateringTime::Morning,
        start_hour: 6,
        end_hour: 10,
    },
    ReminderWindow {
        time: WateringTime::Evening,
        start_hour: 17,
        end_hour: 20,
    },
];

/// What to do when a plant is still unwatered on the next poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    /// Prompt again on every poll while the window is open
    EveryCycle,
    /// Prompt at most once per plant, watering time and day
    #[default]
    OncePerWindow,
}

impl std::str::FromStr for RepeatPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "every_cycle" => Ok(RepeatPolicy::EveryCycle),
            "once_per_window" => Ok(RepeatPolicy::OncePerWindow),
            other => Err(format!("unknown repeat policy: {}", other)),
        }
    }
}

/// A prompt due for one plant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub plant_id: PlantId,
    pub plant_name: String,
    pub time: WateringTime,
}

impl Reminder {
    pub fn message(&self) -> String {
        format!(
            "🌱 Don't forget to water your {} this {}!",
            self.plant_name,
            self.time.slot_key()
        )
    }

    /// Full confirmation text, message plus question
    pub fn prompt(&self) -> String {
        format!("{}\n\nMark as watered now?", self.message())
    }
}

/// Stateful reminder scan. State is only used by
/// [`RepeatPolicy::OncePerWindow`].
#[derive(Debug, Clone)]
pub struct ReminderChecker {
    windows: Vec<ReminderWindow>,
    policy: RepeatPolicy,
    prompted: HashSet<(PlantId, WateringTime, NaiveDate)>,
}

impl Default for ReminderChecker {
    fn default() -> Self {
        Self::new(RepeatPolicy::default())
    }
}

impl ReminderChecker {
    pub fn new(policy: RepeatPolicy) -> Self {
        Self::with_windows(policy, DEFAULT_WINDOWS.to_vec())
    }

    pub fn with_windows(policy: RepeatPolicy, windows: Vec<ReminderWindow>) -> Self {
        Self {
            windows,
            policy,
            prompted: HashSet::new(),
        }
    }

    pub fn policy(&self) -> RepeatPolicy {
        self.policy
    }

    /// Windows open at `now`
    pub fn open_windows(&self, now: NaiveDateTime) -> impl Iterator<Item = &ReminderWindow> {
        let hour = now.hour();
        self.windows.iter().filter(move |w| w.contains_hour(hour))
    }

    /// Reminders due at `now`, in store order
    pub fn check(&mut self, store: &PlantStore, now: NaiveDateTime) -> Vec<Reminder> {
        let today = now.date();
        self.prompted.retain(|(_, _, day)| *day == today);

        let open: Vec<WateringTime> = self.open_windows(now).map(|w| w.time).collect();
        let mut due = Vec::new();

        for plant in store.saved() {
            for &time in &open {
                if !plant.waters_at(time) || plant.watering_status.is_done(time) {
                    continue;
                }
                if self.policy == RepeatPolicy::OncePerWindow
                    && !self.prompted.insert((plant.id, time, today))
                {
                    continue;
                }
                due.push(Reminder {
                    plant_id: plant.id,
                    plant_name: plant.name.clone(),
                    time,
                });
            }
        }

        tracing::debug!(hour = now.hour(), due = due.len(), "Reminder scan");
        due
    }
}

/// Random delay before a prompt so many plants don't prompt at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    pub max: Duration,
}

impl Default for Jitter {
    fn default() -> Self {
        Self::from_millis(DEFAULT_MAX_JITTER_MS)
    }
}

impl Jitter {
    pub fn from_millis(max_ms: u64) -> Self {
        Self {
            max: Duration::from_millis(max_ms),
        }
    }

    /// Delay for a uniform `sample` in `[0, 1)`
    pub fn delay(&self, sample: f64) -> Duration {
        self.max.mul_f64(sample.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Plant;
    use crate::store::Mutation;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap()
    }

    fn garden() -> PlantStore {
        PlantStore::from_plants(vec![
            Plant::new(1, "Aloe Vera")
                .watering_times(&[WateringTime::Morning])
                .saved(true),
            Plant::new(2, "Rose")
                .watering_times(&[WateringTime::Morning, WateringTime::Evening])
                .saved(false),
            Plant::new(5, "Fern")
                .watering_times(&[WateringTime::Morning, WateringTime::Evening])
                .saved(true),
        ])
    }

    #[test]
    fn test_morning_window_prompts_unwatered() {
        let mut checker = ReminderChecker::new(RepeatPolicy::EveryCycle);
        let due = checker.check(&garden(), at(1, 7));

        let ids: Vec<PlantId> = due.iter().map(|r| r.plant_id).collect();
        assert_eq!(ids, vec![PlantId(1), PlantId(5)]);
        assert!(due.iter().all(|r| r.time == WateringTime::Morning));
    }

    #[test]
    fn test_watered_plant_not_prompted() {
        let mut store = garden();
        store.apply(Mutation::Watered {
            id: PlantId(1),
            time: WateringTime::Morning,
        });

        let mut checker = ReminderChecker::new(RepeatPolicy::EveryCycle);
        let due = checker.check(&store, at(1, 7));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].plant_id, PlantId(5));
    }

    #[test]
    fn test_window_bounds() {
        let mut checker = ReminderChecker::new(RepeatPolicy::EveryCycle);
        let store = garden();

        assert!(checker.check(&store, at(1, 5)).is_empty());
        assert!(!checker.check(&store, at(1, 6)).is_empty());
        assert!(checker.check(&store, at(1, 10)).is_empty());
        assert!(checker.check(&store, at(1, 14)).is_empty());

        let evening = checker.check(&store, at(1, 17));
        assert_eq!(evening.len(), 1);
        assert_eq!(evening[0].time, WateringTime::Evening);
        assert!(checker.check(&store, at(1, 20)).is_empty());
    }

    #[test]
    fn test_every_cycle_repeats() {
        let mut checker = ReminderChecker::new(RepeatPolicy::EveryCycle);
        let store = garden();
        assert_eq!(checker.check(&store, at(1, 7)).len(), 2);
        assert_eq!(checker.check(&store, at(1, 8)).len(), 2);
    }

    #[test]
    fn test_once_per_window_suppresses_repeat() {
        let mut checker = ReminderChecker::new(RepeatPolicy::OncePerWindow);
        let store = garden();
        assert_eq!(checker.check(&store, at(1, 7)).len(), 2);
        assert!(checker.check(&store, at(1, 8)).is_empty());

        // Next day prompts again
        assert_eq!(checker.check(&store, at(2, 7)).len(), 2);
    }

    #[test]
    fn test_reminder_text() {
        let reminder = Reminder {
            plant_id: PlantId(5),
            plant_name: "Fern".to_string(),
            time: WateringTime::Evening,
        };
        assert_eq!(
            reminder.prompt(),
            "🌱 Don't forget to water your Fern this evening!\n\nMark as watered now?"
        );
    }

    #[test]
    fn test_jitter_range() {
        let jitter = Jitter::default();
        assert_eq!(jitter.delay(0.0), Duration::ZERO);
        assert_eq!(jitter.delay(0.5), Duration::from_millis(2500));
        assert!(jitter.delay(1.5) <= Duration::from_millis(5000));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("every_cycle".parse::<RepeatPolicy>(), Ok(RepeatPolicy::EveryCycle));
        assert!("sometimes".parse::<RepeatPolicy>().is_err());
    }
}
