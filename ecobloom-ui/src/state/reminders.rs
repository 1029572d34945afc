//! Watering Reminders
//!
//! Scans the garden on startup and then on a fixed interval. Each due
//! reminder becomes a `window.confirm` prompt after a short random delay.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;

use ecobloom::reminder::{Jitter, Reminder, ReminderChecker, DEFAULT_POLL_INTERVAL_SECS};

use super::global::GlobalState;

/// Start the reminder timer for the lifetime of the page
pub fn start_reminders(state: GlobalState) {
    let checker = Rc::new(RefCell::new(ReminderChecker::default()));
    let jitter = Jitter::default();

    let check = move || {
        let now = chrono::Local::now().naive_local();
        let due = state
            .store
            .with_untracked(|store| checker.borrow_mut().check(store, now));

        for reminder in due {
            let delay = jitter.delay(js_sys::Math::random());
            let state = state.clone();
            Timeout::new(delay.as_millis() as u32, move || ask(state, reminder)).forget();
        }
    };

    check();
    Interval::new((DEFAULT_POLL_INTERVAL_SECS * 1000) as u32, check).forget();
}

fn ask(state: GlobalState, reminder: Reminder) {
    let accepted = web_sys::window()
        .and_then(|window| window.confirm_with_message(&reminder.prompt()).ok())
        .unwrap_or(false);

    if accepted {
        spawn_local(async move {
            state.mark_watering(reminder.plant_id, reminder.time).await;
        });
    }
}
