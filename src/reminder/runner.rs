//! Reminder Runner
//!
//! Drives [`ReminderChecker`] from a tokio interval. Prompts and the
//! follow-up watering calls are spawned as local tasks, so the runner must be
//! used inside a [`tokio::task::LocalSet`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::prompt::Prompter;
use super::{Jitter, Reminder, ReminderChecker, RepeatPolicy, DEFAULT_POLL_INTERVAL_SECS};
use crate::api::PlantApi;
use crate::session::Session;

/// Timing for the runner
#[derive(Debug, Clone, Copy)]
pub struct RunnerSettings {
    pub poll_interval: Duration,
    pub jitter: Jitter,
    pub repeat: RepeatPolicy,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            jitter: Jitter::default(),
            repeat: RepeatPolicy::default(),
        }
    }
}

type Clock = Box<dyn Fn() -> NaiveDateTime>;

pub struct ReminderRunner<A, P> {
    session: Rc<Session<A>>,
    prompter: Rc<P>,
    checker: RefCell<ReminderChecker>,
    settings: RunnerSettings,
    clock: Clock,
    running: Cell<bool>,
    shutdown: Notify,
}

impl<A, P> ReminderRunner<A, P>
where
    A: PlantApi + 'static,
    P: Prompter + 'static,
{
    pub fn new(session: Rc<Session<A>>, prompter: Rc<P>, settings: RunnerSettings) -> Self {
        Self {
            session,
            prompter,
            checker: RefCell::new(ReminderChecker::new(settings.repeat)),
            settings,
            clock: Box::new(|| chrono::Local::now().naive_local()),
            running: Cell::new(false),
            shutdown: Notify::new(),
        }
    }

    /// Replace the local wall clock
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Scan once and spawn a prompt task per due reminder
    pub fn tick(&self) -> Vec<JoinHandle<()>> {
        let now = (self.clock)();
        let due = {
            let store = self.session.store();
            self.checker.borrow_mut().check(&store, now)
        };

        due.into_iter()
            .map(|reminder| {
                let delay = self.settings.jitter.delay(rand::random::<f64>());
                tokio::task::spawn_local(prompt_task(
                    Rc::clone(&self.session),
                    Rc::clone(&self.prompter),
                    reminder,
                    delay,
                ))
            })
            .collect()
    }

    /// Poll until [`stop`](Self::stop) is called. The first scan runs
    /// immediately.
    pub async fn run(&self) {
        self.running.set(true);
        tracing::info!(
            interval_secs = self.settings.poll_interval.as_secs(),
            policy = ?self.settings.repeat,
            "Reminder runner started"
        );

        let mut interval = tokio::time::interval(self.settings.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.running.get() {
            tokio::select! {
                biased;
                _ = self.shutdown.notified() => break,
                _ = interval.tick() => {
                    self.tick();
                }
            }
        }

        self.running.set(false);
        tracing::info!("Reminder runner stopped");
    }

    /// Stop the poll loop. A stop issued before [`run`](Self::run) starts
    /// polling is kept and ends that run before its first scan.
    pub fn stop(&self) {
        self.running.set(false);
        self.shutdown.notify_one();
    }
}

async fn prompt_task<A: PlantApi, P: Prompter>(
    session: Rc<Session<A>>,
    prompter: Rc<P>,
    reminder: Reminder,
    delay: Duration,
) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    if !prompter.confirm(&reminder.prompt()).await {
        tracing::debug!(id = %reminder.plant_id, time = %reminder.time, "Reminder dismissed");
        return;
    }

    match session.mark_watering(reminder.plant_id, reminder.time).await {
        Ok(Some(notice)) => prompter.notify(&notice),
        Ok(None) => {}
        Err(e) => prompter.notify(&e.notice()),
    }
}
