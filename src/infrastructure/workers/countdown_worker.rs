use crate::domain::countdown::{compute_countdown, Countdown};
use crate::domain::holiday::Holiday;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const ONE_DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Today's date in the given timezone.
pub fn today_in(timezone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&timezone).date_naive()
}

/// Time remaining until the next midnight in `now`'s timezone.
///
/// A DST-ambiguous midnight resolves to its earliest instant; a
/// nonexistent one falls back to a plain 24-hour delay.
pub fn until_next_midnight(now: DateTime<Tz>) -> Duration {
    let Some(tomorrow) = now.date_naive().succ_opt() else {
        return ONE_DAY;
    };
    let midnight = now
        .timezone()
        .from_local_datetime(&tomorrow.and_time(NaiveTime::MIN))
        .earliest();
    match midnight {
        Some(instant) => (instant - now).to_std().unwrap_or(ONE_DAY),
        None => ONE_DAY,
    }
}

/// Background refresh for one holiday's countdown.
///
/// Computes immediately on start, recomputes at the next local
/// midnight, then falls into a 24-hour repeating interval as a safety
/// net against missed timers. Every firing re-reads the wall clock;
/// nothing is captured from a stale closure, so a late timer can only
/// move the displayed value forward.
pub struct CountdownWorker {
    holiday: Holiday,
    timezone: Tz,
}

/// Handle to a running countdown worker.
///
/// Dropping the handle (or calling [`CountdownHandle::cancel`]) stops
/// the timer task, so no callback can outlive the consumer it serves.
pub struct CountdownHandle {
    rx: watch::Receiver<Countdown>,
    cancel: CancellationToken,
}

impl CountdownHandle {
    /// The most recently computed countdown.
    pub fn current(&self) -> Countdown {
        *self.rx.borrow()
    }

    /// Receiver that observes every recompute.
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.rx.clone()
    }

    /// Stop the refresh task. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl CountdownWorker {
    pub fn new(holiday: Holiday, timezone: Tz) -> Self {
        CountdownWorker { holiday, timezone }
    }

    /// Compute the initial value and start the background refresh task.
    ///
    /// Outside a tokio runtime this degrades to the single static
    /// computation: the handle stays valid but never refreshes.
    pub fn start(self) -> CountdownHandle {
        let initial = compute_countdown(&self.holiday, today_in(self.timezone));
        let (tx, rx) = watch::channel(initial);
        let cancel = CancellationToken::new();

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let token = cancel.clone();
                runtime.spawn(self.run(tx, token));
            }
            Err(_) => {
                warn!(
                    holiday = %self.holiday.slug,
                    "no async runtime available; countdown will not auto-refresh"
                );
            }
        }

        CountdownHandle { rx, cancel }
    }

    async fn run(self, tx: watch::Sender<Countdown>, cancel: CancellationToken) {
        info!(holiday = %self.holiday.slug, "countdown worker started");

        // First refresh lands exactly on the next local midnight
        let delay = until_next_midnight(Utc::now().with_timezone(&self.timezone));
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }
        self.refresh(&tx);

        // Then every 24 hours, covering clock drift and missed timers
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + ONE_DAY, ONE_DAY);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => return,
                _ = interval.tick() => self.refresh(&tx),
            }
        }
    }

    fn refresh(&self, tx: &watch::Sender<Countdown>) {
        let result = compute_countdown(&self.holiday, today_in(self.timezone));
        debug!(
            holiday = %self.holiday.slug,
            sleeps_until = result.sleeps_until,
            is_today = result.is_today,
            "countdown refreshed"
        );
        tx.send_replace(result);
    }
}
