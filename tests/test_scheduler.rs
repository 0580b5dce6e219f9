mod helpers;

use helpers::{halloween, test_state};
use sleepstil::infrastructure::workers::countdown_worker::{today_in, CountdownWorker};
use sleepstil::compute_countdown;
use std::time::Duration;

#[tokio::test]
async fn test_state_holds_a_worker_per_holiday() {
    let state = test_state();

    for slug in state.registry.slugs() {
        let handle = state.countdowns.get(slug).unwrap();
        let current = handle.current();

        assert!(current.sleeps_until >= 0);
        assert_eq!(current.is_today, current.sleeps_until == 0);
    }
}

#[tokio::test]
async fn test_initial_value_matches_a_fresh_computation() {
    let timezone = chrono_tz::UTC;
    let holiday = halloween();
    let handle = CountdownWorker::new(holiday.clone(), timezone).start();

    // Recompute with the current date; both reads happen within the
    // same test so a midnight boundary between them is the only way
    // they could differ, and then only by one day of target drift.
    let fresh = compute_countdown(&holiday, today_in(timezone));
    let current = handle.current();

    assert!((current.sleeps_until - fresh.sleeps_until).abs() <= 1);
    assert!(current.target_date >= fresh.target_date.pred_opt().unwrap());
}

#[tokio::test]
async fn test_cancelled_worker_keeps_last_value_readable() {
    let handle = CountdownWorker::new(halloween(), chrono_tz::UTC).start();
    let before = handle.current();

    handle.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(handle.current(), before);
}

#[tokio::test(start_paused = true)]
async fn test_worker_recomputes_at_midnight_and_then_daily() {
    let handle = CountdownWorker::new(halloween(), chrono_tz::UTC).start();
    let mut rx = handle.subscribe();
    rx.borrow_and_update();

    // Paused time auto-advances through the sleep until midnight; the
    // worker must publish a recomputed value when it wakes.
    let refreshed = tokio::time::timeout(Duration::from_secs(25 * 3600), rx.changed()).await;
    assert!(refreshed.is_ok_and(|changed| changed.is_ok()));

    let current = *rx.borrow_and_update();
    assert!(current.sleeps_until >= 0);
    assert_eq!(current.is_today, current.sleeps_until == 0);

    // After the midnight refresh the daily interval takes over.
    let ticked = tokio::time::timeout(Duration::from_secs(25 * 3600), rx.changed()).await;
    assert!(ticked.is_ok_and(|changed| changed.is_ok()));
}

#[tokio::test]
async fn test_subscriber_sees_initial_value() {
    let handle = CountdownWorker::new(halloween(), chrono_tz::UTC).start();
    let rx = handle.subscribe();

    assert_eq!(*rx.borrow(), handle.current());
}
