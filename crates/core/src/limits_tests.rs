use super::*;
use std::thread;

#[test]
fn depth_only_limits() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    assert!(!limits.should_stop());
}

#[test]
fn depth_and_time_limits() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn time_only_limits_have_unbounded_depth() {
    let limits = SearchLimits::time(Duration::from_millis(50));
    assert_eq!(limits.depth, u8::MAX);
}

#[test]
fn deadline_expiry_latches_stop() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    thread::sleep(Duration::from_millis(20));
    assert!(tc.check_time());
    assert!(tc.is_stopped());
}

#[test]
fn unbounded_control_never_expires() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.check_time());
    assert!(!tc.is_stopped());
}

#[test]
fn manual_stop() {
    let tc = TimeControl::new(None);
    tc.start();
    tc.stop();
    assert!(tc.is_stopped());
    assert!(tc.check_time());
}

#[test]
fn restart_clears_previous_stop() {
    let tc = TimeControl::new(Some(Duration::from_secs(60)));
    tc.start();
    tc.stop();
    assert!(tc.is_stopped());
    tc.start();
    assert!(!tc.is_stopped());
}
