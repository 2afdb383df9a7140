use lumen::core::Debouncer;
use std::time::{Duration, Instant};

fn debouncer() -> Debouncer {
    Debouncer::new(Duration::from_millis(300))
}

#[test]
fn test_burst_emits_exactly_once_with_final_value() {
    let mut debouncer = debouncer();
    let start = Instant::now();

    // A burst of keystrokes, each re-arming the window
    debouncer.set_at("a", start);
    debouncer.set_at("ab", start + Duration::from_millis(100));
    debouncer.set_at("abc", start + Duration::from_millis(200));

    // Not yet: the last edit pushed the deadline to t+500
    assert_eq!(debouncer.poll_at(start + Duration::from_millis(400)), None);

    // Fires once with the final value
    assert_eq!(
        debouncer.poll_at(start + Duration::from_millis(500)),
        Some("abc".to_string())
    );

    // And never again for the same arm
    assert_eq!(debouncer.poll_at(start + Duration::from_millis(900)), None);
}

#[test]
fn test_duplicate_emissions_are_suppressed() {
    let mut debouncer = debouncer();
    let start = Instant::now();

    debouncer.set_at("query", start);
    assert_eq!(
        debouncer.poll_at(start + Duration::from_millis(300)),
        Some("query".to_string())
    );

    // Typing a character and deleting it again yields the same value
    debouncer.set_at("query", start + Duration::from_millis(400));
    assert_eq!(debouncer.poll_at(start + Duration::from_millis(800)), None);

    // A genuinely new value still fires
    debouncer.set_at("query2", start + Duration::from_millis(900));
    assert_eq!(
        debouncer.poll_at(start + Duration::from_millis(1200)),
        Some("query2".to_string())
    );
}

#[test]
fn test_reset_clears_pending_and_history() {
    let mut debouncer = debouncer();
    let start = Instant::now();

    debouncer.set_at("pending", start);
    assert!(debouncer.is_armed());
    debouncer.reset();
    assert!(!debouncer.is_armed());
    assert_eq!(debouncer.poll_at(start + Duration::from_secs(1)), None);

    // After a reset the previous value may be emitted again
    debouncer.set_at("pending", start + Duration::from_secs(2));
    assert_eq!(
        debouncer.poll_at(start + Duration::from_secs(3)),
        Some("pending".to_string())
    );
}

#[test]
fn test_poll_before_any_set_is_none() {
    let mut debouncer = debouncer();
    assert_eq!(debouncer.poll_at(Instant::now() + Duration::from_secs(10)), None);
}
