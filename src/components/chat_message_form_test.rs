use super::*;

#[test]
fn label_is_send_when_idle() {
    assert_eq!(send_label(0, false), "Send");
}

#[test]
fn label_shows_remaining_cooldown() {
    assert_eq!(send_label(10, false), "Wait 10s");
    assert_eq!(send_label(1, false), "Wait 1s");
}

#[test]
fn in_flight_send_wins_over_cooldown() {
    assert_eq!(send_label(5, true), "Sending...");
}

#[test]
fn cooldown_tick_counts_down_and_stops_at_zero() {
    let cooldown = RwSignal::new(2_u32);
    assert!(cooldown_tick(cooldown));
    assert_eq!(cooldown.get_untracked(), 1);

    // The step that reaches zero ends the loop.
    assert!(!cooldown_tick(cooldown));
    assert_eq!(cooldown.get_untracked(), 0);
    assert!(!cooldown_tick(cooldown));
}

#[test]
fn cooldown_tick_stops_when_the_signal_is_disposed() {
    let cooldown = RwSignal::new(5_u32);
    cooldown.dispose();
    assert!(!cooldown_tick(cooldown));
}
