use super::*;

use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn show_displays_title_until_expiry() {
    let mut ticker = TickerController::new();
    let started = Instant::now();

    let generation = ticker.show("Buy milk");
    assert!(ticker.is_showing());
    assert_eq!(ticker.active(), ["Buy milk".to_string()]);
    assert_eq!(
        ticker.state().expires_at(),
        Some(started + TICKER_DISPLAY_DURATION)
    );

    let fired = ticker.next_expiry().await;
    assert_eq!(fired, generation);
    assert!(started.elapsed() >= TICKER_DISPLAY_DURATION);

    assert_eq!(ticker.expire(fired).as_deref(), Some("Buy milk"));
    assert_eq!(ticker.snapshot(), TickerSnapshot::default());
    assert_eq!(ticker.state(), &TickerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn later_show_outlives_earlier_deadline() {
    let mut ticker = TickerController::new();
    let started = Instant::now();

    ticker.show("X");
    sleep(Duration::from_secs(1)).await;
    let second = ticker.show("Y");

    sleep(Duration::from_millis(9_500)).await;
    assert!(ticker.is_showing());
    assert_eq!(ticker.active(), ["Y".to_string()]);

    let fired = ticker.next_expiry().await;
    assert_eq!(fired, second);
    assert!(started.elapsed() >= Duration::from_secs(11));
    assert_eq!(ticker.expire(fired).as_deref(), Some("Y"));
    assert!(!ticker.is_showing());
    assert!(ticker.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn stale_generation_does_not_clear_current_display() {
    let mut ticker = TickerController::new();

    let first = ticker.show("X");
    let second = ticker.show("Y");
    assert!(second > first);

    assert_eq!(ticker.expire(first), None);
    assert_eq!(ticker.state().title(), Some("Y"));
    assert_eq!(ticker.active(), ["Y".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn expire_while_idle_is_ignored() {
    let mut ticker = TickerController::new();
    assert_eq!(ticker.expire(Generation(1)), None);
    assert!(!ticker.is_showing());
}

#[tokio::test(start_paused = true)]
async fn showing_same_title_again_rearms_the_timer() {
    let mut ticker = TickerController::new();
    let started = Instant::now();

    ticker.show("Call Mary");
    sleep(Duration::from_secs(4)).await;
    let rearmed = ticker.show("Call Mary");

    let fired = ticker.next_expiry().await;
    assert_eq!(fired, rearmed);
    assert!(started.elapsed() >= Duration::from_secs(14));
}

#[tokio::test(start_paused = true)]
async fn expire_before_deadline_keeps_ticker_showing() {
    let mut ticker = TickerController::new();

    let generation = ticker.show("Buy milk");
    assert_eq!(ticker.expire(generation), None);
    assert!(ticker.is_showing());

    sleep(Duration::from_millis(9_999)).await;
    assert_eq!(ticker.expire(generation), None);
    assert_eq!(ticker.active(), ["Buy milk".to_string()]);

    let fired = ticker.next_expiry().await;
    assert_eq!(fired, generation);
    assert_eq!(ticker.expire(fired).as_deref(), Some("Buy milk"));
    assert!(!ticker.is_showing());
}
