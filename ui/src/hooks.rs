//! Component-scoped timers. Each hook spawns a `use_future` task, so the
//! timer stops when the owning component unmounts.

use dioxus::prelude::*;

use crate::core::carousel::Carousel;
use crate::core::count_up;
use crate::core::timing::{self, FRAME_MS};

const IDLE_POLL_MS: u64 = 100;

/// Advance `carousel` every `period_ms`. While `paused` reads true the tick
/// is skipped but the timer keeps running.
pub fn use_autoplay(mut carousel: Signal<Carousel>, period_ms: u64, paused: Option<Signal<bool>>) {
    use_future(move || async move {
        loop {
            timing::sleep_ms(period_ms).await;
            if paused.map(|p| *p.peek()).unwrap_or(false) {
                continue;
            }
            carousel.with_mut(|c| {
                c.advance();
            });
        }
    });
}

/// Elapsed milliseconds of a count-up animation that begins once `started`
/// reads true and stops at `duration_ms`.
pub fn use_count_up(duration_ms: u64, started: ReadOnlySignal<bool>) -> Signal<u64> {
    let mut elapsed = use_signal(|| 0u64);

    use_future(move || async move {
        while !*started.peek() {
            timing::sleep_ms(IDLE_POLL_MS).await;
        }
        tracing::debug!("[figures] count-up started");
        loop {
            let now = (*elapsed.peek() + FRAME_MS).min(duration_ms);
            elapsed.set(now);
            if count_up::is_finished(now, duration_ms) {
                break;
            }
            timing::sleep_ms(FRAME_MS).await;
        }
    });

    elapsed
}
