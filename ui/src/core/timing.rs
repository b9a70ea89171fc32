//! Cross-platform timers for carousel autoplay and animations.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Roughly one animation frame.
pub const FRAME_MS: u64 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_advances_virtual_clock() {
        let before = tokio::time::Instant::now();
        sleep_ms(5_000).await;
        assert!(before.elapsed() >= std::time::Duration::from_millis(5_000));
    }
}
