//! Timer helpers for the simulated round-trips.

/// Suspend the current task for `ms` milliseconds. Zero returns immediately.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
