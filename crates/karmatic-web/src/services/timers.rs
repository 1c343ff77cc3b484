use std::time::Duration;

use gloo_timers::future::TimeoutFuture;

/// Browser timer sleep. Dropping the future clears the timeout.
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
}
