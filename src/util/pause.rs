use std::time::Duration;

/// Suspend the calling task for at least `duration`.
///
/// Only this task sleeps; other work on the runtime keeps running. This is
/// the same primitive the pollers use between attempts.
pub async fn pause(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn suspends_for_at_least_the_requested_duration() {
        let start = Instant::now();
        pause(Duration::from_secs(3)).await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
