//! Delay decorator — wait before forwarding, except on the very first
//! call
//!
//! [`Delayed`] sleeps a fixed duration in front of the inner executor.
//! The first invocation of the decorator's lifetime forwards immediately;
//! the first-call flag is claimed atomically, so concurrent callers also
//! observe exactly one skip.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::executor::{BoxError, Executor};

/// Inserts a fixed wait before every forwarded call except the first.
pub struct Delayed<E> {
    inner: E,
    delay: Duration,
    started: AtomicBool,
}

impl<E> Delayed<E> {
    pub fn new(inner: E, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl<E> Executor for Delayed<E>
where
    E: Executor,
{
    type Input = E::Input;
    type Output = E::Output;

    async fn run(&self, input: E::Input) -> Result<E::Output, BoxError> {
        // swap hands back the pre-claim value, so exactly one caller ever
        // sees `false`.
        if self.started.swap(true, Ordering::Relaxed) {
            tracing::debug!("Waiting {:?} before the inner executor.", self.delay);
            tokio::time::sleep(self.delay).await;
        } else {
            tracing::debug!("First call, skipping the delay.");
        }
        self.inner.run(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use tokio::time::Instant;

    use crate::executor::FnExecutor;

    const DELAY: Duration = Duration::from_secs(1);

    fn echo() -> impl Executor<Input = i64, Output = i64> {
        FnExecutor::new(|n: i64| async move { Ok::<_, BoxError>(n) })
    }

    #[tokio::test(start_paused = true)]
    async fn first_call_skips_the_wait() {
        let delayed = Delayed::new(echo(), DELAY);

        let start = Instant::now();
        assert_eq!(delayed.run(7).await.unwrap(), 7);
        assert!(start.elapsed() < DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn every_later_call_waits_the_full_delay() {
        let delayed = Delayed::new(echo(), DELAY);
        delayed.run(1).await.unwrap();

        for n in 2..4 {
            let start = Instant::now();
            delayed.run(n).await.unwrap();
            assert!(start.elapsed() >= DELAY);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_skip_exactly_once() {
        let stamps: Arc<Mutex<Vec<Instant>>> = Arc::new(Mutex::new(Vec::new()));
        let inner = FnExecutor::new({
            let stamps = Arc::clone(&stamps);
            move |n: i64| {
                let stamps = Arc::clone(&stamps);
                async move {
                    stamps.lock().unwrap().push(Instant::now());
                    Ok::<_, BoxError>(n)
                }
            }
        });
        let delayed = Delayed::new(inner, DELAY);

        let begin = Instant::now();
        let (a, b) = tokio::join!(delayed.run(1), delayed.run(2));
        a.unwrap();
        b.unwrap();

        let stamps = stamps.lock().unwrap();
        assert_eq!(stamps.len(), 2);
        assert_eq!(stamps.iter().filter(|at| **at == begin).count(), 1);
        assert_eq!(stamps.iter().filter(|at| **at >= begin + DELAY).count(), 1);
    }
}
