//! Parallel decorator — fan a batch out across detached tasks
//!
//! Every batch item is spawned as its own tokio task, so the inner
//! executor runs concurrently for the whole batch; the decorator itself
//! imposes no concurrency limit. Outputs are collected in completion
//! order — never rely on it matching input order. When items fail, every
//! spawned sibling still runs to completion and the first failure
//! observed is the one returned. Panics from the inner executor are
//! resumed on the caller, not demoted to errors.

use std::panic;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::executor::{BoxError, Executor};

/// Applies the inner executor to every batch item concurrently.
pub struct Parallel<E> {
    inner: Arc<E>,
}

impl<E> Parallel<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

#[async_trait]
impl<E> Executor for Parallel<E>
where
    E: Executor + 'static,
{
    type Input = Vec<E::Input>;
    type Output = Vec<E::Output>;

    async fn run(&self, batch: Vec<E::Input>) -> Result<Vec<E::Output>, BoxError> {
        tracing::debug!("Spawning {} batch items...", batch.len());
        let mut tasks: FuturesUnordered<_> = batch
            .into_iter()
            .map(|item| {
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move { inner.run(item).await })
            })
            .collect();

        let mut outputs = Vec::with_capacity(tasks.len());
        let mut failure: Option<BoxError> = None;
        while let Some(joined) = tasks.next().await {
            match joined {
                Ok(Ok(output)) => outputs.push(output),
                // Hold the first failure but keep draining so every
                // sibling runs to completion.
                Ok(Err(err)) => {
                    if failure.is_none() {
                        failure = Some(err);
                    }
                }
                Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
                Err(err) => {
                    if failure.is_none() {
                        failure = Some(Box::new(err));
                    }
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(outputs),
        }
    }
}
