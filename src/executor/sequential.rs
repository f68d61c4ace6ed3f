//! Sequential decorator — ordered batches, one item at a time
//!
//! Lifts a single-item executor to batches. Items run strictly in input
//! order, never concurrently, and the i-th output corresponds to the i-th
//! input. The first failing item fails the whole batch: later items are
//! never started and outputs already produced are discarded.

use async_trait::async_trait;

use crate::executor::{BoxError, Executor};

/// Applies the inner executor to each batch item in order.
pub struct Sequential<E> {
    inner: E,
}

impl<E> Sequential<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E> Executor for Sequential<E>
where
    E: Executor,
{
    type Input = Vec<E::Input>;
    type Output = Vec<E::Output>;

    async fn run(&self, batch: Vec<E::Input>) -> Result<Vec<E::Output>, BoxError> {
        tracing::debug!("Running batch of {} items in order.", batch.len());
        let mut outputs = Vec::with_capacity(batch.len());
        for item in batch {
            outputs.push(self.inner.run(item).await?);
        }
        Ok(outputs)
    }
}
