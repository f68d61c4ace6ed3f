//! Pure wiring — fluent decorator constructors and result flattening
//!
//! Nothing here executes anything: [`ExecutorExt`] only constructs
//! decorator values, and [`flatten`] only awaits and concatenates.

use std::time::Duration;

use crate::executor::{BoxError, BoxExecutor, Delayed, Executor, Parallel, Sequential};

/// Awaits a nested batch result and concatenates it into one flat
/// sequence: outer elements in their given order, each inner sequence in
/// its given order.
///
/// The only failure mode is the awaited input's own failure, propagated
/// unchanged.
pub async fn flatten<T, F>(nested: F) -> Result<Vec<T>, BoxError>
where
    F: Future<Output = Result<Vec<Vec<T>>, BoxError>>,
{
    let groups = nested.await?;
    Ok(groups.into_iter().flatten().collect())
}

/// Fluent constructors for the built-in decorators.
///
/// These build decorator values and nothing else; no execution happens
/// until the composed executor's `run` is invoked. Stacking order
/// matters: `.sequential().parallel()` orders items within a chunk and
/// fans chunks out, while `.parallel().sequential()` fans items out
/// within a chunk and runs chunks one after another.
pub trait ExecutorExt: Executor + Sized {
    /// Wait `delay` before every invocation except the first.
    fn delayed(self, delay: Duration) -> Delayed<Self> {
        Delayed::new(self, delay)
    }

    /// Lift to ordered batches, one item at a time.
    fn sequential(self) -> Sequential<Self> {
        Sequential::new(self)
    }

    /// Lift to batches with unbounded fan-out and no output order.
    fn parallel(self) -> Parallel<Self>
    where
        Self: 'static,
    {
        Parallel::new(self)
    }

    /// Erase the decorator stack behind a boxed trait object.
    fn boxed(self) -> BoxExecutor<Self::Input, Self::Output>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<E> ExecutorExt for E where E: Executor {}
