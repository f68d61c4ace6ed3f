//! Leaf executors — adapting user code into the [`Executor`] contract
//!
//! [`FnExecutor`] wraps a fixed async function. [`Scoped`] pairs a
//! [`Scope`] with a call function and builds a fresh handler for every
//! invocation, so concurrent calls never share an instance.

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::executor::{BoxError, Executor};
use crate::scope::Scope;

/// Adapts a single-argument async function into an [`Executor`].
///
/// Holds no state of its own, so repeated and concurrent invocation is
/// trivially safe.
pub struct FnExecutor<F, I, O> {
    func: F,
    // Function-pointer PhantomData pins the in/out types without putting
    // auto-trait requirements on them.
    _io: PhantomData<fn(I) -> O>,
}

impl<F, I, O> FnExecutor<F, I, O> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            _io: PhantomData,
        }
    }
}

#[async_trait]
impl<F, Fut, I, O> Executor for FnExecutor<F, I, O>
where
    F: Fn(I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<O, BoxError>> + Send,
    I: Send + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    async fn run(&self, input: I) -> Result<O, BoxError> {
        (self.func)(input).await
    }
}

/// Runs every invocation against a fresh handler built by a [`Scope`].
///
/// On each `run` the scope builds a new handler, which moves into the
/// call future and is dropped when the invocation ends, even one
/// abandoned mid-flight. Instances are never shared or reused across
/// invocations, so the handler type needs no concurrency safety of its
/// own.
pub struct Scoped<S, F, I, O> {
    scope: S,
    call: F,
    _io: PhantomData<fn(I) -> O>,
}

impl<S, F, I, O> Scoped<S, F, I, O> {
    /// Wrap a scope and a call function `(handler, input) -> output`.
    pub fn new(scope: S, call: F) -> Self {
        Self {
            scope,
            call,
            _io: PhantomData,
        }
    }
}

#[async_trait]
impl<S, F, Fut, I, O> Executor for Scoped<S, F, I, O>
where
    S: Scope,
    F: Fn(S::Handler, I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<O, BoxError>> + Send,
    I: Send + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    async fn run(&self, input: I) -> Result<O, BoxError> {
        let handler = self.scope.acquire().await?;
        tracing::debug!("Acquired a fresh handler for this invocation.");
        (self.call)(handler, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use futures::future::join_all;

    use crate::scope::FnScope;

    #[tokio::test]
    async fn fn_executor_runs_the_wrapped_function() {
        let double = FnExecutor::new(|n: i64| async move { Ok::<_, BoxError>(n * 2) });

        assert_eq!(double.run(21).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn fn_executor_propagates_failures_unchanged() {
        let parse =
            FnExecutor::new(|raw: String| async move { Ok::<_, BoxError>(raw.parse::<i64>()?) });

        let err = parse.run("not a number".into()).await.unwrap_err();
        assert!(err.downcast_ref::<std::num::ParseIntError>().is_some());
    }

    /// Handler double that reports its construction serial and counts
    /// drops.
    struct Tracked {
        serial: usize,
        dropped: Arc<AtomicUsize>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.dropped.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn tracked_scope(
        built: Arc<AtomicUsize>,
        dropped: Arc<AtomicUsize>,
    ) -> impl Scope<Handler = Tracked> {
        FnScope::new(move || {
            let serial = built.fetch_add(1, Ordering::SeqCst);
            let dropped = Arc::clone(&dropped);
            async move { Ok::<_, BoxError>(Tracked { serial, dropped }) }
        })
    }

    #[tokio::test]
    async fn scoped_builds_and_drops_one_handler_per_invocation() {
        let built = Arc::new(AtomicUsize::new(0));
        let dropped = Arc::new(AtomicUsize::new(0));
        let exec = Scoped::new(
            tracked_scope(Arc::clone(&built), Arc::clone(&dropped)),
            |handler: Tracked, _: ()| async move { Ok::<_, BoxError>(handler.serial) },
        );

        for round in 0..5 {
            exec.run(()).await.unwrap();
            // The handler is gone no later than the invocation's return.
            assert_eq!(dropped.load(Ordering::SeqCst), round + 1);
        }
        assert_eq!(built.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn concurrent_invocations_never_share_a_handler() {
        let built = Arc::new(AtomicUsize::new(0));
        let dropped = Arc::new(AtomicUsize::new(0));
        let exec = Scoped::new(
            tracked_scope(Arc::clone(&built), Arc::clone(&dropped)),
            |handler: Tracked, _: ()| async move { Ok::<_, BoxError>(handler.serial) },
        );

        let mut serials: Vec<usize> = join_all((0..8).map(|_| exec.run(())))
            .await
            .into_iter()
            .map(|res| res.unwrap())
            .collect();
        serials.sort_unstable();

        assert_eq!(serials, (0..8).collect::<Vec<_>>());
        assert_eq!(built.load(Ordering::SeqCst), 8);
        assert_eq!(dropped.load(Ordering::SeqCst), 8);
    }

    #[tokio::test]
    async fn scoped_surfaces_acquisition_failures() {
        let scope: FnScope<_, Tracked> =
            FnScope::new(|| async { Err("no instances left".into()) });
        let exec = Scoped::new(scope, |handler: Tracked, _: ()| async move {
            Ok::<_, BoxError>(handler.serial)
        });

        let err = exec.run(()).await.unwrap_err();
        assert_eq!(err.to_string(), "no instances left");
    }
}
