//! Executor — the uniform contract every pipeline stage implements
//!
//! An `Executor` asynchronously transforms one input value into one output
//! value. The leaves ([`FnExecutor`], [`Scoped`]) adapt user code into the
//! contract; the decorators ([`Delayed`], [`Sequential`], [`Parallel`])
//! wrap one executor and yield another executor with modified timing,
//! batching, or fan-out semantics.
//!
//! Decorators compose in construction order, and order matters:
//! `.sequential().parallel()` runs each chunk's items strictly in order
//! while chunks fan out concurrently, whereas `.parallel().sequential()`
//! fans out within each chunk while the chunks themselves run one after
//! another. Nothing stops a composition that delays every item of a
//! parallel batch instead of only the first — pick the order that means
//! what you want.
pub mod delay;
pub mod leaf;
pub mod parallel;
pub mod sequential;

pub use delay::Delayed;
pub use leaf::{FnExecutor, Scoped};
pub use parallel::Parallel;
pub use sequential::Sequential;

use std::sync::Arc;

use async_trait::async_trait;

/// The error currency of a pipeline.
///
/// Executors may fail with any error the wrapped operation raises. The
/// framework never translates or wraps a failure: the value an inner
/// executor returns is the value the outermost caller sees. `Send + Sync`
/// keeps failures free to cross task boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A type-erased executor, for storing or returning composed pipelines
/// without naming the whole decorator stack.
pub type BoxExecutor<I, O> = Box<dyn Executor<Input = I, Output = O>>;

/// Something that asynchronously transforms one input into one output.
///
/// The contract mandates no side effects of its own; decorators add
/// timing, batching, and fan-out around an inner executor. Implementors
/// must be safe to invoke repeatedly and concurrently through `&self`.
///
/// Batches are owned values moved through the pipeline, so inputs and
/// outputs are `'static`; that also keeps every composition spawnable.
#[async_trait]
pub trait Executor: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Execute the operation on one input.
    ///
    /// Failures propagate unchanged; there is no retry and no
    /// translation anywhere in the pipeline.
    async fn run(&self, input: Self::Input) -> Result<Self::Output, BoxError>;
}

#[async_trait]
impl<E> Executor for Box<E>
where
    E: Executor + ?Sized,
{
    type Input = E::Input;
    type Output = E::Output;

    async fn run(&self, input: Self::Input) -> Result<Self::Output, BoxError> {
        (**self).run(input).await
    }
}

#[async_trait]
impl<E> Executor for Arc<E>
where
    E: Executor + ?Sized,
{
    type Input = E::Input;
    type Output = E::Output;

    async fn run(&self, input: Self::Input) -> Result<Self::Output, BoxError> {
        (**self).run(input).await
    }
}
