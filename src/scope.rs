//! Scope — per-invocation handler construction
//!
//! A [`Scope`] is the capability the scoped leaf executor leans on: build
//! a fully-wired handler instance on demand. The executor acquires a
//! fresh handler for every single invocation and hands it to the call by
//! value, so the handler and its resources are released when that
//! invocation ends, on every exit path. No two invocations ever observe
//! the same instance, so handlers need no internal synchronization.

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::executor::BoxError;

/// Builds one fresh handler per call.
///
/// `acquire` may fail (say, a connection the handler needs cannot be
/// opened); that failure propagates unchanged to the caller of the
/// invocation that requested the handler. Teardown is the handler's
/// `Drop` impl — there is no separate release call to forget.
#[async_trait]
pub trait Scope: Send + Sync {
    /// The component type this scope constructs.
    type Handler: Send + 'static;

    /// Build a new, ready-to-use handler instance.
    async fn acquire(&self) -> Result<Self::Handler, BoxError>;
}

/// A [`Scope`] backed by a plain async factory closure.
///
/// The explicit-factory rendering of "give me a fresh instance of the
/// handler type": no container, just the closure that knows how to build
/// one.
pub struct FnScope<F, H> {
    create: F,
    _handler: PhantomData<fn() -> H>,
}

impl<F, H> FnScope<F, H> {
    pub fn new(create: F) -> Self {
        Self {
            create,
            _handler: PhantomData,
        }
    }
}

#[async_trait]
impl<F, Fut, H> Scope for FnScope<F, H>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<H, BoxError>> + Send,
    H: Send + 'static,
{
    type Handler = H;

    async fn acquire(&self) -> Result<H, BoxError> {
        (self.create)().await
    }
}
