//! Katar — a small, composable pipeline framework for batched async execution.
//!
//! Katar turns a single-item asynchronous operation into a pipeline: the
//! operation can be delayed, applied sequentially over a batch, fanned out
//! in parallel over a batch, given a fresh per-invocation resource scope,
//! and have its nested outputs flattened into one flat sequence.
//!
//! The library is intentionally minimal: you provide the unit operation (a
//! plain async function, or a method on a handler your scope builds per
//! call) and compose execution semantics around it. Each decorator wraps
//! one executor and yields another executor, so pipelines are assembled
//! fluently and stay ordinary values.
//!
//! # Architecture
//!
//! The main building blocks are:
//!
//! - [`Executor`]: the uniform contract — asynchronously transform one
//!   input value into one output value, or fail. Everything else either
//!   implements this contract or wraps one implementation to produce
//!   another with modified execution semantics.
//! - [`FnExecutor`] / [`Scoped`]: the leaves. `FnExecutor` adapts a fixed
//!   async function; `Scoped` builds a fresh handler through a [`Scope`]
//!   for every single invocation and tears it down when the invocation
//!   ends.
//! - [`Delayed`], [`Sequential`], [`Parallel`]: the decorators. A wait
//!   before forwarding (skipped on the very first call), strict in-order
//!   batch execution, and unbounded concurrent batch execution.
//! - [`flatten`] and [`ExecutorExt`]: the glue. `flatten` concatenates a
//!   two-level batch result into one sequence; `ExecutorExt` provides the
//!   fluent `.delayed(..)`, `.sequential()`, `.parallel()` constructors.
//!
//! # Design goals
//!
//! - Small, well-documented core that is easy to extend with your own
//!   executors.
//! - Decorators never catch, retry, or translate failures — whatever the
//!   wrapped operation raises propagates unchanged to the caller.
//! - Composition order is explicit: `.sequential().parallel()` keeps each
//!   chunk ordered while chunks fan out, `.parallel().sequential()` fans
//!   out within a chunk while chunks stay ordered. Katar does not judge
//!   the composition you pick.
//!
//! # Example
//!
//! Parse chunked input with a fresh parser per invocation:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use katar::{Executor, ExecutorExt, FnScope, Scoped, chunked, flatten};
//!
//! struct Parser;
//!
//! impl Parser {
//!     async fn parse(&self, raw: String) -> Result<i64, katar::BoxError> {
//!         Ok(raw.trim().parse::<i64>()?)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), katar::BoxError> {
//!     // A new Parser is built for every invocation and dropped when the
//!     // invocation ends, so invocations never share state.
//!     let scope = FnScope::new(|| async { Ok::<_, katar::BoxError>(Parser) });
//!
//!     let pipeline = Scoped::new(scope, |parser: Parser, raw: String| async move {
//!         parser.parse(raw).await
//!     })
//!     .delayed(Duration::from_millis(10))
//!     .sequential()
//!     .parallel();
//!
//!     let batches = chunked(
//!         vec!["4".to_string(), "8".to_string(), "15".to_string()],
//!         2,
//!     );
//!
//!     // Chunks complete in whatever order the runtime schedules them.
//!     let mut values = flatten(pipeline.run(batches)).await?;
//!     values.sort_unstable();
//!     assert_eq!(values, vec![4, 8, 15]);
//!     Ok(())
//! }
//! ```
//!
//! # Where to start
//!
//! - Read the docs for [`Executor`] and [`ExecutorExt`]; each decorator
//!   documents its exact ordering and failure semantics.
//! - See `demos/chunked_parse.rs` for the runnable end-to-end pipeline.

/// Pure batch-splitting helper that feeds the pipeline
pub mod batch;
/// Flattening and the fluent decorator constructors
pub mod compose;
/// The executor contract and the built-in leaves and decorators
pub mod executor;
/// Per-invocation handler construction
pub mod scope;

pub use batch::chunked;
pub use compose::{ExecutorExt, flatten};
pub use executor::{
    BoxError, BoxExecutor, Delayed, Executor, FnExecutor, Parallel, Scoped, Sequential,
};
pub use scope::{FnScope, Scope};
