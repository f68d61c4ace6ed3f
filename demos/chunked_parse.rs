//! End-to-end pipeline demo: chunk raw strings, parse each through a
//! per-invocation parser, in order within a chunk and in parallel across
//! chunks, then flatten the results.
//!
//! Run with `cargo run --example chunked_parse`.

use std::time::Duration;

use katar::{BoxError, Executor, ExecutorExt, FnScope, Scoped, chunked, flatten};

/// Built fresh for every invocation, dropped as soon as it returns.
struct Parser;

impl Parser {
    async fn parse(&self, raw: String) -> Result<i64, BoxError> {
        Ok(raw.trim().parse::<i64>()?)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let scope = FnScope::new(|| async { Ok::<_, BoxError>(Parser) });

    let pipeline = Scoped::new(scope, |parser: Parser, raw: String| async move {
        parser.parse(raw).await
    })
    // Only the very first parse goes through without the wait
    .delayed(Duration::from_secs(1))
    .sequential()
    .parallel();

    let raw: Vec<String> = ["4", "8", "15", "16", "23", "42"]
        .into_iter()
        .map(String::from)
        .collect();

    let values = flatten(pipeline.run(chunked(raw, 2))).await.unwrap();
    println!("parsed: {values:?}");

    // A bad item fails its whole chunk and the failure reaches us as-is
    let failure = flatten(pipeline.run(chunked(vec!["seven".to_string()], 1))).await;
    println!("expected failure: {}", failure.unwrap_err());
}
