use std::future::Future;
use std::sync::Arc;
use std::thread;

use tokio::runtime::Runtime as TokioRuntime;

use crate::error::Error;

/// Builds the shared tokio runtime the RPC clients are driven on.
pub fn new_runtime() -> Result<Arc<TokioRuntime>, Error> {
    let rt = TokioRuntime::new().map_err(Error::io)?;
    Ok(Arc::new(rt))
}

/// Runs a future to completion on the given runtime.
pub fn block_on<F: Future>(rt: &TokioRuntime, future: F) -> F::Output {
    rt.block_on(future)
}

/// Runs the two closures on separate threads and waits for both, returning
/// the pair of results or the first error.
///
/// This is the fan-out primitive used by the `*_pair` query helpers and the
/// light-client sync: one task per chain, joined before anything else
/// proceeds. Closures are expected to annotate their own errors with the
/// chain they ran against.
pub fn join_pair<A, B, E, FA, FB>(fa: FA, fb: FB) -> Result<(A, B), E>
where
    A: Send,
    B: Send,
    E: Send,
    FA: FnOnce() -> Result<A, E> + Send,
    FB: FnOnce() -> Result<B, E> + Send,
{
    thread::scope(|s| {
        let handle = s.spawn(fa);
        let b = fb();
        let a = handle.join().expect("paired task panicked");
        Ok((a?, b?))
    })
}

#[cfg(test)]
mod tests {
    use super::join_pair;

    #[test]
    fn join_pair_returns_both_results() {
        let out: Result<_, ()> = join_pair(|| Ok(1), || Ok("two"));
        assert_eq!(out.unwrap(), (1, "two"));
    }

    #[test]
    fn join_pair_first_error_wins() {
        let out: Result<((), ()), _> = join_pair(|| Err("left"), || Err("right"));
        assert_eq!(out.unwrap_err(), "left");
    }
}
