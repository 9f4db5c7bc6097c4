//! Per-compilation state.
//!
//! Unique names come from a counter owned by the context, so two
//! compilations in one process never observe each other's numbering.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct CompileContext {
    counter: AtomicU64,
}

impl CompileContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unique token: `"1"`, `"2"`, ...
    pub fn unique_token(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        next.to_string()
    }

    /// Number of tokens handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_sequential_from_one() {
        let ctx = CompileContext::new();
        assert_eq!(ctx.unique_token(), "1");
        assert_eq!(ctx.unique_token(), "2");
        assert_eq!(ctx.issued(), 2);
    }

    #[test]
    fn contexts_are_independent() {
        let a = CompileContext::new();
        let b = CompileContext::new();
        a.unique_token();
        a.unique_token();
        assert_eq!(b.unique_token(), "1");
    }

    #[test]
    fn shared_context_never_repeats() {
        let ctx = CompileContext::new();
        let mut seen: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..50).map(|_| ctx.unique_token()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 200);
    }
}
