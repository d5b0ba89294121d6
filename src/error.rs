use thiserror::Error;

/// Errors reported by the bounds-checked accessors.
///
/// Stale positions are not part of this taxonomy: positions are borrowing
/// iterators, so using one after a mutation is rejected at compile time
/// rather than detected at runtime.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A checked lookup did not find the requested key.
    #[error("key not found")]
    KeyNotFound,
}
