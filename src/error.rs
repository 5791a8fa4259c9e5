//! Error type for the fallible, caller-facing edges of the crate.
//!
//! The ring arithmetic itself treats its preconditions (matching operand
//! sizes, in-range shifts, non-aliased buffers) as programmer contracts
//! enforced by `assert!` -- violating them is a bug, not a recoverable
//! condition. [`Error`] covers the operations that can legitimately fail at
//! runtime: drawing a random element and formatting output.

use thiserror::Error;

/// Failure modes surfaced by the crate's fallible public API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The configured random source could not produce a coprime element
    /// within the allotted number of resampling attempts.
    #[error("failed to sample a coprime element after {attempts} attempts")]
    CoprimeSamplingExhausted {
        /// Number of resampling attempts made before giving up.
        attempts: u32,
    },

    /// A formatting/printing operation failed to write to its sink.
    #[error("failed to format polynomial output")]
    Format(#[from] core::fmt::Error),
}
