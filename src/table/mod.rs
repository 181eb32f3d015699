//! Interval subproblems and their memoized solutions
//!
//! The table is filled bottom-up by interval length and is never mutated
//! once a solve finishes.

mod interval;
mod memo;

pub use interval::Interval;
pub use memo::{MemoEntry, MemoTable};
