//! Key weights
//!
//! Weights are access frequencies or probabilities. Only their ratios
//! matter to the solver, so they need not be normalised.

mod numeric;
mod random;
mod sequence;

pub use numeric::Weight;
pub use random::random_distribution;
pub use sequence::WeightSequence;
