//! Optimal tree shapes
//!
//! Shapes are materialised only on request, from the roots stored in a
//! completed memo table. Keys are identified by index.

mod shape;
mod traversal;

pub use shape::TreeShape;
pub use traversal::InOrder;
