//! Composition: the engine and its outputs.
//!
//! ## Key Pieces
//!
//! - `compose`: catalog + setup -> five category pools
//! - `ComposedPools`: the ordered, pairwise-disjoint pools
//! - `derive_tags`: first-seen-order distinct tag sequence

pub mod engine;
pub mod pools;
pub mod tags;

pub use engine::compose;
pub use pools::ComposedPools;
pub use tags::derive_tags;
