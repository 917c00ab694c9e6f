//! # cardpool
//!
//! Deterministic card pool composition for expansion-driven tableau games.
//!
//! Given a catalog of card declarations (grouped into per-expansion
//! manifests) and one session's setup (expansion flags, variant flags,
//! ban/include overrides), the engine produces the five category pools
//! that are legal for that session, plus the ordered set of tags actually
//! reachable.
//!
//! ## Design Principles
//!
//! 1. **Declarations Only**: The engine reads static card data - identity,
//!    category, cost, tags, gating. What a card does when played is not
//!    this crate's concern.
//!
//! 2. **Pure Composition**: `compose` is a function of its two inputs.
//!    The catalog is loaded once and read-only afterwards; every call
//!    allocates fresh pools, and identical inputs give order-identical
//!    outputs.
//!
//! 3. **Uniform Eligibility**: Expansion requirements and manifest
//!    activation are the same composable `Gate` predicate, so precedence
//!    rules live in one place instead of scattered conditionals.
//!
//! ## Modules
//!
//! - `cards`: identities, tags, categories, gates, declarations
//! - `setup`: session flags and override lists
//! - `catalog`: manifests, the validated registry, compiled-in data
//! - `compose`: the engine, its pools, and tag derivation

pub mod cards;
pub mod catalog;
pub mod compose;
pub mod setup;

// Re-export commonly used types
pub use crate::cards::{CardCategory, CardDeclaration, CardName, Gate, Tag};

pub use crate::setup::{GameSetup, SetupFlag};

pub use crate::catalog::{CardManifest, Catalog, CatalogError};

pub use crate::compose::{compose, derive_tags, ComposedPools};
