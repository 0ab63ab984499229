//! Manual chunk classification for JavaScript bundlers.
//!
//! A bundler asks a *manual chunk classifier* which output chunk a module
//! belongs to, once per module, while it builds the chunk graph. This crate
//! provides that decision as a plain Rust interface so it can be tested
//! without a bundler:
//!
//! - [`ChunkClassifier`] - `(module id) -> Option<chunk name>`
//! - [`VendorChunkPolicy`] - ordered package rules plus a vendor catch-all
//! - [`manual_chunks`] - the default policy as a free function
//! - [`ChunkPlan`] - classify a whole module list and group it by chunk
//! - [`ChunkSizeLimit`] - flag emitted chunks above the warning threshold
//!
//! # Example
//!
//! ```
//! use chunkwright_chunks::{manual_chunks, ChunkClassifier, ChunkRule, VendorChunkPolicy};
//!
//! assert_eq!(manual_chunks("/repo/node_modules/p5/lib/p5.js"), Some("p5"));
//! assert_eq!(manual_chunks("/repo/src/App.vue"), None);
//!
//! let policy = VendorChunkPolicy::builder()
//!     .rule(ChunkRule::prefix("react-vendor", "react"))
//!     .catch_all("deps")
//!     .build()
//!     .unwrap();
//! assert_eq!(policy.classify("/app/node_modules/react-dom/index.js"), Some("react-vendor"));
//! assert_eq!(policy.classify("/app/node_modules/zod/index.js"), Some("deps"));
//! ```

pub mod classifier;
pub mod error;
pub mod plan;
pub mod policy;
pub mod size;

pub use classifier::{manual_chunks, ChunkClassifier};
pub use error::{PolicyError, Result};
pub use plan::ChunkPlan;
pub use policy::{
    ChunkRule, MatchMode, PackageMatch, VendorChunkPolicy, VendorChunkPolicyBuilder,
    DEFAULT_CATCH_ALL, DEFAULT_DEPENDENCY_ROOT,
};
pub use size::{ChunkSizeLimit, OversizedChunk};
