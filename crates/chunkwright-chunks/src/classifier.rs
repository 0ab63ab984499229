//! The classifier interface consumed by bundlers.

use std::sync::LazyLock;

use crate::policy::VendorChunkPolicy;

/// Maps a resolved module identifier to the name of the chunk it belongs to.
///
/// Returning `None` means "no opinion": the bundler places the module with
/// its own heuristic. Implementations must be pure. Bundlers may call them
/// from several threads at once and in any module order.
pub trait ChunkClassifier: Send + Sync {
    /// Classify a single module identifier.
    fn classify<'a>(&'a self, id: &str) -> Option<&'a str>;

    /// Classify an identifier a host may have failed to supply.
    ///
    /// A missing identifier breaks the host contract; it is answered with
    /// "no opinion" rather than a fault.
    fn classify_opt<'a>(&'a self, id: Option<&str>) -> Option<&'a str> {
        id.and_then(|id| self.classify(id))
    }
}

impl<F> ChunkClassifier for F
where
    F: Fn(&str) -> Option<&'static str> + Send + Sync,
{
    fn classify<'a>(&'a self, id: &str) -> Option<&'a str> {
        self(id)
    }
}

static DEFAULT_POLICY: LazyLock<VendorChunkPolicy> = LazyLock::new(VendorChunkPolicy::default);

/// Classify `id` with the default vendor policy.
///
/// Rules, first match wins:
///
/// 1. contains `node_modules/p5` → `"p5"`
/// 2. contains `node_modules/vue` → `"vue-vendor"`
/// 3. contains `node_modules` → `"vendor"`
/// 4. otherwise → `None`
///
/// ```
/// use chunkwright_chunks::manual_chunks;
///
/// assert_eq!(
///     manual_chunks("/repo/node_modules/vue-router/dist/vue-router.js"),
///     Some("vue-vendor")
/// );
/// assert_eq!(manual_chunks("/repo/node_modules/lodash/lodash.js"), Some("vendor"));
/// assert_eq!(manual_chunks(""), None);
/// ```
pub fn manual_chunks(id: &str) -> Option<&'static str> {
    DEFAULT_POLICY.classify(id)
}
