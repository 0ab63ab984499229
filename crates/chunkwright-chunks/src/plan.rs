//! Grouping a module list into manual chunks.

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::debug;

use crate::classifier::ChunkClassifier;

/// Result of classifying a list of modules.
///
/// Chunks appear in the order their first module appeared in the input.
/// Modules inside a chunk keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkPlan {
    chunks: IndexMap<String, Vec<String>>,
    unassigned: Vec<String>,
}

impl ChunkPlan {
    /// Classify every module in `ids` and group the results.
    ///
    /// Classification runs on the rayon pool; the plan is identical to a
    /// sequential run because grouping happens afterwards in input order.
    ///
    /// ```
    /// use chunkwright_chunks::{manual_chunks, ChunkPlan};
    ///
    /// let plan = ChunkPlan::build(&manual_chunks, &[
    ///     "/repo/node_modules/p5/lib/p5.js",
    ///     "/repo/src/main.ts",
    ///     "/repo/node_modules/lodash/lodash.js",
    /// ]);
    /// assert_eq!(plan.bucket("p5").unwrap(), ["/repo/node_modules/p5/lib/p5.js"]);
    /// assert_eq!(plan.unassigned(), ["/repo/src/main.ts"]);
    /// ```
    pub fn build<C, S>(classifier: &C, ids: &[S]) -> Self
    where
        C: ChunkClassifier + ?Sized,
        S: AsRef<str> + Sync,
    {
        let assignments: Vec<Option<String>> = ids
            .par_iter()
            .map(|id| classifier.classify(id.as_ref()).map(str::to_owned))
            .collect();

        let mut plan = Self::default();
        for (id, chunk) in ids.iter().zip(assignments) {
            let id = id.as_ref().to_owned();
            match chunk {
                Some(name) => plan.chunks.entry(name).or_default().push(id),
                None => plan.unassigned.push(id),
            }
        }

        debug!(
            modules = ids.len(),
            chunks = plan.chunks.len(),
            unassigned = plan.unassigned.len(),
            "built manual chunk plan"
        );

        plan
    }

    /// Modules assigned to `name`, if any module was.
    pub fn bucket(&self, name: &str) -> Option<&[String]> {
        self.chunks.get(name).map(Vec::as_slice)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.chunks
            .iter()
            .map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }

    /// Modules the classifier had no opinion about.
    pub fn unassigned(&self) -> &[String] {
        &self.unassigned
    }

    pub fn assigned_count(&self) -> usize {
        self.chunks.values().map(Vec::len).sum()
    }

    /// Total number of modules in the plan.
    pub fn len(&self) -> usize {
        self.assigned_count() + self.unassigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty() && self.unassigned.is_empty()
    }
}
