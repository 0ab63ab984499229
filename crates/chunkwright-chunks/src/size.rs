//! Chunk-size warning threshold.

use tracing::warn;

/// Bytes per kB as bundlers report chunk sizes.
const BYTES_PER_KB: u64 = 1000;

/// Warning threshold for emitted chunk sizes, in kB.
///
/// Chunks at or below the limit are silent. A chunk is reported only when
/// it is strictly larger than `limit_kb * 1000` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSizeLimit {
    limit_kb: u32,
}

/// A chunk whose size exceeds the warning threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OversizedChunk {
    pub name: String,
    pub size_bytes: u64,
}

impl OversizedChunk {
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_KB as f64
    }
}

impl ChunkSizeLimit {
    pub fn new(limit_kb: u32) -> Self {
        Self { limit_kb }
    }

    pub fn limit_kb(&self) -> u32 {
        self.limit_kb
    }

    pub fn exceeds(&self, size_bytes: u64) -> bool {
        size_bytes > u64::from(self.limit_kb) * BYTES_PER_KB
    }

    /// Chunks larger than the limit, in input order.
    pub fn check<I, N>(&self, chunks: I) -> Vec<OversizedChunk>
    where
        I: IntoIterator<Item = (N, u64)>,
        N: Into<String>,
    {
        chunks
            .into_iter()
            .filter(|(_, size)| self.exceeds(*size))
            .map(|(name, size_bytes)| OversizedChunk {
                name: name.into(),
                size_bytes,
            })
            .collect()
    }

    /// Like [`check`](Self::check), also emitting one warning per chunk.
    pub fn report<I, N>(&self, chunks: I) -> Vec<OversizedChunk>
    where
        I: IntoIterator<Item = (N, u64)>,
        N: Into<String>,
    {
        let oversized = self.check(chunks);
        for chunk in &oversized {
            warn!(
                chunk = %chunk.name,
                size_bytes = chunk.size_bytes,
                limit_kb = self.limit_kb,
                "chunk is larger than the size warning limit"
            );
        }
        oversized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_strict() {
        let limit = ChunkSizeLimit::new(1000);
        assert!(!limit.exceeds(999_999));
        assert!(!limit.exceeds(1_000_000));
        assert!(limit.exceeds(1_000_001));
    }

    #[test]
    fn zero_limit_flags_any_content() {
        let limit = ChunkSizeLimit::new(0);
        assert!(!limit.exceeds(0));
        assert!(limit.exceeds(1));
    }

    #[test]
    fn check_keeps_input_order() {
        let limit = ChunkSizeLimit::new(500);
        let oversized = limit.check([
            ("vendor.js", 1_200_000),
            ("index.js", 12_000),
            ("p5.js", 900_000),
        ]);
        let names: Vec<&str> = oversized.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["vendor.js", "p5.js"]);
        assert_eq!(oversized[1].size_kb(), 900.0);
    }

    #[test]
    fn report_returns_the_same_chunks() {
        let limit = ChunkSizeLimit::new(1);
        let chunks = vec![("a.js".to_string(), 2_000), ("b.css".to_string(), 10)];
        assert_eq!(limit.report(chunks.clone()), limit.check(chunks));
    }
}
