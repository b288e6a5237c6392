use std::ops::Range;

pub const SWAPI_BASE_URL: &str = "https://swapi.py4e.com/api";
pub const ARCHIVE_PATH: &str = "swapi_people.db";

// No CLI flags or config files; the defaults are the configuration, and
// tests narrow the range.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Half-open id range of people to fetch.
    pub ids: Range<u64>,
    pub chunk_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ids: 1..90,
            chunk_size: 5,
        }
    }
}

impl RunConfig {
    pub fn chunks(&self) -> Vec<Vec<u64>> {
        self.ids
            .clone()
            .collect::<Vec<_>>()
            .chunks(self.chunk_size)
            .map(<[u64]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_partitions_into_full_chunks() {
        let chunks = RunConfig::default().chunks();
        assert_eq!(chunks.len(), 18);
        assert!(chunks.iter().all(|chunk| chunk.len() == 5));
        let ids: Vec<u64> = chunks.into_iter().flatten().collect();
        assert_eq!(ids, (1..90).collect::<Vec<_>>());
    }

    #[test]
    fn last_chunk_may_be_short() {
        let config = RunConfig {
            ids: 1..13,
            chunk_size: 5,
        };
        let chunks = config.chunks();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], vec![1, 2, 3, 4, 5]);
        assert_eq!(chunks[1], vec![6, 7, 8, 9, 10]);
        assert_eq!(chunks[2], vec![11, 12]);
    }

    #[test]
    fn chunk_count_is_ceiling_of_range_over_size() {
        for (len, size, expected) in [(10u64, 5usize, 2usize), (11, 5, 3), (4, 5, 1), (1, 1, 1)] {
            let config = RunConfig {
                ids: 0..len,
                chunk_size: size,
            };
            assert_eq!(config.chunks().len(), expected);
        }
    }

    #[test]
    fn empty_range_yields_no_chunks() {
        let config = RunConfig {
            ids: 5..5,
            chunk_size: 5,
        };
        assert!(config.chunks().is_empty());
    }
}
