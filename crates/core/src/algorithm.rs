use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The comparison sorts a [`Generator`](crate::Generator) can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Selection,
    Bubble,
    Insertion,
    Merge,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort algorithm: {0:?} (expected selection, bubble, insertion or merge)")]
pub struct ParseAlgorithmError(pub String);

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Selection,
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
        }
    }

    /// Upper bound on the frames one run over `len` values emits, the
    /// initial frame included. Exact for selection and bubble sort.
    pub fn max_frames(&self, len: usize) -> u64 {
        let n = len as u64;
        let pairs = n * n.saturating_sub(1) / 2;
        match self {
            Self::Selection => 1 + n * (n + 1) / 2 + n,
            Self::Bubble => 2 + pairs,
            // Per slot: a highlight frame, at most one frame per shift, a
            // settled frame.
            Self::Insertion => 2 + 2 * n + pairs,
            // Every level of the recursion writes each slot at most once.
            Self::Merge => 2 + n * u64::from(n.next_power_of_two().trailing_zeros()),
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SortAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selection" | "selection-sort" => Ok(Self::Selection),
            "bubble" | "bubble-sort" => Ok(Self::Bubble),
            "insertion" | "insertion-sort" => Ok(Self::Insertion),
            "merge" | "mergesort" | "merge-sort" => Ok(Self::Merge),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("bubble".parse(), Ok(SortAlgorithm::Bubble));
        assert_eq!("MergeSort".parse(), Ok(SortAlgorithm::Merge));
        assert_eq!(" insertion ".parse(), Ok(SortAlgorithm::Insertion));
        assert!("quick".parse::<SortAlgorithm>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn frame_bounds_for_small_inputs() {
        assert_eq!(SortAlgorithm::Selection.max_frames(3), 1 + 6 + 3);
        assert_eq!(SortAlgorithm::Bubble.max_frames(3), 5);
        assert_eq!(SortAlgorithm::Insertion.max_frames(2), 7);
        assert_eq!(SortAlgorithm::Merge.max_frames(2), 4);
        assert_eq!(SortAlgorithm::Merge.max_frames(1), 2);
        assert_eq!(SortAlgorithm::Bubble.max_frames(0), 2);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&SortAlgorithm::Selection).expect("serialize");
        assert_eq!(json, "\"selection\"");
    }
}
