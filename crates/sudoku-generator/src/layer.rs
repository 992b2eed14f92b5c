//! The three puzzle layers the factory can target.

use std::{fmt, str::FromStr};

/// Which depth-bounded inference pattern a generated puzzle must exhibit.
///
/// These are the three layers exposed to generators; the other three
/// `CandidateLayer` variants (`Layer0Plain`, `Layer0Combined`, `LayerN`) are
/// internal intermediate layers used by the candidate engines and are never
/// serialized as a `PuzzleLayer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleLayer {
    /// `NakedSingleTarget`: at least `⌈ratio·N²⌉` cells removed, no Hidden
    /// Singles anywhere, at least one Naked Single.
    NakedSingle,
    /// `HiddenSingleTarget`: no Naked Singles anywhere, at least one Hidden
    /// Single.
    HiddenSingle,
    /// `ConsensusTarget`: no Naked Singles, no Hidden Singles, at least one
    /// Consensus candidate.
    Consensus,
}

impl fmt::Display for PuzzleLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NakedSingle => "NAKED_SINGLES_L0",
            Self::HiddenSingle => "HIDDEN_SINGLES_L0",
            Self::Consensus => "CONSENSUS_L1",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PuzzleLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NAKED_SINGLES_L0" => Ok(Self::NakedSingle),
            "HIDDEN_SINGLES_L0" => Ok(Self::HiddenSingle),
            "CONSENSUS_L1" => Ok(Self::Consensus),
            other => Err(format!("unrecognized puzzle layer tag: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_tags() {
        assert_eq!(PuzzleLayer::NakedSingle.to_string(), "NAKED_SINGLES_L0");
        assert_eq!(PuzzleLayer::HiddenSingle.to_string(), "HIDDEN_SINGLES_L0");
        assert_eq!(PuzzleLayer::Consensus.to_string(), "CONSENSUS_L1");
    }

    #[test]
    fn test_from_str_roundtrips() {
        for layer in [
            PuzzleLayer::NakedSingle,
            PuzzleLayer::HiddenSingle,
            PuzzleLayer::Consensus,
        ] {
            assert_eq!(layer.to_string().parse(), Ok(layer));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_tag() {
        assert!("BOGUS".parse::<PuzzleLayer>().is_err());
    }
}
