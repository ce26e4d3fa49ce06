/// How much the player knows about a sector.
///
/// The variants form a total order of "knownness" used for fog-of-war and the
/// fill colour. `VisitedUnscouted` and `RevealedByMap` share a rank: either
/// way the player knows the sector exists but has not scouted it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CellStatus {
    UnvisitedInvisible,
    UnvisitedVisible,
    VisitedUnscouted,
    RevealedByMap,
    VisitedScouted,
    VisitedCleared,
}

impl CellStatus {
    /// Position in the knownness order.
    pub const fn rank(self) -> u8 {
        match self {
            CellStatus::UnvisitedInvisible => 0,
            CellStatus::UnvisitedVisible => 1,
            CellStatus::VisitedUnscouted | CellStatus::RevealedByMap => 2,
            CellStatus::VisitedScouted => 3,
            CellStatus::VisitedCleared => 4,
        }
    }

    /// Whether this status carries at least as much knowledge as `other`.
    pub const fn is_at_least(self, other: CellStatus) -> bool {
        self.rank() >= other.rank()
    }

    /// Visible under normal fog-of-war.
    pub const fn is_visible(self) -> bool {
        self.rank() > CellStatus::UnvisitedInvisible.rank()
    }

    /// The sector has been visited or charted, so its connections and
    /// hazards may be shown.
    pub const fn is_basic_info_visible(self) -> bool {
        self.rank() >= CellStatus::VisitedUnscouted.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_unvisited_invisible_is_hidden() {
        for status in CellStatus::iter() {
            assert_eq!(status.is_visible(), status != CellStatus::UnvisitedInvisible);
        }
    }

    #[test]
    fn revealed_by_map_ranks_with_unscouted() {
        assert_eq!(
            CellStatus::RevealedByMap.rank(),
            CellStatus::VisitedUnscouted.rank()
        );
        assert!(CellStatus::VisitedScouted.is_at_least(CellStatus::RevealedByMap));
        assert!(!CellStatus::UnvisitedVisible.is_basic_info_visible());
        assert!(CellStatus::RevealedByMap.is_basic_info_visible());
    }
}
