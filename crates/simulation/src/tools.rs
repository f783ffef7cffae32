use serde::{Deserialize, Serialize};

use crate::grid::TileKind;

/// The action applied on the next click: build one of the placeable kinds, or
/// erase whatever is in the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuildTool {
    #[default]
    Road,
    House,
    Hospital,
    Farm,
    Erase,
}

impl BuildTool {
    /// Legend order: erase first, then the placeable kinds.
    pub const ALL: [BuildTool; 5] = [
        BuildTool::Erase,
        BuildTool::Road,
        BuildTool::House,
        BuildTool::Hospital,
        BuildTool::Farm,
    ];

    /// Tile this tool places, or `None` for `Erase`.
    pub fn tile_kind(self) -> Option<TileKind> {
        match self {
            BuildTool::Road => Some(TileKind::Road),
            BuildTool::House => Some(TileKind::House),
            BuildTool::Hospital => Some(TileKind::Hospital),
            BuildTool::Farm => Some(TileKind::Farm),
            BuildTool::Erase => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self.tile_kind() {
            Some(kind) => kind.label(),
            None => "Erase",
        }
    }

    /// Tool that builds `kind`; `None` for `Empty`.
    pub fn for_kind(kind: TileKind) -> Option<Self> {
        match kind {
            TileKind::Empty => None,
            TileKind::Road => Some(BuildTool::Road),
            TileKind::House => Some(BuildTool::House),
            TileKind::Hospital => Some(BuildTool::Hospital),
            TileKind::Farm => Some(BuildTool::Farm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_road() {
        assert_eq!(BuildTool::default(), BuildTool::Road);
    }

    #[test]
    fn test_erase_places_nothing() {
        assert_eq!(BuildTool::Erase.tile_kind(), None);
        assert_eq!(BuildTool::Erase.label(), "Erase");
    }

    #[test]
    fn test_every_placeable_kind_has_a_tool() {
        for kind in TileKind::PLACEABLE {
            let tool = BuildTool::for_kind(kind).expect("placeable kinds map to a tool");
            assert_eq!(tool.tile_kind(), Some(kind));
            assert_eq!(tool.label(), kind.label());
        }
        assert_eq!(BuildTool::for_kind(TileKind::Empty), None);
    }
}
