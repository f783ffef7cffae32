use bevy::prelude::*;

use simulation::grid::TileKind;

/// Screen fill behind the grid.
pub fn background_color() -> Color {
    Color::srgb_u8(100, 180, 100)
}

/// Fill color for a placed tile; `None` for `Empty`, which is not drawn.
pub fn tile_color(kind: TileKind) -> Option<Color> {
    match kind {
        TileKind::Empty => None,
        TileKind::Road => Some(Color::srgb_u8(120, 120, 120)),
        TileKind::House => Some(Color::srgb_u8(255, 180, 180)),
        TileKind::Hospital => Some(Color::srgb_u8(255, 0, 0)),
        TileKind::Farm => Some(Color::srgb_u8(0, 200, 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_color() {
        assert_eq!(tile_color(TileKind::Empty), None);
    }

    #[test]
    fn placeable_colors_are_distinct() {
        let colors: Vec<Color> = TileKind::PLACEABLE
            .into_iter()
            .filter_map(tile_color)
            .collect();
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(!colors.contains(&background_color()));
    }
}
