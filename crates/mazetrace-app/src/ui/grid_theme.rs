use eframe::egui::{Color32, Visuals};
use mazetrace_replay::CellCategory;

/// Color palette for maze grid rendering.
///
/// Independent from `egui::Visuals` so replay categories keep their meaning
/// regardless of the global UI theme.
#[derive(Debug, Clone)]
pub(crate) struct GridPalette {
    pub(crate) cell_start: Color32,
    pub(crate) cell_end: Color32,
    pub(crate) cell_wall: Color32,
    pub(crate) cell_path: Color32,
    pub(crate) cell_visited: Color32,
    pub(crate) cell_open: Color32,

    pub(crate) cell_placeable: Color32,
    pub(crate) cell_blocked: Color32,

    pub(crate) border: Color32,
    pub(crate) border_moving_marker: Color32,

    pub(crate) text_marker: Color32,
}

impl GridPalette {
    const GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
    const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
    const YELLOW: Color32 = Color32::from_rgb(0xfd, 0xe0, 0x47);
    const BLUE: Color32 = Color32::from_rgb(0x93, 0xc5, 0xfd);

    fn light(visuals: &Visuals) -> Self {
        Self {
            cell_start: Self::GREEN,
            cell_end: Self::RED,
            cell_wall: Color32::from_rgb(0x1f, 0x29, 0x37),
            cell_path: Self::YELLOW,
            cell_visited: Self::BLUE,
            cell_open: Color32::WHITE,

            cell_placeable: visuals.selection.bg_fill,
            cell_blocked: visuals.error_fg_color.gamma_multiply(0.5),

            border: Color32::from_gray(0xd1),
            border_moving_marker: visuals.selection.stroke.color,

            text_marker: Color32::WHITE,
        }
    }

    fn dark(visuals: &Visuals) -> Self {
        Self {
            cell_wall: Color32::from_gray(0x12),
            cell_path: Color32::from_rgb(0xca, 0xb3, 0x2a),
            cell_visited: Color32::from_rgb(0x3b, 0x6e, 0xa8),
            cell_open: Color32::from_gray(0x3a),
            border: visuals.widgets.noninteractive.bg_stroke.color,
            ..Self::light(visuals)
        }
    }

    #[must_use]
    pub(crate) fn category_color(&self, category: CellCategory) -> Color32 {
        match category {
            CellCategory::Start => self.cell_start,
            CellCategory::End => self.cell_end,
            CellCategory::Wall => self.cell_wall,
            CellCategory::Path => self.cell_path,
            CellCategory::Visited => self.cell_visited,
            CellCategory::Open => self.cell_open,
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct GridTheme {
    pub(crate) light: GridPalette,
    pub(crate) dark: GridPalette,
}

impl GridTheme {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: GridPalette::light(visuals),
            dark: GridPalette::dark(visuals),
        }
    }

    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Visuals;
    use mazetrace_replay::CellCategory;

    use super::GridTheme;

    #[test]
    fn categories_have_distinct_colors_in_both_themes() {
        let categories = [
            CellCategory::Start,
            CellCategory::End,
            CellCategory::Wall,
            CellCategory::Path,
            CellCategory::Visited,
            CellCategory::Open,
        ];
        for visuals in [Visuals::light(), Visuals::dark()] {
            let theme = GridTheme::from_visuals(&visuals);
            let palette = theme.palette_for(&visuals);
            for (i, a) in categories.iter().enumerate() {
                for b in &categories[i + 1..] {
                    assert_ne!(
                        palette.category_color(*a),
                        palette.category_color(*b),
                        "{a:?} and {b:?} share a color"
                    );
                }
            }
        }
    }
}
