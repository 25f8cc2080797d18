use std::sync::Arc;

use eframe::egui::{Align2, Color32, CursorIcon, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use mazetrace_core::Coordinate;
use mazetrace_replay::CellCategory;

use crate::{
    action::{ActionRequestQueue, PlacementAction},
    ui::{
        grid_theme::{GridPalette, GridTheme},
        layout::{ComponentUnits, LayoutScale},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        /// The pending marker may move here.
        const PLACEABLE = 0b0000_0001;
        /// The pending marker may not move here.
        const BLOCKED = 0b0000_0010;
        /// Holds the marker that is being moved.
        const MOVING_MARKER = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) coord: Coordinate,
    pub(crate) category: CellCategory,
    pub(crate) visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vec<GridCell>,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(width: usize, height: usize, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub(crate) fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn required_units(&self) -> ComponentUnits {
        ComponentUnits::new(self.width as f32, self.height as f32)
    }
}

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const MOVING_MARKER_BORDER_WIDTH_RATIO: f32 = 4.0;
const MARKER_FONT_RATIO: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveGridVisualState(GridVisualState);

impl EffectiveGridVisualState {
    fn new(state: GridVisualState, hovered: bool) -> Self {
        if hovered {
            Self(state)
        } else {
            Self(state & GridVisualState::MOVING_MARKER)
        }
    }

    fn cell_fill_color(self, category: CellCategory, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::BLOCKED) {
            return palette.cell_blocked;
        }
        if self.0.intersects(GridVisualState::PLACEABLE) {
            return palette.cell_placeable;
        }
        palette.category_color(category)
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
        if self.0.intersects(GridVisualState::MOVING_MARKER) {
            Stroke::new(
                base_width * MOVING_MARKER_BORDER_WIDTH_RATIO,
                palette.border_moving_marker,
            )
        } else {
            Stroke::new(base_width, palette.border)
        }
    }

    fn cursor(self) -> Option<CursorIcon> {
        if self.0.intersects(GridVisualState::BLOCKED) {
            Some(CursorIcon::NotAllowed)
        } else if self.0.intersects(GridVisualState::PLACEABLE) {
            Some(CursorIcon::PointingHand)
        } else {
            None
        }
    }
}

fn marker_label(category: CellCategory) -> Option<&'static str> {
    match category {
        CellCategory::Start => Some("S"),
        CellCategory::End => Some("E"),
        _ => None,
    }
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(ui: &mut Ui, vm: &GridViewModel, action_queue: &mut ActionRequestQueue) {
    let scale = LayoutScale::fit(ui.available_size(), vm.required_units());
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    let grid_size = Vec2::new(vm.width as f32, vm.height as f32) * cell_size;
    let (rect, _response) = ui.allocate_exact_size(grid_size, Sense::hover());

    for cell in vm.cells() {
        let offset = Vec2::new(cell.coord.col as f32, cell.coord.row as f32) * cell_size;
        let cell_rect = Rect::from_min_size(rect.min + offset, Vec2::splat(cell_size));

        let id = ui.id().with((cell.coord.row, cell.coord.col));
        let response = ui.interact(cell_rect, id, Sense::click());
        let vs = EffectiveGridVisualState::new(cell.visual_state, response.hovered());

        let painter = ui.painter();
        painter.rect_filled(cell_rect, 0.0, vs.cell_fill_color(cell.category, palette));
        if let Some(label) = marker_label(cell.category) {
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(cell_size * MARKER_FONT_RATIO),
                palette.text_marker,
            );
        }
        painter.rect_stroke(
            cell_rect,
            0.0,
            vs.cell_border(palette, cell_size),
            StrokeKind::Inside,
        );

        if let Some(cursor) = vs.cursor() {
            ui.ctx().set_cursor_icon(cursor);
        }
        // Only armed placement reacts to clicks.
        if response.clicked()
            && cell
                .visual_state
                .intersects(GridVisualState::PLACEABLE | GridVisualState::BLOCKED)
        {
            action_queue.request(PlacementAction::ClickCell(cell.coord).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::CursorIcon;

    use super::{EffectiveGridVisualState, GridVisualState};

    #[test]
    fn hover_only_effects_apply_while_hovered() {
        let state = GridVisualState::PLACEABLE | GridVisualState::MOVING_MARKER;
        assert_eq!(
            EffectiveGridVisualState::new(state, false).0,
            GridVisualState::MOVING_MARKER
        );
        assert_eq!(EffectiveGridVisualState::new(state, false).cursor(), None);
        assert_eq!(
            EffectiveGridVisualState::new(state, true).cursor(),
            Some(CursorIcon::PointingHand)
        );
        assert_eq!(
            EffectiveGridVisualState::new(GridVisualState::BLOCKED, true).cursor(),
            Some(CursorIcon::NotAllowed)
        );
    }
}
