use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{grid, status_line, toolbar};
use crate::{
    action::ActionRequestQueue,
    ui::{
        grid::GridViewModel, layout::LayoutScale, status_line::StatusLineViewModel,
        toolbar::ToolbarViewModel,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct MainScreenViewModel {
    pub(crate) toolbar_vm: ToolbarViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
    pub(crate) grid_vm: Option<GridViewModel>,
}

const TOOLBAR_ROWS: f32 = 2.0;
const STATUS_ROWS: f32 = 1.0;
const BANNER_ROWS: f32 = 1.5;

pub(crate) fn show(ui: &mut Ui, vm: &MainScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let row_height = ui.spacing().interact_size.y + ui.spacing().item_spacing.y;
    let scale = LayoutScale::new(row_height);
    let status_rows = if vm.status_line_vm.failure.is_some() {
        STATUS_ROWS + BANNER_ROWS
    } else {
        STATUS_ROWS
    };

    StripBuilder::new(ui)
        .size(Size::exact(row_height * TOOLBAR_ROWS))
        .size(Size::exact(row_height * status_rows))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                toolbar::show(ui, &vm.toolbar_vm, action_queue);
            });
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_line_vm, &scale, action_queue);
            });
            strip.cell(|ui| {
                if let Some(grid_vm) = &vm.grid_vm {
                    ui.vertical_centered(|ui| {
                        grid::show(ui, grid_vm, action_queue);
                    });
                }
            });
        });
}
