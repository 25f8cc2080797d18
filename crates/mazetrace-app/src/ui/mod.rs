pub(crate) mod grid;
pub(crate) mod grid_theme;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod main_screen;
pub(crate) mod spinner;
pub(crate) mod status_line;
pub(crate) mod toolbar;
