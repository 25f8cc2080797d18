//! Settings storage through eframe's persistence backend.

use eframe::Storage;

use crate::state::Settings;

const SETTINGS_KEY: &str = "mazetrace.settings";

/// Loads saved settings, if any were stored and still decode.
#[must_use]
pub(crate) fn load_settings(storage: &dyn Storage) -> Option<Settings> {
    let settings = eframe::get_value(storage, SETTINGS_KEY);
    if settings.is_none() && storage.get_string(SETTINGS_KEY).is_some() {
        log::warn!("ignoring unreadable saved settings");
    }
    settings
}

pub(crate) fn save_settings(storage: &mut dyn Storage, settings: &Settings) {
    eframe::set_value(storage, SETTINGS_KEY, settings);
}
