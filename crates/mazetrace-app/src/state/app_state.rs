use mazetrace_replay::Session;

use crate::state::Settings;

// AppState holds the session and the persisted settings. Only settings are saved.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) session: Session,
    pub(crate) settings: Settings,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(settings.cadence),
            settings,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.app_state.session
    }

    pub(crate) fn settings_mut(&mut self) -> &mut Settings {
        self.app_state.dirty = true;
        &mut self.app_state.settings
    }
}

#[cfg(test)]
mod tests {
    use mazetrace_core::Algorithm;
    use mazetrace_replay::Cadence;

    use super::AppState;
    use crate::state::Settings;

    #[test]
    fn only_settings_changes_mark_state_dirty() {
        let settings = Settings {
            cadence: Cadence::new(120).unwrap(),
            ..Settings::default()
        };
        let mut app_state = AppState::new(settings);
        assert_eq!(app_state.session.cadence().millis(), 120);

        let mut access = app_state.access();
        let _ = access.session_mut().begin_generate();
        assert!(!app_state.is_dirty());

        app_state.access().settings_mut().algorithm = Algorithm::Dfs;
        assert!(app_state.is_dirty());
        app_state.clear_dirty();
        assert!(!app_state.is_dirty());
    }
}
