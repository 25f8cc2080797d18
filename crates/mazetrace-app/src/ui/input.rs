use eframe::egui::{InputState, Key};
use mazetrace_core::Marker;

use crate::action::{Action, ActionRequestQueue, AppAction, FlowAction, PlacementAction, UiAction};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self { key, action }
    }

    const fn place(key: Key, marker: Marker) -> Self {
        Self::plain(
            key,
            Action::App(AppAction::Placement(PlacementAction::Begin(marker))),
        )
    }
}

const SHORTCUTS: [Shortcut; 5] = [
    Shortcut::plain(Key::G, Action::Flow(FlowAction::GenerateMaze)),
    Shortcut::plain(Key::Enter, Action::Flow(FlowAction::SolveMaze)),
    Shortcut::place(Key::S, Marker::Start),
    Shortcut::place(Key::E, Marker::End),
    Shortcut::plain(Key::Escape, Action::Ui(UiAction::Dismiss)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // Shortcuts are unmodified keys; leave chords to the platform.
    if i.modifiers.command || i.modifiers.alt {
        return;
    }
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
