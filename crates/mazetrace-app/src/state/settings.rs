use mazetrace_core::{Algorithm, MazeSize};
use mazetrace_replay::Cadence;
use serde::{Deserialize, Serialize};

/// User choices that survive restarts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) maze_size: MazeSize,
    pub(crate) algorithm: Algorithm,
    pub(crate) cadence: Cadence,
}
