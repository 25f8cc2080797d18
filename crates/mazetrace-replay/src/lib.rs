//! Replay engine for maze search traces.
//!
//! A solver returns a [`Trace`](mazetrace_core::Trace): the order in which it
//! explored cells and the path it found. This crate turns that trace into a
//! two-phase animation driven by a single counter:
//!
//! - [`classify`] maps a cell and an [`AnimationStep`] to a [`CellCategory`].
//!   Cells turn [`CellCategory::Visited`] once the counter passes their
//!   exploration index, and [`CellCategory::Path`] once the whole exploration
//!   phase plus their path index has elapsed.
//! - [`ReplayScheduler`] advances the counter on a [`Cadence`] and can be
//!   cancelled at any time; ticks carry a [`TickToken`] so a tick issued for a
//!   superseded replay never mutates the current one.
//! - [`MarkerPlacement`] is the click-to-place state machine for the start and
//!   end markers.
//! - [`Session`] owns all of the above plus the request lifecycle, and is the
//!   single mutable state owner of the client.

pub use self::{classify::*, placement::*, scheduler::*, session::*, step::*};

mod classify;
mod placement;
mod scheduler;
mod session;
mod step;
