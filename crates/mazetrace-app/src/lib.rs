//! Shared library module for the Mazetrace app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{app::MazetraceApp, config::Config, worker::WorkError};

mod action;
mod app;
mod config;
mod flow;
mod persistence;
mod state;
mod ui;
pub mod version;
mod view_model_builder;
mod worker;
