/// Session orchestration and background backend calls.
pub mod controller;
/// UI state types.
pub mod state;
/// egui renderer.
pub mod ui;
/// Conversions from session state to render-ready values.
pub mod view_model;
