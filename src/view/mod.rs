//! View layer: session state, the controller that drives it, and grid layout.

pub mod controller;
pub mod grid;
pub mod state;

pub use controller::{SearchRequest, ViewController};
pub use grid::{rows, GRID_WIDTH};
pub use state::{Phase, ViewState};
