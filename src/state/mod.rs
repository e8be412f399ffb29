//! Application state module

mod app_state;
mod flow;
mod forms;
mod splash_state;

pub use app_state::*;
pub use flow::*;
pub use forms::*;
pub use splash_state::*;
