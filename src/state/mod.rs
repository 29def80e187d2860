//! Application state module

mod app_state;
mod blog;
pub mod forms;
mod submissions;

pub use app_state::*;
pub use blog::*;
pub use forms::*;
pub use submissions::*;
