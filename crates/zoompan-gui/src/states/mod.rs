mod colors;
mod ui;
mod viewer;

pub use colors::ColorsState;
pub use ui::{Tab, UIState};
pub use viewer::ViewerState;
