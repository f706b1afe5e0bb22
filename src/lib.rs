pub mod cli;
pub mod load;
pub mod logging;
pub mod media;
pub mod model;
pub mod tui;
