pub mod cell_style;
pub mod console;
pub mod state;
