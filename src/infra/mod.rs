pub mod edge;
pub mod import;
