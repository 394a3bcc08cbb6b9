pub mod log;
pub mod table;
