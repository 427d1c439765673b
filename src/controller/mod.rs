pub mod console;
pub mod generate;
