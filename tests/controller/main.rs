#[macro_use]
#[path = "../common/mod.rs"]
mod common;
