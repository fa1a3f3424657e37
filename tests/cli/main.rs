#[path = "../harness/mod.rs"]
mod harness;

mod env;
