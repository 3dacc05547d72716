// Library crate exposing modules for integration tests and benches

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod repository;
pub mod util;
pub mod view;
pub mod viewmodel;
