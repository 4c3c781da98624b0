pub mod config;
pub mod logging;

pub mod fetch;
pub mod page;
pub mod playlist;
pub mod render;
