pub mod breath;
pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod presets;
pub mod session;
pub mod sound;
pub mod ui;
