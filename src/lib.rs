pub mod configurator;
pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod nut_config;
