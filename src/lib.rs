#![allow(unknown_lints)]

pub mod boundary;
pub mod components;
pub mod config;
pub mod constants;
pub mod hover;
pub mod logging;
pub mod map_view;
pub mod models;
pub mod openlayers;
pub mod projection;
pub mod style;

pub use components::app::App;
