#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod card;
pub mod data_center_map;
pub mod map_tooltip;
