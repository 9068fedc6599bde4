//! PL Navigator - interactive terminal navigator for course content trees

pub mod app;
pub mod core;
pub mod course;
pub mod nav;
pub mod ui;
