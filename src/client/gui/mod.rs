pub mod app;
pub mod views;
