pub mod app;
pub mod builder;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod selection;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
