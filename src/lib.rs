mod app;
pub mod client;
pub mod config;
pub mod error;
mod hooks;
pub mod page;
pub mod state;
pub mod view;

pub use app::{App, PacificApp, PacificAppProps};
pub use config::AppConfig;
pub use error::FetchError;
pub use page::Page;
