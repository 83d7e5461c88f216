pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod process;
pub mod schema;
pub mod store;

pub use error::Error;
