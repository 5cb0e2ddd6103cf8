pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod types;
pub mod utils;

pub use crate::config::Config;
pub use crate::error::PredictError;
pub use crate::handlers::*;
pub use crate::state::AppState;
pub use crate::types::*;
pub use crate::utils::*;
