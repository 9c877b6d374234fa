pub mod config;
pub mod error;

pub mod row;
pub mod split;
pub mod token;
pub mod wrap;

pub use error::WrapError;
pub use row::Row;
pub use split::split_token;
pub use token::{Category, Emphasis, Token};
pub use wrap::{flatten, wrap_tokens};
