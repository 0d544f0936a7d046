pub mod case;
pub mod enums;
pub mod response;

pub use case::*;
pub use enums::*;
pub use response::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
