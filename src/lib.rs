pub mod duration;
pub mod error;
pub mod models;
pub mod offset;
pub mod parser;
pub mod uri;

pub use duration::Duration;
pub use error::{Result, VastError};
pub use models::*;
pub use offset::Offset;
pub use parser::parse_vast;
pub use uri::Uri;
