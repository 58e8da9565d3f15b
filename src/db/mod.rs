pub mod common;
pub mod context;
pub mod error;
pub mod factory;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use common::*;
pub use context::*;
pub use error::*;
pub use factory::*;
pub use pool::*;
pub use repositories::*;
