/// Middleware modules
pub mod flash;

pub use flash::{flash_middleware, Flash};
