//! Domain types

mod dev;
mod gender;

pub use dev::{Dev, DevId};
pub use gender::Gender;
