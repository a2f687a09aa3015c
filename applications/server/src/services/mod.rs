/// Service modules
pub mod flash_store;

pub use flash_store::{FlashMessages, FlashStore, FlashTicket, FLASH_COOKIE};
