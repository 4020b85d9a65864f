pub mod chat_handler;

pub use chat_handler::{__path_get_history, __path_send_message, get_history, send_message};
