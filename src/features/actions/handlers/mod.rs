pub mod action_handler;

pub use action_handler::{__path_dispatch_action, dispatch_action, ActionState};
