pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, KeyboardWiring};
pub use pointer::{wire_input_handlers, InputWiring};
