//! Reusable widgets.

mod code_input;
mod input;

pub use code_input::CodeInput;
pub use input::TextInput;
