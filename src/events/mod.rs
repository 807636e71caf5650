pub mod pointer;

pub use pointer::{wire_input_handlers, InputWiring, SharedEditor};
