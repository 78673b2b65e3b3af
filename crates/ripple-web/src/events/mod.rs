pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_debug_toggle;
pub use pointer::wire_pointermove;
