mod accessibility;
mod display;
mod hotkey;
mod workspace;

pub use accessibility::*;
pub use display::*;
pub use hotkey::*;
pub use workspace::*;
