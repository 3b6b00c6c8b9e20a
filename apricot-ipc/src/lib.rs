pub mod command;
pub mod settings;
pub mod snap;

pub use command::{BindingInfo, Command, Response, StateInfo};
pub use settings::{ModifierChoice, Settings};
pub use snap::{Axis, Direction, HorizontalDirection, SnapTarget, VerticalDirection};
