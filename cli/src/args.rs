mod global;
mod picker;

pub use global::GlobalArgs;
pub use picker::PickerArgs;
