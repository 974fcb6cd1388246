pub mod change;
pub mod interactive;
pub mod list;
pub mod preview;
pub mod show;
