// State management module.
// Tab catalogue and the navigator that moves between tabs.

#![allow(dead_code)]

pub mod navigation;
pub mod tabs;

pub use navigation::{Surface, TabNavigator};
pub use tabs::Tab;
