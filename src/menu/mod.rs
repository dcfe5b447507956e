//! Hierarchical menu navigation.
//!
//! - [`MenuGraph`]: static arena of [`MenuItem`]s wired into circular sibling
//!   rings with child entry links and parent back-edges
//! - [`Menu`]: the cursor, driven by the input loop, observed via one change
//!   and one use handler
//! - [`DeviceMenu`]: the concrete tree this device ships with
//!
//! Zero heap allocation.

pub mod controller;
pub mod error;
pub mod graph;
pub mod intent;
pub mod layout;

pub use controller::{ChangeHandler, Menu, MenuChangeEvent, MenuUseEvent, UseHandler};
pub use error::MenuError;
pub use graph::{ItemId, MenuGraph, MenuItem, DEFAULT_CAPACITY};
pub use intent::MenuIntent;
pub use layout::{DeviceMenu, MenuAction, DEVICE_MENU_ITEMS, ROOT_LABEL};
