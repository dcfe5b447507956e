//! The device's menu tree and what activating each entry does.
//!
//! ```text
//! Main
//!  ├── Input
//!  └── Settings
//!       ├── Beep
//!       ├── Capitalize
//!       ├── Language
//!       └── Save
//! ```

use super::graph::{ItemId, MenuGraph};
use super::MenuError;
use crate::config::{ConfigFault, ConfigHost, Language};
use crate::logging::timestamp_us;
use crate::{dev_info, LOG_STREAM};

/// Label of the root sentinel.
pub const ROOT_LABEL: &str = "Main";

/// Items needed by the device menu, root included.
pub const DEVICE_MENU_ITEMS: usize = 7;

/// What activating a menu entry asks the application to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Leave the menu and start decoding Morse input
    StartInput,
    ToggleBeep,
    ToggleCapitalize,
    /// English → Russian → English; unknown codes restart at English
    CycleLanguage,
    /// Persist the settings record
    Save,
}

impl MenuAction {
    /// Apply the action to the settings handle.
    ///
    /// `StartInput` is left to the caller and does nothing here.
    pub fn perform(self, host: &mut dyn ConfigHost) -> Result<(), ConfigFault> {
        match self {
            MenuAction::StartInput => {}
            MenuAction::ToggleBeep => {
                let config = host.config_mut();
                config.beep = !config.beep;
            }
            MenuAction::ToggleCapitalize => {
                let config = host.config_mut();
                config.capitalize = !config.capitalize;
            }
            MenuAction::CycleLanguage => {
                let config = host.config_mut();
                config.language = match config.language {
                    Language::English => Language::Russian,
                    Language::Russian | Language::Other(_) => Language::English,
                };
            }
            MenuAction::Save => host.save()?,
        }

        dev_info!(LOG_STREAM, Menu, timestamp_us(), "action {:?}", self);
        Ok(())
    }

    /// True if the settings report should be printed once the action is done.
    pub fn reports_config(self) -> bool {
        self == MenuAction::Save
    }
}

/// Ids of the device menu entries inside their graph.
#[derive(Clone, Copy, Debug)]
pub struct DeviceMenu {
    pub root: ItemId,
    pub input: ItemId,
    pub settings: ItemId,
    pub beep: ItemId,
    pub capitalize: ItemId,
    pub language: ItemId,
    pub save: ItemId,
}

impl DeviceMenu {
    /// Wire the device menu under the graph's root.
    ///
    /// The graph should be fresh (`MenuGraph::new(ROOT_LABEL)`); the root's
    /// child ring is replaced otherwise.
    pub fn build<const N: usize>(graph: &mut MenuGraph<N>) -> Result<Self, MenuError> {
        let root = graph.root();

        let input = graph.insert_sub_item(root, "Input")?;
        let settings = graph.insert_next(input, "Settings")?;

        let beep = graph.insert_sub_item(settings, "Beep")?;
        let capitalize = graph.insert_next(beep, "Capitalize")?;
        let language = graph.insert_next(capitalize, "Language")?;
        let save = graph.insert_next(language, "Save")?;

        Ok(Self {
            root,
            input,
            settings,
            beep,
            capitalize,
            language,
            save,
        })
    }

    /// Action bound to an entry; `None` for entries that only navigate.
    pub fn action(&self, item: ItemId) -> Option<MenuAction> {
        match item {
            id if id == self.input => Some(MenuAction::StartInput),
            id if id == self.beep => Some(MenuAction::ToggleBeep),
            id if id == self.capitalize => Some(MenuAction::ToggleCapitalize),
            id if id == self.language => Some(MenuAction::CycleLanguage),
            id if id == self.save => Some(MenuAction::Save),
            _ => None,
        }
    }
}
