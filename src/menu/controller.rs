//! Menu cursor and event dispatch.
//!
//! [`Menu`] holds one piece of state, the current item, and moves it over a
//! read-only [`MenuGraph`]. Observers get two single-slot handlers:
//!
//! - change: `(from, to)`, fired *before* the cursor moves
//! - use: `(item)`, fired by [`Menu::use_current`]
//!
//! A move whose link is unset (descending into a leaf) does nothing at all.

use super::graph::{ItemId, MenuGraph, MenuItem, DEFAULT_CAPACITY};
use super::intent::MenuIntent;
use super::MenuError;
use crate::logging::timestamp_us;
use crate::{dev_debug, dev_trace, LOG_STREAM};

/// Cursor transition about to happen.
#[derive(Clone, Copy, Debug)]
pub struct MenuChangeEvent {
    pub from: MenuItem,
    pub to: MenuItem,
}

/// Activation of the current item.
#[derive(Clone, Copy, Debug)]
pub struct MenuUseEvent {
    pub item: MenuItem,
}

/// Change handler slot.
pub type ChangeHandler<'a> = &'a mut dyn FnMut(MenuChangeEvent);

/// Use handler slot.
pub type UseHandler<'a> = &'a mut dyn FnMut(MenuUseEvent);

/// Navigation controller over one menu graph.
///
/// # Example
///
/// ```
/// use rust_morse_input::menu::{Menu, MenuGraph};
///
/// let mut graph = MenuGraph::<8>::new("Main");
/// let root = graph.root();
/// let input = graph.insert_sub_item(root, "Input").unwrap();
/// let settings = graph.insert_next(input, "Settings").unwrap();
///
/// let mut menu = Menu::new(&graph);
/// menu.move_sub_item();
/// assert_eq!(menu.current_id(), input);
/// menu.move_next();
/// assert_eq!(menu.current_id(), settings);
/// menu.move_back();
/// assert_eq!(menu.current_id(), root);
/// ```
pub struct Menu<'a, const N: usize = DEFAULT_CAPACITY> {
    graph: &'a MenuGraph<N>,
    current: &'a MenuItem,
    on_use: Option<UseHandler<'a>>,
    on_change: Option<ChangeHandler<'a>>,
}

impl<'a, const N: usize> Menu<'a, N> {
    /// Create a controller positioned on the graph's root, with no handlers.
    pub fn new(graph: &'a MenuGraph<N>) -> Self {
        Self {
            graph,
            current: graph.root_item(),
            on_use: None,
            on_change: None,
        }
    }

    /// Like [`new`](Self::new), but refuses a graph whose rings are not closed.
    pub fn try_new(graph: &'a MenuGraph<N>) -> Result<Self, MenuError> {
        graph.validate()?;
        Ok(Self::new(graph))
    }

    /// Install the use handler, replacing any previous one.
    pub fn with_use_handler(mut self, handler: UseHandler<'a>) -> Self {
        self.on_use = Some(handler);
        self
    }

    /// Install the change handler, replacing any previous one.
    pub fn with_change_handler(mut self, handler: ChangeHandler<'a>) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn root(&self) -> ItemId {
        self.graph.root()
    }

    /// Id of the item under the cursor.
    #[inline]
    pub fn current_id(&self) -> ItemId {
        self.current.id()
    }

    /// Item under the cursor.
    #[inline]
    pub fn current(&self) -> &'a MenuItem {
        self.current
    }

    pub fn move_next(&mut self) {
        self.set_current(self.current.next());
    }

    pub fn move_previous(&mut self) {
        self.set_current(self.current.previous());
    }

    /// Descend into the child ring. No-op on a leaf.
    pub fn move_sub_item(&mut self) {
        self.set_current(self.current.first_child());
    }

    pub fn move_back(&mut self) {
        self.set_current(self.current.parent_back());
    }

    pub fn to_root(&mut self) {
        self.set_current(Some(self.graph.root()));
    }

    /// Report the current item to the use handler. Does not move the cursor.
    pub fn use_current(&mut self) {
        let item = *self.current;

        if let Some(handler) = self.on_use.as_mut() {
            dev_debug!(LOG_STREAM, Menu, timestamp_us(), "use {}", item.label());
            handler(MenuUseEvent { item });
        }
    }

    /// Dispatch one host intent.
    pub fn apply(&mut self, intent: MenuIntent) {
        match intent {
            MenuIntent::Next => self.move_next(),
            MenuIntent::Previous => self.move_previous(),
            MenuIntent::Enter => self.move_sub_item(),
            MenuIntent::Back => self.move_back(),
            MenuIntent::Root => self.to_root(),
            MenuIntent::Use => self.use_current(),
        }
    }

    // --- Private methods ---

    fn set_current(&mut self, target: Option<ItemId>) {
        let graph = self.graph;
        let Some(next) = target.and_then(|id| graph.item(id)) else {
            return;
        };

        if let Some(handler) = self.on_change.as_mut() {
            handler(MenuChangeEvent {
                from: *self.current,
                to: *next,
            });
        }

        dev_trace!(
            LOG_STREAM,
            Menu,
            timestamp_us(),
            "{} -> {}",
            self.current.label(),
            next.label()
        );
        self.current = next;
    }
}
