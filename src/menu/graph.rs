//! Menu item arena and ring linking.
//!
//! Items live in a fixed-capacity array owned by [`MenuGraph`] and refer to
//! each other by [`ItemId`]. Nothing here allocates and nothing is ever removed:
//! the graph is built once at startup and stays static afterwards.
//!
//! # Topology
//!
//! ```text
//!            [Root] ◀─┐ (root.next = root.previous = root.parent_back = root)
//!               │     │
//!   first_child ▼     │ parent_back
//!   ┌──▶ [Input] ◀──▶ [Settings] ◀──┐
//!   └───────────────────────────────┘ (next / previous ring)
//! ```
//!
//! Every sibling ring is circular and every member of a ring shares the same
//! `parent_back`, so "next past the last" wraps and "back" never walks the ring.

use super::MenuError;

/// Default number of item slots in a [`MenuGraph`].
pub const DEFAULT_CAPACITY: usize = 32;

/// Handle to an item inside one [`MenuGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u16);

impl ItemId {
    /// Arena slot of this item.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A labelled node of the menu graph.
///
/// All four links are non-owning. Equality compares labels only.
#[derive(Clone, Copy, Debug)]
pub struct MenuItem {
    id: ItemId,
    label: &'static str,
    next: Option<ItemId>,
    previous: Option<ItemId>,
    first_child: Option<ItemId>,
    parent_back: Option<ItemId>,
}

impl MenuItem {
    const fn unattached(id: ItemId, label: &'static str) -> Self {
        Self {
            id,
            label,
            next: None,
            previous: None,
            first_child: None,
            parent_back: None,
        }
    }

    /// Slot of this item in its graph.
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Label fixed at construction.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn next(&self) -> Option<ItemId> {
        self.next
    }

    #[inline]
    pub fn previous(&self) -> Option<ItemId> {
        self.previous
    }

    /// Entry node of the child ring, if any.
    #[inline]
    pub fn first_child(&self) -> Option<ItemId> {
        self.first_child
    }

    /// Node that becomes current when backing out of this item's ring.
    #[inline]
    pub fn parent_back(&self) -> Option<ItemId> {
        self.parent_back
    }

    /// True once the item belongs to a sibling ring.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.next.is_some() && self.previous.is_some()
    }

    /// True if the item has a child ring.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for MenuItem {}

impl PartialEq<str> for MenuItem {
    fn eq(&self, other: &str) -> bool {
        self.label == other
    }
}

impl PartialEq<&str> for MenuItem {
    fn eq(&self, other: &&str) -> bool {
        self.label == *other
    }
}

/// Fixed-capacity arena of menu items with a self-looped root sentinel.
pub struct MenuGraph<const N: usize = DEFAULT_CAPACITY> {
    items: [MenuItem; N],
    len: usize,
}

impl<const N: usize> MenuGraph<N> {
    /// Create a graph holding only the root sentinel.
    ///
    /// The root's `next`, `previous` and `parent_back` all point to itself.
    pub fn new(root_label: &'static str) -> Self {
        assert!(N >= 1, "menu graph needs room for the root");
        assert!(N <= u16::MAX as usize, "menu graph capacity exceeds ItemId range");

        let root = ItemId(0);
        let mut items = [MenuItem::unattached(root, ""); N];
        items[0] = MenuItem {
            next: Some(root),
            previous: Some(root),
            parent_back: Some(root),
            ..MenuItem::unattached(root, root_label)
        };

        Self { items, len: 1 }
    }

    /// The root sentinel.
    #[inline]
    pub fn root(&self) -> ItemId {
        ItemId(0)
    }

    #[inline]
    pub fn root_item(&self) -> &MenuItem {
        &self.items[0]
    }

    /// Number of items, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the root is present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Look up an item.
    #[inline]
    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.items[..self.len].get(id.index())
    }

    pub fn label(&self, id: ItemId) -> Option<&'static str> {
        self.item(id).map(MenuItem::label)
    }

    pub fn next(&self, id: ItemId) -> Option<ItemId> {
        self.item(id).and_then(MenuItem::next)
    }

    pub fn previous(&self, id: ItemId) -> Option<ItemId> {
        self.item(id).and_then(MenuItem::previous)
    }

    pub fn first_child(&self, id: ItemId) -> Option<ItemId> {
        self.item(id).and_then(MenuItem::first_child)
    }

    pub fn parent_back(&self, id: ItemId) -> Option<ItemId> {
        self.item(id).and_then(MenuItem::parent_back)
    }

    /// First item (by slot order) carrying `label`.
    pub fn find(&self, label: &str) -> Option<ItemId> {
        self.items[..self.len]
            .iter()
            .find(|item| **item == label)
            .map(MenuItem::id)
    }

    /// Allocate an unattached item. Wire it with one of the `add_*` calls.
    pub fn add_item(&mut self, label: &'static str) -> Result<ItemId, MenuError> {
        if self.len >= N {
            return Err(MenuError::Full);
        }

        let id = ItemId(self.len as u16);
        self.items[self.len] = MenuItem::unattached(id, label);
        self.len += 1;
        Ok(id)
    }

    /// Insert `mi` right after `anchor` in the anchor's ring.
    ///
    /// `mi` inherits the anchor's `parent_back`. The former neighbour's
    /// `previous` is repaired, so ring closure holds after the call.
    pub fn add_next(&mut self, anchor: ItemId, mi: ItemId) -> Result<ItemId, MenuError> {
        let (anchor_item, back) = self.check_insert(anchor, mi)?;
        let after = anchor_item.next.ok_or(MenuError::Detached(anchor))?;

        self.link(mi, anchor, after, back)?;
        Ok(mi)
    }

    /// Alias of [`add_next`](Self::add_next).
    #[inline]
    pub fn add(&mut self, anchor: ItemId, mi: ItemId) -> Result<ItemId, MenuError> {
        self.add_next(anchor, mi)
    }

    /// Insert `mi` right before `anchor` in the anchor's ring.
    pub fn add_previous(&mut self, anchor: ItemId, mi: ItemId) -> Result<ItemId, MenuError> {
        let (anchor_item, back) = self.check_insert(anchor, mi)?;
        let before = anchor_item.previous.ok_or(MenuError::Detached(anchor))?;

        self.link(mi, before, anchor, back)?;
        Ok(mi)
    }

    /// Start a new single-node child ring under `parent`.
    ///
    /// Calling this again on the same parent replaces the entry link; the old
    /// child ring stays wired to itself but is no longer reachable from `parent`.
    pub fn add_sub_item(&mut self, parent: ItemId, mi: ItemId) -> Result<ItemId, MenuError> {
        if parent == mi {
            return Err(MenuError::SelfLink(mi));
        }
        self.item(parent).ok_or(MenuError::UnknownItem(parent))?;
        self.check_unattached(mi)?;

        let child = self.item_mut(mi)?;
        child.parent_back = Some(parent);
        child.next = Some(mi);
        child.previous = Some(mi);

        self.item_mut(parent)?.first_child = Some(mi);
        Ok(mi)
    }

    /// Create an item and insert it after `anchor`.
    pub fn insert_next(&mut self, anchor: ItemId, label: &'static str) -> Result<ItemId, MenuError> {
        self.item(anchor).ok_or(MenuError::UnknownItem(anchor))?;
        let mi = self.add_item(label)?;
        self.add_next(anchor, mi)
    }

    /// Create an item and insert it before `anchor`.
    pub fn insert_previous(
        &mut self,
        anchor: ItemId,
        label: &'static str,
    ) -> Result<ItemId, MenuError> {
        self.item(anchor).ok_or(MenuError::UnknownItem(anchor))?;
        let mi = self.add_item(label)?;
        self.add_previous(anchor, mi)
    }

    /// Create an item and make it the entry of `parent`'s child ring.
    pub fn insert_sub_item(
        &mut self,
        parent: ItemId,
        label: &'static str,
    ) -> Result<ItemId, MenuError> {
        self.item(parent).ok_or(MenuError::UnknownItem(parent))?;
        let mi = self.add_item(label)?;
        self.add_sub_item(parent, mi)
    }

    /// Check every attached item for ring closure and shared ancestry.
    ///
    /// Unattached items are ignored; orphaned rings are still checked.
    pub fn validate(&self) -> Result<(), MenuError> {
        for item in &self.items[..self.len] {
            if let Some(child) = item.first_child {
                let attached = self.item(child).map_or(false, MenuItem::is_attached);
                if !attached {
                    return Err(MenuError::DetachedChild { item: item.id });
                }
            }

            if !item.is_attached() {
                continue;
            }

            let next = item.next.and_then(|id| self.item(id));
            let previous = item.previous.and_then(|id| self.item(id));

            let (next, previous) = match (next, previous) {
                (Some(n), Some(p)) => (n, p),
                _ => return Err(MenuError::BrokenRing { item: item.id }),
            };

            if next.previous != Some(item.id) || previous.next != Some(item.id) {
                return Err(MenuError::BrokenRing { item: item.id });
            }

            if next.parent_back != item.parent_back {
                return Err(MenuError::MixedAncestry { item: item.id });
            }
        }

        Ok(())
    }

    // --- Private helpers ---

    fn item_mut(&mut self, id: ItemId) -> Result<&mut MenuItem, MenuError> {
        self.items[..self.len]
            .get_mut(id.index())
            .ok_or(MenuError::UnknownItem(id))
    }

    fn check_unattached(&self, mi: ItemId) -> Result<(), MenuError> {
        let item = self.item(mi).ok_or(MenuError::UnknownItem(mi))?;
        if item.next.is_some() || item.previous.is_some() || item.parent_back.is_some() {
            return Err(MenuError::AlreadyLinked(mi));
        }
        Ok(())
    }

    /// Validate an `add_next`/`add_previous` pair; returns the anchor and its back link.
    fn check_insert(
        &self,
        anchor: ItemId,
        mi: ItemId,
    ) -> Result<(MenuItem, Option<ItemId>), MenuError> {
        if anchor == mi {
            return Err(MenuError::SelfLink(mi));
        }

        let anchor_item = *self.item(anchor).ok_or(MenuError::UnknownItem(anchor))?;
        if !anchor_item.is_attached() {
            return Err(MenuError::Detached(anchor));
        }
        self.check_unattached(mi)?;

        Ok((anchor_item, anchor_item.parent_back))
    }

    /// Splice `mi` between `before` and `after`, which are adjacent in one ring.
    fn link(
        &mut self,
        mi: ItemId,
        before: ItemId,
        after: ItemId,
        back: Option<ItemId>,
    ) -> Result<(), MenuError> {
        let item = self.item_mut(mi)?;
        item.previous = Some(before);
        item.next = Some(after);
        item.parent_back = back;

        self.item_mut(before)?.next = Some(mi);
        self.item_mut(after)?.previous = Some(mi);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_self_looped() {
        let graph = MenuGraph::<4>::new("Root");
        let root = graph.root();

        assert_eq!(graph.next(root), Some(root));
        assert_eq!(graph.previous(root), Some(root));
        assert_eq!(graph.parent_back(root), Some(root));
        assert_eq!(graph.first_child(root), None);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_add_item_is_unattached() {
        let mut graph = MenuGraph::<4>::new("Root");
        let a = graph.add_item("A").unwrap();

        let item = graph.item(a).unwrap();
        assert!(!item.is_attached());
        assert_eq!(item.next(), None);
        assert_eq!(item.parent_back(), None);
    }

    #[test]
    fn test_capacity_exhausted() {
        let mut graph = MenuGraph::<2>::new("Root");
        assert!(graph.add_item("A").is_ok());
        assert_eq!(graph.add_item("B"), Err(MenuError::Full));
    }

    #[test]
    fn test_add_previous_into_single_ring() {
        let mut graph = MenuGraph::<4>::new("Root");
        let root = graph.root();
        let a = graph.insert_sub_item(root, "A").unwrap();
        let z = graph.insert_previous(a, "Z").unwrap();

        assert_eq!(graph.next(z), Some(a));
        assert_eq!(graph.previous(z), Some(a));
        assert_eq!(graph.next(a), Some(z));
        assert_eq!(graph.previous(a), Some(z));
        assert_eq!(graph.parent_back(z), Some(root));
    }

    #[test]
    fn test_anchor_must_be_attached() {
        let mut graph = MenuGraph::<4>::new("Root");
        let a = graph.add_item("A").unwrap();
        let b = graph.add_item("B").unwrap();

        assert_eq!(graph.add_next(a, b), Err(MenuError::Detached(a)));
    }

    #[test]
    fn test_self_link_rejected() {
        let mut graph = MenuGraph::<4>::new("Root");
        let root = graph.root();
        assert_eq!(graph.add_next(root, root), Err(MenuError::SelfLink(root)));
        assert_eq!(graph.add_sub_item(root, root), Err(MenuError::SelfLink(root)));
    }

    #[test]
    fn test_validate_detects_broken_ring() {
        let mut graph = MenuGraph::<4>::new("Root");
        let root = graph.root();
        let a = graph.insert_sub_item(root, "A").unwrap();
        graph.insert_next(a, "B").unwrap();
        assert_eq!(graph.validate(), Ok(()));

        // Rewire by hand to simulate a one-sided insert
        graph.item_mut(a).unwrap().previous = Some(a);
        assert!(matches!(
            graph.validate(),
            Err(MenuError::BrokenRing { .. })
        ));
    }

    #[test]
    fn test_validate_detects_mixed_ancestry() {
        let mut graph = MenuGraph::<4>::new("Root");
        let root = graph.root();
        let a = graph.insert_sub_item(root, "A").unwrap();
        let b = graph.insert_next(a, "B").unwrap();

        graph.item_mut(b).unwrap().parent_back = Some(b);
        assert!(matches!(
            graph.validate(),
            Err(MenuError::MixedAncestry { .. })
        ));
    }

    #[test]
    fn test_label_equality() {
        let mut graph = MenuGraph::<4>::new("Root");
        let a = graph.add_item("Beep").unwrap();
        let b = graph.add_item("Beep").unwrap();

        let (a, b) = (*graph.item(a).unwrap(), *graph.item(b).unwrap());
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
        assert!(a == "Beep");
        assert!(a == *"Beep");
    }
}
