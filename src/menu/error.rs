//! Menu graph construction errors

use super::graph::ItemId;

/// Wiring error raised while building or validating a [`MenuGraph`](super::MenuGraph).
///
/// Navigation never produces these: a move whose link is unset is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    /// Graph arena has no free slot
    Full,
    /// Id does not belong to this graph
    UnknownItem(ItemId),
    /// Anchor is not part of a sibling ring yet
    Detached(ItemId),
    /// Item to insert is already wired into the graph
    AlreadyLinked(ItemId),
    /// Item cannot be linked relative to itself
    SelfLink(ItemId),
    /// `next`/`previous` links of this item do not close the ring
    BrokenRing { item: ItemId },
    /// This item's `parent_back` differs from its next sibling's
    MixedAncestry { item: ItemId },
    /// This item's `first_child` points to an unattached node
    DetachedChild { item: ItemId },
}

impl core::fmt::Display for MenuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Full => write!(f, "menu graph is full"),
            Self::UnknownItem(id) => write!(f, "unknown menu item #{}", id.index()),
            Self::Detached(id) => write!(f, "menu item #{} is not in a ring", id.index()),
            Self::AlreadyLinked(id) => write!(f, "menu item #{} is already linked", id.index()),
            Self::SelfLink(id) => write!(f, "menu item #{} linked to itself", id.index()),
            Self::BrokenRing { item } => write!(f, "ring not closed at item #{}", item.index()),
            Self::MixedAncestry { item } => {
                write!(f, "item #{} has a different back link than its sibling", item.index())
            }
            Self::DetachedChild { item } => {
                write!(f, "item #{} has a detached first child", item.index())
            }
        }
    }
}
