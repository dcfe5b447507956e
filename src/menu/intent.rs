//! Navigation intents decoded by the input loop.

/// One of the six things the host loop can ask of a [`Menu`](super::Menu).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIntent {
    /// Next sibling (wraps)
    Next,
    /// Previous sibling (wraps)
    Previous,
    /// Descend into the child ring
    Enter,
    /// Leave the current ring
    Back,
    /// Jump to the root
    Root,
    /// Activate the current item
    Use,
}

impl MenuIntent {
    /// Map a single-key command (serial monitor, host simulator) to an intent.
    ///
    /// `n`ext, `p`revious, `s`ub-menu, `b`ack, `r`oot, `u`se. Case-insensitive.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'n' => Some(Self::Next),
            'p' => Some(Self::Previous),
            's' => Some(Self::Enter),
            'b' => Some(Self::Back),
            'r' => Some(Self::Root),
            'u' => Some(Self::Use),
            _ => None,
        }
    }

    /// Map a raw byte received on the serial line. Non-ASCII bytes map to nothing.
    pub fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii() {
            Self::from_key(byte as char)
        } else {
            None
        }
    }
}
