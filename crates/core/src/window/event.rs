use crate::Size;

/// A window-related event.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Event {
    /// A window was resized.
    Resized(Size),

    /// A window was focused.
    Focused,

    /// A window was unfocused.
    Unfocused,
}
