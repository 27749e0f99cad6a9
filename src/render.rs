//! The rendering collaborator boundary.
//!
//! The engine's only contract with a display is this trait: given a sequence
//! of identifiers, render one representation per identifier, in order. Asset
//! lookup and layout are the collaborator's concern.

/// Receives match results and clear requests from a
/// [`SelectionSession`](crate::SelectionSession).
pub trait RenderSink: Send + Sync {
    /// Display the matched symbols, one representation per symbol, in the
    /// order given (the winning group's original relative order).
    fn show_match(&self, symbols: &[String]);

    /// Display the textual "no match" indicator.
    fn show_no_match(&self);

    /// Remove whatever is currently displayed.
    fn clear(&self);
}
