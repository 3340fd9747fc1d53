/// Dialog platform trait — the blocking yes/no prompt.
///
/// Any `FnMut(&str) -> bool` is a dialog, which keeps tests short:
/// `|_| true` always confirms.
pub trait Dialog {
    /// Ask the visitor to confirm `message`. `true` means yes.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Dialog for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
