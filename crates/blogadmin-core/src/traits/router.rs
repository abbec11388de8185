//! Router trait.

/// The slice of a client-side router the session core needs.
pub trait Router: Send + Sync {
    /// The path currently displayed.
    fn current_path(&self) -> String;

    /// Imperatively move to `path`.
    fn navigate(&self, path: &str);
}
