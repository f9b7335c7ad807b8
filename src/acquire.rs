//! Scoped multi-resource acquisition.
//!
//! Acquiring a chain of dependent resources ("open A, then B using A, then
//! C using A") has a classic failure mode: any step can fail, and whatever
//! was already acquired must be released, in reverse order, on every exit
//! path. [`ReleaseStack`] is a deferred-release list for exactly that
//! shape: push a release action after each successful acquisition, and the
//! stack runs them last-in-first-out when it goes out of scope, whether the
//! function returns normally, early with `?`, or panics.
//!
//! Call [`ReleaseStack::dismiss`] once ownership of all resources has been
//! handed off (for example into a struct whose own `Drop` takes over).
//!
//! # Example
//! ```
//! use bindu::acquire::ReleaseStack;
//!
//! fn do_task() -> Result<(), String> {
//!     let mut cleanup = ReleaseStack::new();
//!
//!     let conn = "connection"; // acquire_a()?
//!     cleanup.push(move || println!("closing {}", conn));
//!
//!     let session = "session"; // acquire_b(conn)?
//!     cleanup.push(move || println!("ending {}", session));
//!
//!     // Any `?` from here on releases session, then conn.
//!     Ok(())
//! }
//! # do_task().unwrap();
//! ```

/// A deferred-release list that runs its actions in reverse push order on
/// drop.
#[derive(Default)]
pub struct ReleaseStack<'a> {
    releases: Vec<Box<dyn FnOnce() + 'a>>,
}

impl<'a> ReleaseStack<'a> {
    /// Create an empty release stack.
    pub fn new() -> Self {
        Self {
            releases: Vec::new(),
        }
    }

    /// Register a release action for a just-acquired resource.
    ///
    /// Actions run last-in-first-out, so pushing after each acquisition in
    /// order yields reverse-order release.
    pub fn push<F: FnOnce() + 'a>(&mut self, release: F) {
        self.releases.push(Box::new(release));
    }

    /// Number of pending release actions.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether no release actions are pending.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Cancel all pending releases without running them.
    ///
    /// Use when ownership of the acquired resources has been transferred to
    /// something that will release them itself.
    pub fn dismiss(mut self) {
        self.releases.clear();
    }
}

impl Drop for ReleaseStack<'_> {
    fn drop(&mut self) {
        while let Some(release) = self.releases.pop() {
            release();
        }
    }
}
