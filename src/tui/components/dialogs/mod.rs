//! Modal dialogs
//!
//! The detail dialog is the only modal on the page. It borrows two shared
//! resources from the host while open: the page [`ScrollLock`] and the
//! [`InputRouter`] that escape and outside-press listeners register with.

pub mod detail;
pub mod scroll_lock;
pub mod subscription;
pub mod types;

pub use detail::DetailDialog;
pub use scroll_lock::ScrollLock;
pub use subscription::InputRouter;
pub use types::*;
