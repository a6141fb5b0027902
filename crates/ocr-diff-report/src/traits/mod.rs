//! Extension traits for customizing report interaction behavior.

mod status_target;

pub use status_target::{status_target_for, GlobalStatusElement, ScopedStatusBox, StatusTarget};
