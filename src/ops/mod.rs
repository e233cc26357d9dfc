pub mod clone_ops;
pub mod recurrence;
pub mod reminder_ops;
pub mod timeline_ops;

pub use clone_ops::*;
pub use recurrence::*;
pub use reminder_ops::*;
pub use timeline_ops::*;
