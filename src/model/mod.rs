pub mod horizon;
pub mod notification;
pub mod task;
pub mod timeline;

pub use horizon::*;
pub use notification::*;
pub use task::*;
pub use timeline::*;
