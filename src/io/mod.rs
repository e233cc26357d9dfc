pub mod dispatch;
pub mod publish;
pub mod store;

pub use dispatch::*;
pub use publish::*;
pub use store::*;
