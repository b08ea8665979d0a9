//! 导航层：状态机与面向展示层的会话

mod controller;
mod session;

pub use controller::{NavigationController, Ticket};
pub use session::{Outcome, PartsSession};
