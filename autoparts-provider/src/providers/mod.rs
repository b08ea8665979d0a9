//! 服务实现

pub(crate) mod common;
mod repara503;

pub use repara503::Repara503Api;
