//! Raw SQL operations, one module per table.

pub mod subscription_ops;
pub mod user_ops;
