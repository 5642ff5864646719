//! Reservation flow
//!
//! # 结构
//!
//! - [`availability`] - 确定性伪可用性估算
//! - [`slots`] - 固定 30 分钟时段列表
//! - [`form`] - 表单状态机 (reducer)
//! - [`controller`] - 提交编排（注入存储）

pub mod availability;
pub mod controller;
pub mod form;
pub mod slots;

// Re-exports
pub use controller::FormController;
pub use form::{BookingEvent, BookingState, Confirmation};
