//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工管理接口
//! - [`timesheets`] - 工时记录接口 (嵌套在员工下)
//! - [`menus`] - 菜单管理接口
//! - [`menu_items`] - 菜品接口 (嵌套在菜单下)
//!
//! Path-parameterized routes resolve their entities through [`Resolved`].

pub mod health;
pub mod resolve;

// Data models API
pub mod employees;
pub mod menu_items;
pub mod menus;
pub mod timesheets;

pub use resolve::{Resolvable, Resolved};

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
