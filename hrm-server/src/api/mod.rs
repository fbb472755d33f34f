//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login, registration, session
//! - [`home`] - role tree roots (redirect targets)
//! - [`profile`] - self-service profile
//! - [`employees`] - directory and status management
//! - [`leave`] - leave requests and approvals
//! - [`payroll`] - payroll records
//! - [`announcements`] - announcements
//! - [`attendance`] - clock-in/out and the auto-clock-out batch
//! - [`activity_log`] - HR view over the activity trail

pub mod activity_log;
pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod employees;
pub mod health;
pub mod home;
pub mod leave;
pub mod payroll;
pub mod profile;
