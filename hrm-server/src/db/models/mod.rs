//! Domain models
//!
//! Entities are stored and served in the same (camelCase) shape; sensitive
//! fields (the password hash) are never serialized into responses.

pub mod serde_helpers;

pub mod account;
pub mod announcement;
pub mod attendance;
pub mod leave_request;
pub mod payroll;

pub use account::{Account, AccountCreate, AccountId, EmploymentStatus, ProfileUpdate};
pub use announcement::{Announcement, AnnouncementCreate, AnnouncementId, Urgency};
pub use attendance::{
    AttendanceId, AttendanceRecord, AutoClockOutResponse, AutoClockOutResult,
};
pub use leave_request::{
    BulkLeaveDecision, BulkLeaveOutcome, LeaveCreate, LeaveDecision, LeaveRequest, LeaveRequestId,
    LeaveStatus,
};
pub use payroll::{
    PayrollCreate, PayrollId, PayrollQuery, PayrollRecord, PayrollStatus, PayrollUpdate,
};
