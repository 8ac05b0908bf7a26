pub mod attendance;
pub mod attendance_request;
pub mod role;
pub mod user;
