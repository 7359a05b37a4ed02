pub mod balance;
pub mod employee;
pub mod leave_request;
pub mod role;
