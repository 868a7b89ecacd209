pub mod records;
pub mod session;
pub mod transfer;
