pub mod files;
pub mod session;
