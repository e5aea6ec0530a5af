pub mod category;
pub mod files;
pub mod session;
