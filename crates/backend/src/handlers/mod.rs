pub mod categories;
pub mod files;
pub mod session;
