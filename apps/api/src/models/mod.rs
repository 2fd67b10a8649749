pub mod application;
pub mod assignment;
pub mod certification;
pub mod project;
pub mod user;
