pub mod handlers;
pub mod issuer;
