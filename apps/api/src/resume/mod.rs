pub mod handlers;
pub mod template;
