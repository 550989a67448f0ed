pub mod extract;
pub mod template;
