pub mod component;
pub mod drop;
pub mod template;
