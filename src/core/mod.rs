pub mod greeter;
pub mod template;
