pub mod input;
pub mod script;
pub mod time;
pub mod window;
