pub mod messages;
pub mod render;
pub mod splash;
