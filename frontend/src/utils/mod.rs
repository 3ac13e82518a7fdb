pub mod marquee;
pub mod platform;
