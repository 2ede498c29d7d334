#![cfg_attr(not(test), no_std)]

pub mod level;
pub mod switch;

pub use self::level::{Edge, Level};
pub use self::switch::{Config, Switch};
