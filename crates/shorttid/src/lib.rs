#![doc = include_str!("../README.md")]

mod alphabet;
mod config;
mod encode;
mod error;
mod generator;
mod random;
mod time;

pub use crate::alphabet::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::random::{RandomSource, ThreadRandom};
pub use crate::time::*;
