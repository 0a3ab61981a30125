#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate pixmask_diagnostics;

pub mod factory;
pub mod pixels;

pub use self::factory::*;
pub use self::pixels::*;
