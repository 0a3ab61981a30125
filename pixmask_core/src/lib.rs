#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate pixmask_math;

pub mod bitmask;
pub mod error;

pub use self::bitmask::Bit_Mask;
pub use self::error::Mask_Error;
