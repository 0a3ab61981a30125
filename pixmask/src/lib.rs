//! Pixel-exact 2D collision detection between packed bit masks.
//!
//! Build a [`Bit_Mask`] per sprite (usually through one of the builders in
//! [`factory`]), then test candidate placements with
//! [`Bit_Mask::overlaps`]. Masks can be composed, toggled and resampled
//! through [`modify`].

#![warn(clippy::all)]
#![allow(non_camel_case_types)]

pub mod colors {
    pub use pixmask_common::colors::*;
}

pub mod diagnostics {
    pub use pixmask_diagnostics::log::*;
    pub use pixmask_diagnostics::prelude::*;
}

pub mod factory {
    pub use pixmask_factory::*;
}

pub mod math {
    pub use pixmask_math::vector::*;
}

pub mod modify {
    pub use pixmask_modify::*;
}

pub mod test_support {
    pub use pixmask_test::*;
}

pub use pixmask_core::{Bit_Mask, Mask_Error};

pub use pixmask_diagnostics::{fatal, ldebug, lerr, linfo, log, lok, lverbose, lwarn};
pub use pixmask_math::v2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_smoke_test() {
        let sprite = factory::from_ascii_art(".o.\nooo\n.o.", 'o').unwrap();
        let mut wall = Bit_Mask::new(8, 8).unwrap();
        wall.fill();

        assert!(wall.overlaps(&sprite, 5, 5));
        assert!(sprite.overlaps_at(&wall, v2!(-2, 0)));
        assert!(!wall.overlaps(&sprite, 8, 0));

        let doubled = modify::scale(&sprite, 6, 6);
        assert_eq!(doubled.count_bits(), sprite.count_bits() * 4);
    }
}
