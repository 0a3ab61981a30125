use pixmask_core::Bit_Mask;

/// Checkerboard mask with `(x + y)` odd pixels set. Handy for overlap and
/// compositing fixtures.
pub fn make_checkerboard_mask(width: i32, height: i32) -> Bit_Mask {
    pixmask_factory::from_predicate(width, height, |x, y| (x + y) % 2 == 1)
        .expect("Failed to create checkerboard mask!")
}

/// Fixture shorthand: builds a mask from ASCII art with `'o'` as the set
/// character.
pub fn mask_of_ascii(art: &str) -> Bit_Mask {
    pixmask_factory::from_ascii_art(art, 'o').expect("Failed to create mask from ascii art!")
}

/// Asserts two masks are equal, dumping both as ASCII art on mismatch.
#[track_caller]
pub fn assert_masks_match(actual: &Bit_Mask, expected: &Bit_Mask) {
    assert!(
        actual == expected,
        "masks differ.\nactual:\n{}\nexpected:\n{}",
        actual,
        expected
    );
}
