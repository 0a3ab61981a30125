use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask_Error {
    /// Masks must be at least 1x1.
    Invalid_Dimensions { width: i32, height: i32 },
    /// The alpha-channel builder was given an image without alpha data.
    Missing_Alpha_Channel,
}

impl fmt::Display for Mask_Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mask_Error::Invalid_Dimensions { width, height } => write!(
                f,
                "invalid mask dimensions {}x{}: both must be at least 1",
                width, height
            ),
            Mask_Error::Missing_Alpha_Channel => {
                write!(f, "source image has no alpha channel")
            }
        }
    }
}

impl Error for Mask_Error {}
