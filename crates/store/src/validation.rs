//! Request parameter validation.
//!
//! All checks run before the codec touches any file. The overlap rule uses
//! the strict-inequality convention: a fragment whose rectangle shares only
//! an edge with the canvas is rejected, one that covers the last edge pixel
//! is accepted.

use raster::FragmentRect;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{param} must be greater than zero")]
    NonPositive { param: &'static str },
    #[error("{param} can not be more than {max}, got {value}")]
    TooLarge {
        param: &'static str,
        value: u32,
        max: u32,
    },
    #[error("fragment and canvas do not cross by {axis}")]
    NoOverlap { axis: char },
}

/// Validate declared dimensions against the configured maxima.
pub fn validate_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(), ValidationError> {
    if width == 0 {
        return Err(ValidationError::NonPositive { param: "width" });
    }
    if height == 0 {
        return Err(ValidationError::NonPositive { param: "height" });
    }
    if width > max_width {
        return Err(ValidationError::TooLarge {
            param: "width",
            value: width,
            max: max_width,
        });
    }
    if height > max_height {
        return Err(ValidationError::TooLarge {
            param: "height",
            value: height,
            max: max_height,
        });
    }
    Ok(())
}

/// Validate a fragment request: dimensions within limits and a non-empty
/// intersection with the canvas on both axes.
pub fn validate_fragment(
    rect: &FragmentRect,
    canvas_width: u32,
    canvas_height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(), ValidationError> {
    validate_dimensions(rect.width, rect.height, max_width, max_height)?;
    if rect.x + rect.width as i64 <= 0 || rect.x >= canvas_width as i64 {
        return Err(ValidationError::NoOverlap { axis: 'x' });
    }
    if rect.y + rect.height as i64 <= 0 || rect.y >= canvas_height as i64 {
        return Err(ValidationError::NoOverlap { axis: 'y' });
    }
    Ok(())
}
