/*!
    Output geometry resolution.
*/

use frame_types::{Error, Rect, Result};

/**
    Resolves the output rectangle of a stream from the requested size and
    the rectangle of its first frame.

    When both dimensions are positive they are used as is. When only one is,
    the other is derived from the source aspect ratio with truncating
    integer arithmetic, so 1920×1080 fit to width 640 gives 640×360.

    Fails with [`Error::Configuration`] if neither dimension is positive and
    with [`Error::InvalidData`] if the source extent needed for the ratio
    is zero or the derived dimension overflows.
*/
pub fn resolve_output_rect(width: i32, height: i32, source: Rect) -> Result<Rect> {
    let width = u32::try_from(width).ok().filter(|&w| w > 0);
    let height = u32::try_from(height).ok().filter(|&h| h > 0);
    match (width, height) {
        (Some(w), Some(h)) => Ok(Rect::from_size(w, h)),
        (Some(w), None) => {
            let h = derive(source.height(), w, source.width(), "width")?;
            Ok(Rect::from_size(w, h))
        }
        (None, Some(h)) => {
            let w = derive(source.width(), h, source.height(), "height")?;
            Ok(Rect::from_size(w, h))
        }
        (None, None) => Err(Error::configuration("at least one dimension must be positive")),
    }
}

/// `extent * requested / reference`, truncated.
fn derive(extent: u32, requested: u32, reference: u32, axis: &str) -> Result<u32> {
    if reference == 0 {
        return Err(Error::invalid_data(format!(
            "cannot derive aspect ratio from a first frame with zero {axis}"
        )));
    }
    let derived = extent as u64 * requested as u64 / reference as u64;
    u32::try_from(derived)
        .map_err(|_| Error::invalid_data(format!("derived dimension {derived} is too large")))
}
