/*!
    Plane resampling through `fast_image_resize`.
*/

use std::fmt;

use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use frame_types::{Error, PlaneView, PlaneViewMut, Rect, Result};

use super::Region;

/**
    A resizer plus tightly packed scratch copies of the regions it works on.

    `fast_image_resize` images have no row padding, so the clipped source
    region is packed into `src` before resizing and the result is copied
    from `dst` into the destination rows. Scratch storage is kept between
    calls and only grows.
*/
pub(crate) struct Resample {
    resizer: Resizer,
    src: Vec<u8>,
    dst: Vec<u8>,
}

impl Resample {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(src_bytes: usize, dst_bytes: usize) -> Self {
        Self {
            resizer: Resizer::new(),
            src: Vec::with_capacity(src_bytes),
            dst: Vec::with_capacity(dst_bytes),
        }
    }

    /**
        Resamples `src_rect` of `src` into `dst_rect` of `dst`.

        Equal extents are copied without resizing.
    */
    pub fn run(
        &mut self,
        options: &ResizeOptions,
        dst: &mut PlaneViewMut<'_>,
        dst_rect: Rect,
        src: &PlaneView<'_>,
        src_rect: Rect,
    ) -> Result<()> {
        let Some(region) = Region::clip(dst, dst_rect, src, src_rect) else {
            return Ok(());
        };
        if dst.channels != src.channels {
            return Err(Error::unsupported_format(format!(
                "cannot resample {} channel pixels into {} channel pixels",
                src.channels, dst.channels
            )));
        }
        let pixel_type = pixel_type(region.channels)?;

        let src_row_len = region.src.width() as usize * region.channels;
        let src_start = region.src_offset(src, 0);
        self.src.clear();
        for y in region.src.y0..region.src.y1 {
            self.src.extend_from_slice(&src.row(y)[src_start..src_start + src_row_len]);
        }

        let resized = region.dst.width() != region.src.width()
            || region.dst.height() != region.src.height();
        if resized {
            self.resize(options, pixel_type, &region)?;
        }
        let packed = if resized { &self.dst } else { &self.src };

        let dst_row_len = region.dst.width() as usize * region.channels;
        let dst_start = region.dst_offset(dst, 0);
        for (dy, row) in packed.chunks_exact(dst_row_len).enumerate() {
            dst.row_mut(region.dst.y0 + dy as u32)[dst_start..dst_start + dst_row_len]
                .copy_from_slice(row);
        }
        Ok(())
    }

    fn resize(
        &mut self,
        options: &ResizeOptions,
        pixel_type: PixelType,
        region: &Region,
    ) -> Result<()> {
        let (dw, dh) = (region.dst.width(), region.dst.height());
        let (sw, sh) = (region.src.width(), region.src.height());
        self.dst.clear();
        self.dst.resize(dw as usize * dh as usize * region.channels, 0);

        let src_image = ImageRef::new(sw, sh, &self.src, pixel_type).map_err(scaling_error)?;
        let mut dst_image =
            Image::from_slice_u8(dw, dh, &mut self.dst, pixel_type).map_err(scaling_error)?;

        self.resizer
            .resize(&src_image, &mut dst_image, options)
            .map_err(scaling_error)
    }
}

impl fmt::Debug for Resample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resample")
            .field("src_capacity", &self.src.capacity())
            .field("dst_capacity", &self.dst.capacity())
            .finish_non_exhaustive()
    }
}

fn pixel_type(channels: usize) -> Result<PixelType> {
    match channels {
        1 => Ok(PixelType::U8),
        2 => Ok(PixelType::U8x2),
        3 => Ok(PixelType::U8x3),
        4 => Ok(PixelType::U8x4),
        n => Err(Error::unsupported_format(format!("cannot resample {n} channel pixels"))),
    }
}

fn scaling_error(err: impl fmt::Display) -> Error {
    Error::scaling(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fast_image_resize::{FilterType, ResizeAlg};

    fn bilinear() -> ResizeOptions {
        ResizeOptions::new()
            .resize_alg(ResizeAlg::Convolution(FilterType::Bilinear))
            .use_alpha(false)
    }

    #[test]
    fn pixel_types() {
        assert!(matches!(pixel_type(1), Ok(PixelType::U8)));
        assert!(matches!(pixel_type(4), Ok(PixelType::U8x4)));
        assert!(pixel_type(5).unwrap_err().is_unsupported_format());
    }

    #[test]
    fn equal_extents_copy_between_strides() {
        // 3x2 single-channel source padded to 5 bytes per row
        let src_data = [1u8, 2, 3, 0, 0, 4, 5, 6, 0, 0];
        let src = PlaneView {
            data: &src_data,
            stride: 5,
            rect: Rect::from_size(3, 2),
            channels: 1,
        };
        let mut dst_data = [9u8; 8];
        let mut dst = PlaneViewMut {
            data: &mut dst_data,
            stride: 4,
            rect: Rect::from_size(3, 2),
            channels: 1,
        };
        let rect = dst.rect;
        Resample::new()
            .run(&bilinear(), &mut dst, rect, &src, src.rect)
            .unwrap();
        assert_eq!(dst_data, [1, 2, 3, 9, 4, 5, 6, 9]);
    }

    #[test]
    fn scratch_is_reused() {
        let src_data = vec![100u8; 16 * 16];
        let src = PlaneView {
            data: &src_data,
            stride: 16,
            rect: Rect::from_size(16, 16),
            channels: 1,
        };
        let mut dst_data = vec![0u8; 4 * 4];
        let mut dst = PlaneViewMut {
            data: &mut dst_data,
            stride: 4,
            rect: Rect::from_size(4, 4),
            channels: 1,
        };

        let mut resample = Resample::new();
        let rect = dst.rect;
        resample.run(&bilinear(), &mut dst, rect, &src, src.rect).unwrap();
        let capacity = (resample.src.capacity(), resample.dst.capacity());
        resample.run(&bilinear(), &mut dst, rect, &src, src.rect).unwrap();

        assert_eq!((resample.src.capacity(), resample.dst.capacity()), capacity);
        assert!(dst_data.iter().all(|&v| v == 100));
    }

    #[test]
    fn channel_mismatch_is_rejected() {
        let src_data = [0u8; 16];
        let src = PlaneView {
            data: &src_data,
            stride: 8,
            rect: Rect::from_size(2, 2),
            channels: 4,
        };
        let mut dst_data = [0u8; 4];
        let mut dst = PlaneViewMut {
            data: &mut dst_data,
            stride: 2,
            rect: Rect::from_size(2, 2),
            channels: 1,
        };
        let rect = dst.rect;
        let err = Resample::new()
            .run(&bilinear(), &mut dst, rect, &src, src.rect)
            .unwrap_err();
        assert!(err.is_unsupported_format());
    }
}
