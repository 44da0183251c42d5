use frame_types::{PlaneView, PlaneViewMut, Rect, Result};

use super::{Region, ScalingKernel};

/**
    Nearest neighbor scaling.

    Each destination pixel copies the source pixel under its centre.
    Fastest of the built-in kernels, and the default.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearestNeighbor;

/// Source index under the centre of destination index `d`.
#[inline]
fn centre_sample(d: u32, dst_len: u32, src_len: u32) -> u32 {
    ((2 * d as u64 + 1) * src_len as u64 / (2 * dst_len as u64)) as u32
}

impl ScalingKernel for NearestNeighbor {
    fn scale_plane(
        &self,
        dst: &mut PlaneViewMut<'_>,
        dst_rect: Rect,
        src: &PlaneView<'_>,
        src_rect: Rect,
    ) -> Result<()> {
        let Some(region) = Region::clip(dst, dst_rect, src, src_rect) else {
            return Ok(());
        };
        let (dw, dh) = (region.dst.width(), region.dst.height());
        let (sw, sh) = (region.src.width(), region.src.height());

        let columns: Vec<(usize, usize)> = (0..dw)
            .map(|dx| {
                let sx = centre_sample(dx, dw, sw);
                (region.dst_offset(dst, dx), region.src_offset(src, sx))
            })
            .collect();

        for dy in 0..dh {
            let sy = centre_sample(dy, dh, sh);
            let src_row = src.row(region.src.y0 + sy);
            let dst_row = dst.row_mut(region.dst.y0 + dy);
            for &(d, s) in &columns {
                dst_row[d..d + region.channels].copy_from_slice(&src_row[s..s + region.channels]);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::tests::{gradient_rgba, scale_with};
    use frame_types::{PixelFormat, Plane, VideoFrame};

    #[test]
    fn centre_sampling() {
        // 4 -> 2 picks source columns 1 and 3
        assert_eq!(centre_sample(0, 2, 4), 1);
        assert_eq!(centre_sample(1, 2, 4), 3);
        // 2 -> 4 repeats each column twice
        let upscaled: Vec<u32> = (0..4).map(|d| centre_sample(d, 4, 2)).collect();
        assert_eq!(upscaled, vec![0, 0, 1, 1]);
    }

    #[test]
    fn identity_copies_pixels() {
        let src = gradient_rgba(5, 3);
        let mut dst = VideoFrame::new(PixelFormat::Rgba, 5, 3).unwrap();
        scale_with(&NearestNeighbor, &src, &mut dst).unwrap();
        assert_eq!(dst.planes[0].data, src.planes[0].data);
    }

    #[test]
    fn downscale_by_two() {
        let src = gradient_rgba(4, 4);
        let mut dst = VideoFrame::new(PixelFormat::Rgba, 2, 2).unwrap();
        scale_with(&NearestNeighbor, &src, &mut dst).unwrap();
        let data = &dst.planes[0].data;
        assert_eq!(&data[0..4], &[1, 1, 2, 255]);
        assert_eq!(&data[4..8], &[3, 1, 4, 255]);
        assert_eq!(&data[8..12], &[1, 3, 4, 255]);
        assert_eq!(&data[12..16], &[3, 3, 6, 255]);
    }

    #[test]
    fn leaves_padding_untouched() {
        let src = gradient_rgba(2, 2);
        let mut dst = VideoFrame::from_planes(
            PixelFormat::Rgba,
            Rect::from_size(2, 2),
            vec![Plane::new(vec![7; 12 * 2], 12)],
        );
        scale_with(&NearestNeighbor, &src, &mut dst).unwrap();
        assert_eq!(&dst.planes[0].data[8..12], &[7, 7, 7, 7]);
        assert_eq!(&dst.planes[0].data[20..24], &[7, 7, 7, 7]);
        assert_eq!(&dst.planes[0].data[12..16], &[0, 1, 1, 255]);
    }
}
