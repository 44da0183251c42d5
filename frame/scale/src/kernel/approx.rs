use std::sync::LazyLock;

use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions};
use frame_types::{PlaneView, PlaneViewMut, Rect, Result};

use super::ScalingKernel;
use super::resample::Resample;

static OPTIONS: LazyLock<ResizeOptions> = LazyLock::new(|| {
    ResizeOptions::new()
        .resize_alg(ResizeAlg::Interpolation(FilterType::Bilinear))
        .use_alpha(false)
});

/**
    Approximate bilinear scaling.

    Blends the source pixels around each destination pixel's centre.
    Unlike [`BILINEAR`](super::BILINEAR) it never widens the filter when
    downscaling, so it is cheaper but aliases on large reductions.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApproxBilinear;

impl ScalingKernel for ApproxBilinear {
    fn scale_plane(
        &self,
        dst: &mut PlaneViewMut<'_>,
        dst_rect: Rect,
        src: &PlaneView<'_>,
        src_rect: Rect,
    ) -> Result<()> {
        Resample::new().run(&OPTIONS, dst, dst_rect, src, src_rect)
    }
}
