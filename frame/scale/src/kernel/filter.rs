use std::fmt;
use std::sync::Arc;

use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions};
use frame_types::{PlaneView, PlaneViewMut, Rect, Result};
use parking_lot::Mutex;

use super::resample::Resample;
use super::{AdaptiveKernel, ScalingKernel};

/**
    A separable convolution filter.

    When downscaling the filter is stretched by the scale ratio so every
    source pixel contributes. Alpha is treated as an ordinary channel.

    An unbound kernel sets up a fresh resizer on every call. Binding one to
    a fixed geometry through [`AdaptiveKernel::instantiate_for`] keeps the
    resizer and its scratch buffers for the lifetime of the stream.
*/
#[derive(Clone, Copy, Debug)]
pub struct Kernel {
    filter: FilterType,
}

/// Tent filter; bilinear interpolation when upscaling.
pub const BILINEAR: Kernel = Kernel::new(FilterType::Bilinear);

/// Catmull-Rom cubic filter; sharper than bilinear at a higher cost.
pub const CATMULL_ROM: Kernel = Kernel::new(FilterType::CatmullRom);

impl Kernel {
    pub const fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    fn options(&self) -> ResizeOptions {
        ResizeOptions::new()
            .resize_alg(ResizeAlg::Convolution(self.filter))
            .use_alpha(false)
    }
}

impl ScalingKernel for Kernel {
    fn scale_plane(
        &self,
        dst: &mut PlaneViewMut<'_>,
        dst_rect: Rect,
        src: &PlaneView<'_>,
        src_rect: Rect,
    ) -> Result<()> {
        Resample::new().run(&self.options(), dst, dst_rect, src, src_rect)
    }

    fn as_adaptive(&self) -> Option<&dyn AdaptiveKernel> {
        Some(self)
    }
}

impl AdaptiveKernel for Kernel {
    fn instantiate_for(
        &self,
        dst_width: u32,
        dst_height: u32,
        src_width: u32,
        src_height: u32,
    ) -> Arc<dyn ScalingKernel> {
        Arc::new(BoundKernel::new(*self, dst_width, dst_height, src_width, src_height))
    }
}

/**
    A [`Kernel`] bound to one scale geometry.

    The resizer and its scratch buffers are sized for the bound luma
    extents up front and reused by every plane of every frame, so a stream
    of fixed-size frames resamples without allocating.
*/
pub struct BoundKernel {
    kernel: Kernel,
    options: ResizeOptions,
    dst: (u32, u32),
    src: (u32, u32),
    resample: Mutex<Resample>,
}

impl BoundKernel {
    pub fn new(
        kernel: Kernel,
        dst_width: u32,
        dst_height: u32,
        src_width: u32,
        src_height: u32,
    ) -> Self {
        // Room for four samples per pixel covers every supported layout.
        let bytes = |w: u32, h: u32| w as usize * h as usize * 4;
        Self {
            kernel,
            options: kernel.options(),
            dst: (dst_width, dst_height),
            src: (src_width, src_height),
            resample: Mutex::new(Resample::with_capacity(
                bytes(src_width, src_height),
                bytes(dst_width, dst_height),
            )),
        }
    }

    /**
        Returns the destination and source extents this kernel was bound to.
    */
    pub fn extents(&self) -> (u32, u32, u32, u32) {
        (self.dst.0, self.dst.1, self.src.0, self.src.1)
    }
}

impl fmt::Debug for BoundKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dw, dh, sw, sh) = self.extents();
        write!(f, "BoundKernel({:?}, {dw}x{dh} <- {sw}x{sh})", self.kernel.filter)
    }
}

impl ScalingKernel for BoundKernel {
    fn scale_plane(
        &self,
        dst: &mut PlaneViewMut<'_>,
        dst_rect: Rect,
        src: &PlaneView<'_>,
        src_rect: Rect,
    ) -> Result<()> {
        self.resample.lock().run(&self.options, dst, dst_rect, src, src_rect)
    }
}
