/*!
    Scaling kernel strategies.

    The interpolation itself is pluggable through [`ScalingKernel`].
    Kernels that can precompute state for a fixed scale ratio also expose
    [`AdaptiveKernel`], which the scaler uses once the output geometry of
    a stream is known.
*/

use std::fmt;
use std::sync::{Arc, LazyLock};

use frame_types::{Error, ImageView, ImageViewMut, PlaneView, PlaneViewMut, Rect, Result};

mod approx;
mod filter;
mod nearest;
mod resample;

pub use approx::ApproxBilinear;
pub use filter::{BILINEAR, BoundKernel, CATMULL_ROM, Kernel};
pub use nearest::NearestNeighbor;

/**
    A scaling strategy.

    Implementors provide [`ScalingKernel::scale_plane`]; the provided
    [`ScalingKernel::scale`] drives it over every plane of a frame.
*/
pub trait ScalingKernel: fmt::Debug + Send + Sync {
    /**
        Resamples `src_rect` of `src` into `dst_rect` of `dst`.

        Both rectangles are clipped to their plane first. If the clipped
        source is empty the clipped destination is zero-filled.
    */
    fn scale_plane(
        &self,
        dst: &mut PlaneViewMut<'_>,
        dst_rect: Rect,
        src: &PlaneView<'_>,
        src_rect: Rect,
    ) -> Result<()>;

    /**
        Resamples a whole frame.

        Packed frames are scaled with one plane call. Planar frames are
        scaled as one luma and chroma triple, the chroma rectangles derived
        from `dst_rect` and `src_rect` by each side's subsampling. Override
        this to coordinate work across planes.

        Fails with [`Error::UnsupportedFormat`] if `dst` and `src` differ in
        layout or channel count.
    */
    fn scale(
        &self,
        dst: &mut ImageViewMut<'_>,
        dst_rect: Rect,
        src: &ImageView<'_>,
        src_rect: Rect,
    ) -> Result<()> {
        match (dst, src) {
            (ImageViewMut::Packed(dst), ImageView::Packed(src)) => {
                if dst.channels != src.channels {
                    return Err(Error::unsupported_format(format!(
                        "cannot scale {} channel pixels into {} channel pixels",
                        src.channels, dst.channels
                    )));
                }
                self.scale_plane(dst, dst_rect, src, src_rect)?;
            }
            (ImageViewMut::YCbCr(dst), ImageView::YCbCr(src)) => {
                let dst_chroma = dst.subsampling.chroma_rect(dst_rect);
                let src_chroma = src.subsampling.chroma_rect(src_rect);
                self.scale_plane(&mut dst.y, dst_rect, &src.y, src_rect)?;
                self.scale_plane(&mut dst.cb, dst_chroma, &src.cb, src_chroma)?;
                self.scale_plane(&mut dst.cr, dst_chroma, &src.cr, src_chroma)?;
            }
            _ => {
                return Err(Error::unsupported_format(
                    "destination and source differ in pixel layout",
                ));
            }
        }
        Ok(())
    }

    /**
        Returns this kernel's adaptive capability, if it has one.
    */
    fn as_adaptive(&self) -> Option<&dyn AdaptiveKernel> {
        None
    }
}

/**
    Optional capability of kernels that can bind to a fixed scale ratio.
*/
pub trait AdaptiveKernel {
    /**
        Returns a kernel instance specialised for scaling
        `src_width`×`src_height` planes to `dst_width`×`dst_height`.
    */
    fn instantiate_for(
        &self,
        dst_width: u32,
        dst_height: u32,
        src_width: u32,
        src_height: u32,
    ) -> Arc<dyn ScalingKernel>;
}

static DEFAULT_KERNEL: LazyLock<Arc<dyn ScalingKernel>> =
    LazyLock::new(|| Arc::new(NearestNeighbor));

/**
    Returns the kernel used when none is configured (nearest neighbor).
*/
pub fn default_kernel() -> Arc<dyn ScalingKernel> {
    Arc::clone(&DEFAULT_KERNEL)
}

/**
    Chooses the kernel a stream uses once its geometry is resolved.

    Falls back to [`default_kernel`] when nothing is configured. An
    adaptive kernel is instantiated for the output and source extents;
    any other kernel is used as is.
*/
pub fn select_kernel(
    configured: Option<&Arc<dyn ScalingKernel>>,
    output: Rect,
    source: Rect,
) -> Arc<dyn ScalingKernel> {
    let kernel = configured.cloned().unwrap_or_else(default_kernel);
    if let Some(adaptive) = kernel.as_adaptive() {
        return adaptive.instantiate_for(
            output.width(),
            output.height(),
            source.width(),
            source.height(),
        );
    }
    kernel
}

/**
    Destination and source rectangles of one plane call, clipped to their
    planes, with the number of samples per pixel to write.
*/
#[derive(Clone, Copy, Debug)]
pub(crate) struct Region {
    pub dst: Rect,
    pub src: Rect,
    pub channels: usize,
}

impl Region {
    /**
        Clips both rectangles to their planes.

        Returns `None` when there is nothing to resample. A destination
        with no source samples to draw from is zero-filled, so it never
        keeps the samples of an earlier frame.
    */
    pub fn clip(
        dst: &mut PlaneViewMut<'_>,
        dst_rect: Rect,
        src: &PlaneView<'_>,
        src_rect: Rect,
    ) -> Option<Self> {
        let dst_rect = dst_rect.intersect(&dst.rect);
        let src_rect = src_rect.intersect(&src.rect);
        if dst_rect.is_empty() {
            return None;
        }
        if src_rect.is_empty() {
            let start = (dst_rect.x0 - dst.rect.x0) as usize * dst.channels;
            let len = dst_rect.width() as usize * dst.channels;
            for y in dst_rect.y0..dst_rect.y1 {
                dst.row_mut(y)[start..start + len].fill(0);
            }
            return None;
        }
        Some(Self {
            dst: dst_rect,
            src: src_rect,
            channels: dst.channels.min(src.channels),
        })
    }

    /**
        Byte offset of destination column `dx` (relative to the region) in a
        destination row.
    */
    #[inline]
    pub fn dst_offset(&self, dst: &PlaneViewMut<'_>, dx: u32) -> usize {
        (self.dst.x0 - dst.rect.x0 + dx) as usize * dst.channels
    }

    /**
        Byte offset of source column `sx` (relative to the region) in a
        source row.
    */
    #[inline]
    pub fn src_offset(&self, src: &PlaneView<'_>, sx: u32) -> usize {
        (self.src.x0 - src.rect.x0 + sx) as usize * src.channels
    }
}
