/*!
    Push-style frame scaler.
*/

use std::sync::Arc;

use frame_types::{Error, ImageView, ImageViewMut, PixelFormat, Rect, Result, VideoFrame};

use crate::buffer::FrameBuffers;
use crate::config::ScaleConfig;
use crate::geometry::resolve_output_rect;
use crate::kernel::{ScalingKernel, select_kernel};

/**
    State fixed by the first frame of a stream.
*/
#[derive(Debug)]
struct Resolved {
    output: Rect,
    format: PixelFormat,
    kernel: Arc<dyn ScalingKernel>,
    buffers: FrameBuffers,
}

impl Resolved {
    fn new(config: &ScaleConfig, first: &VideoFrame) -> Result<Self> {
        let output = resolve_output_rect(config.width, config.height, first.rect)?;
        let kernel = select_kernel(config.kernel.as_ref(), output, first.rect);
        log::debug!(
            "scaler resolved: {} {} -> {output}, kernel {kernel:?}",
            first.format,
            first.rect
        );
        Ok(Self {
            output,
            format: first.format,
            kernel,
            buffers: FrameBuffers::new(first.format),
        })
    }
}

/**
    Scales frames to one fixed output size.

    The output size and kernel are resolved from the first frame passed to
    [`Scaler::scale`] and held for the scaler's lifetime. Output frames are
    written into two alternating reusable buffers; see the crate docs.
*/
#[derive(Debug)]
pub struct Scaler {
    config: ScaleConfig,
    resolved: Option<Resolved>,
}

impl Scaler {
    /**
        Create a new scaler.

        Fails with [`Error::Configuration`] if neither target dimension is
        positive.
    */
    pub fn new(config: ScaleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            resolved: None,
        })
    }

    /**
        Scales one frame.

        The first call resolves the output geometry and kernel. Frames of an
        unsupported format, or of a different format than the first frame,
        fail with [`Error::UnsupportedFormat`]; malformed frames fail with
        [`Error::InvalidData`]. In every error case the output buffers are
        left untouched.
    */
    pub fn scale(&mut self, frame: &VideoFrame) -> Result<Arc<VideoFrame>> {
        let src = ImageView::of(frame)?;
        let layout = frame.layout()?;

        let state = match &mut self.resolved {
            Some(state) => {
                if state.format != frame.format {
                    log::debug!("rejecting {} frame in a {} stream", frame.format, state.format);
                    return Err(Error::unsupported_format(format!(
                        "stream changed format from {} to {}",
                        state.format, frame.format
                    )));
                }
                state
            }
            None => self.resolved.insert(Resolved::new(&self.config, frame)?),
        };

        let working = state.buffers.ensure_capacity(frame.format, layout, state.output);
        let mut dst = ImageViewMut::of(working)?;
        state.kernel.scale(&mut dst, state.output, &src, frame.rect)?;
        Ok(state.buffers.publish())
    }

    /**
        Returns true once the first frame has fixed the output geometry.
    */
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /**
        Returns the output rectangle, once resolved.
    */
    pub fn output_rect(&self) -> Option<Rect> {
        self.resolved.as_ref().map(|r| r.output)
    }

    /**
        Returns the active kernel, once resolved.
    */
    pub fn kernel(&self) -> Option<&Arc<dyn ScalingKernel>> {
        self.resolved.as_ref().map(|r| &r.kernel)
    }

    /**
        Returns the storage capacity of the output buffers, in bytes.
    */
    pub fn buffer_capacity(&self) -> usize {
        self.resolved.as_ref().map_or(0, |r| r.buffers.capacity())
    }
}

static_assertions::assert_impl_all!(Scaler: Send, Sync);
