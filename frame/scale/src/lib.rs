/*!
    Streaming video frame scaling.

    This crate resizes a stream of decoded frames to one fixed output size.
    It sits between a frame source and a consumer: the consumer pulls, and
    the scaler pulls its upstream source on demand.

    # Example

    ```ignore
    use frame_scale::{FrameScaler, ScaleConfig, ScalingAlgorithm};
    use frame_types::FrameSource;

    // Scale to 640 pixels wide, height derived from the first frame
    let config = ScaleConfig::fit_width(640).with_algorithm(ScalingAlgorithm::CatmullRom);
    let mut scaler = FrameScaler::new(decoder, config)?;

    for frame in scaler.frames() {
        let frame = frame?;
        // Display frame
    }
    ```

    # Lazy Initialization

    Output geometry is resolved from the first frame and never changes
    afterwards, even if later frames have a different size. When one of
    the target dimensions is not positive it is derived from the aspect
    ratio of that first frame. Adaptive kernels (see [`AdaptiveKernel`])
    are bound to the resolved geometry at the same moment.

    # Buffer Reuse

    Scaled frames are written into two alternating buffers whose storage
    only ever grows. The frame returned by one pull stays untouched while
    the next pull is scaled into the other buffer. If a consumer still holds
    a frame when its buffer comes round again, that buffer is replaced
    rather than overwritten.

    # Kernels

    Nearest neighbor is built in and is the default. The filtering kernels
    ([`ScalingAlgorithm::ApproxBilinear`], [`BILINEAR`], [`CATMULL_ROM`] and
    any [`FilterType`] wrapped in a [`Kernel`]) resample through
    `fast_image_resize`.

    # Formats

    Packed four-channel formats (RGBA, BGRA) and planar YCbCr with 4:4:4,
    4:2:2 or 4:2:0 chroma are scaled. Any other format is rejected with
    [`Error::UnsupportedFormat`], as is a frame whose format differs from
    the first frame of the stream.
*/

pub use fast_image_resize::FilterType;
pub use frame_types::{
    Error, FrameSource, ImageView, ImageViewMut, PixelFormat, PlaneView, PlaneViewMut, Rect,
    Result, Subsampling, VideoFrame,
};

mod buffer;
mod config;
mod geometry;
mod kernel;
mod scaler;
mod stage;

pub use config::{ScaleConfig, ScalingAlgorithm};
pub use geometry::resolve_output_rect;
pub use kernel::{
    AdaptiveKernel, ApproxBilinear, BILINEAR, BoundKernel, CATMULL_ROM, Kernel, NearestNeighbor,
    ScalingKernel, default_kernel, select_kernel,
};
pub use scaler::Scaler;
pub use stage::FrameScaler;
