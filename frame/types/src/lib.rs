/*!
    Shared types for the frame scaling pipeline.

    This crate defines the vocabulary of the pipeline: the types that cross
    stage boundaries. It knows nothing about interpolation, making it
    lightweight for frame sources and consumers to depend on.

    # Core Types

    - [`Rect`] - Half-open integer rectangles
    - [`VideoFrame`] and [`Plane`] - Decoded frame storage

    # Format Types

    - [`PixelFormat`] - Video pixel formats
    - [`PixelLayout`] - Packed vs planar classification of a format
    - [`Subsampling`] - Chroma subsampling ratios

    # Views

    - [`PlaneView`] and [`PlaneViewMut`] - Borrowed single-plane views
    - [`ImageView`] and [`ImageViewMut`] - Borrowed whole-frame views

    # Pipeline

    - [`FrameSource`] - Pull-based frame producer
    - [`IterSource`] - Frame source backed by an iterator

    # Error Handling

    - [`Error`] and [`Result`] - Common error types
*/

mod error;
mod format;
mod frame;
mod rect;
mod source;
mod view;

pub use error::{Error, Result};
pub use format::{PixelFormat, PixelLayout, Subsampling};
pub use frame::{Plane, VideoFrame};
pub use rect::Rect;
pub use source::{FrameSource, Frames, IterSource};
pub use view::{ImageView, ImageViewMut, PlaneView, PlaneViewMut, YCbCrView, YCbCrViewMut};
