/*!
    Decoded frame types.
*/

use crate::{Error, PixelFormat, PixelLayout, Rect, Result, Subsampling};

/**
    One contiguous plane of pixel samples.

    Row `r` of the plane starts at byte `r * stride`. The stride may exceed
    the bytes needed for a row, and `data` may hold more than the plane's
    rectangle needs.
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plane {
    /// Sample storage.
    pub data: Vec<u8>,
    /// Bytes per row.
    pub stride: usize,
}

impl Plane {
    /**
        Create a plane over existing storage.
    */
    pub fn new(data: Vec<u8>, stride: usize) -> Self {
        Self { data, stride }
    }

    /**
        Create a zero-filled plane holding `rows` rows of `stride` bytes.
    */
    pub fn zeroed(stride: usize, rows: usize) -> Self {
        Self {
            data: vec![0; stride * rows],
            stride,
        }
    }

    /**
        Create an empty plane with the same stride and at least the same
        storage capacity as `self`, without copying any samples.
    */
    pub fn empty_like(&self) -> Self {
        Self {
            data: Vec::with_capacity(self.data.capacity()),
            stride: self.stride,
        }
    }
}

/**
    A decoded video frame.

    Contains raw pixel data in the format specified by `format`. Packed
    formats have all samples interleaved in a single plane; planar formats
    store luma, blue chroma and red chroma in three planes, the chroma
    planes covering the rectangle derived from `rect` by the format's
    [`Subsampling`].

    Sample `c` of pixel `(x, y)` in a plane covering `plane_rect` is stored
    at `(y - plane_rect.y0) * stride + (x - plane_rect.x0) * channels + c`.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFrame {
    /// Pixel format of the data.
    pub format: PixelFormat,
    /// Luma (or packed) rectangle covered by the frame.
    pub rect: Rect,
    /// Pixel planes, one for packed formats and three for planar formats.
    pub planes: Vec<Plane>,
}

impl VideoFrame {
    /**
        Create a frame from existing planes.

        No validation is performed; see [`VideoFrame::validate`].
    */
    pub fn from_planes(format: PixelFormat, rect: Rect, planes: Vec<Plane>) -> Self {
        Self {
            format,
            rect,
            planes,
        }
    }

    /**
        Create a zero-filled frame of the given size with tightly packed rows.

        Fails with [`Error::UnsupportedFormat`] for formats without a layout.
    */
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Result<Self> {
        let layout = layout_of(format)?;
        Ok(Self::with_layout(format, layout, Rect::from_size(width, height)))
    }

    /**
        Create a zero-filled planar frame of the given size.
    */
    pub fn new_ycbcr(subsampling: Subsampling, width: u32, height: u32) -> Self {
        Self::with_layout(
            subsampling.pixel_format(),
            PixelLayout::Planar(subsampling),
            Rect::from_size(width, height),
        )
    }

    fn with_layout(format: PixelFormat, layout: PixelLayout, rect: Rect) -> Self {
        let planes = (0..layout.plane_count())
            .map(|index| {
                let (plane_rect, channels) = layout.plane_geometry(index, rect);
                Plane::zeroed(
                    plane_rect.width() as usize * channels,
                    plane_rect.height() as usize,
                )
            })
            .collect();
        Self {
            format,
            rect,
            planes,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.rect.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.rect.height()
    }

    /**
        Returns the storage layout of this frame's format.

        Fails with [`Error::UnsupportedFormat`] for formats without a layout.
    */
    pub fn layout(&self) -> Result<PixelLayout> {
        layout_of(self.format)
    }

    /**
        Checks that the frame's format is supported and that every plane
        covers its rectangle at its stride.
    */
    pub fn validate(&self) -> Result<PixelLayout> {
        let layout = self.layout()?;
        if self.planes.len() != layout.plane_count() {
            return Err(Error::invalid_data(format!(
                "{} frame has {} planes, expected {}",
                self.format,
                self.planes.len(),
                layout.plane_count()
            )));
        }
        for (index, plane) in self.planes.iter().enumerate() {
            let (plane_rect, channels) = layout.plane_geometry(index, self.rect);
            if plane_rect.is_empty() {
                continue;
            }
            let row_len = plane_rect.width() as usize * channels;
            if plane.stride < row_len {
                return Err(Error::invalid_data(format!(
                    "plane {index} stride {} is shorter than its {row_len} byte rows",
                    plane.stride
                )));
            }
            let needed = (plane_rect.height() as usize - 1) * plane.stride + row_len;
            if plane.data.len() < needed {
                return Err(Error::invalid_data(format!(
                    "plane {index} holds {} bytes, {needed} needed for {plane_rect}",
                    plane.data.len()
                )));
            }
        }
        Ok(layout)
    }

    /**
        Returns the total storage capacity of all planes, in bytes.
    */
    pub fn capacity(&self) -> usize {
        self.planes.iter().map(|p| p.data.capacity()).sum()
    }
}

fn layout_of(format: PixelFormat) -> Result<PixelLayout> {
    format
        .layout()
        .ok_or_else(|| Error::unsupported_format(format!("cannot scale {format} frames")))
}

// Ensure frames are Send + Sync
static_assertions::assert_impl_all!(VideoFrame: Send, Sync);
