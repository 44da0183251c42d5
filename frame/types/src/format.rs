/*!
    Pixel format and chroma subsampling types.
*/

use std::fmt;

use crate::Rect;

/**
    Video pixel formats.

    This is a subset of formats commonly produced by decoders and capture
    devices. Only formats with a [`PixelLayout`] can be scaled; the rest are
    listed so that sources can describe what they produce and the scaler can
    reject them by name.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    /// Packed RGBA, 32bpp
    Rgba,
    /// Packed BGRA, 32bpp (common for display on macOS/Windows)
    Bgra,
    /// Packed RGB, 24bpp
    Rgb24,
    /// Packed BGR, 24bpp
    Bgr24,
    /// Planar YUV 4:4:4, 24bpp
    Yuv444p,
    /// Planar YUV 4:2:2, 16bpp
    Yuv422p,
    /// Planar YUV 4:2:0, 12bpp (most common video format)
    Yuv420p,
    /// Semi-planar YUV 4:2:0, 12bpp (common hardware decoder output)
    Nv12,
    /// Planar YUV 4:2:0, 10-bit (HDR content)
    Yuv420p10,
}

impl PixelFormat {
    /**
        Returns the storage layout of this format, or `None` if frames
        of this format cannot be scaled.
    */
    pub const fn layout(self) -> Option<PixelLayout> {
        match self {
            Self::Rgba | Self::Bgra => Some(PixelLayout::Packed { channels: 4 }),
            Self::Yuv444p => Some(PixelLayout::Planar(Subsampling::Yuv444)),
            Self::Yuv422p => Some(PixelLayout::Planar(Subsampling::Yuv422)),
            Self::Yuv420p => Some(PixelLayout::Planar(Subsampling::Yuv420)),
            Self::Rgb24 | Self::Bgr24 | Self::Nv12 | Self::Yuv420p10 => None,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rgba => "rgba",
            Self::Bgra => "bgra",
            Self::Rgb24 => "rgb24",
            Self::Bgr24 => "bgr24",
            Self::Yuv444p => "yuv444p",
            Self::Yuv422p => "yuv422p",
            Self::Yuv420p => "yuv420p",
            Self::Nv12 => "nv12",
            Self::Yuv420p10 => "yuv420p10",
        };
        f.write_str(name)
    }
}

/**
    Chroma subsampling ratio of a planar YCbCr frame.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsampling {
    /// Full resolution chroma
    Yuv444,
    /// Half horizontal chroma resolution
    Yuv422,
    /// Half horizontal and half vertical chroma resolution
    Yuv420,
}

impl Subsampling {
    /**
        Derives the chroma plane rectangle from a luma plane rectangle.

        Both corners are halved along each subsampled axis, so a rectangle
        anchored at the origin keeps its origin and has its size halved
        (truncating). The same derivation must be used for source and
        destination planes.
    */
    pub const fn chroma_rect(self, luma: Rect) -> Rect {
        match self {
            Self::Yuv444 => luma,
            Self::Yuv422 => Rect::new(luma.x0 / 2, luma.y0, luma.x1 / 2, luma.y1),
            Self::Yuv420 => Rect::new(luma.x0 / 2, luma.y0 / 2, luma.x1 / 2, luma.y1 / 2),
        }
    }

    /**
        Returns the planar pixel format using this subsampling.
    */
    pub const fn pixel_format(self) -> PixelFormat {
        match self {
            Self::Yuv444 => PixelFormat::Yuv444p,
            Self::Yuv422 => PixelFormat::Yuv422p,
            Self::Yuv420 => PixelFormat::Yuv420p,
        }
    }
}

impl fmt::Display for Subsampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yuv444 => "4:4:4",
            Self::Yuv422 => "4:2:2",
            Self::Yuv420 => "4:2:0",
        };
        f.write_str(name)
    }
}

/**
    Storage layout of a scalable pixel format.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// One plane with `channels` interleaved samples per pixel.
    Packed { channels: usize },
    /// Three single-channel planes: luma, blue chroma and red chroma.
    Planar(Subsampling),
}

impl PixelLayout {
    /**
        Returns the number of planes a frame of this layout stores.
    */
    pub const fn plane_count(self) -> usize {
        match self {
            Self::Packed { .. } => 1,
            Self::Planar(_) => 3,
        }
    }

    /**
        Returns the rectangle and samples-per-pixel of plane `index`
        for a frame covering `rect`.
    */
    pub const fn plane_geometry(self, index: usize, rect: Rect) -> (Rect, usize) {
        match self {
            Self::Packed { channels } => (rect, channels),
            Self::Planar(_) if index == 0 => (rect, 1),
            Self::Planar(subsampling) => (subsampling.chroma_rect(rect), 1),
        }
    }
}
