/*!
    Borrowed views over frame planes.

    Views never copy samples; they pair a borrowed slice of plane storage
    with its stride and the rectangle it covers. Views are built from a
    validated [`VideoFrame`], so every row of the rectangle is in bounds.
*/

use crate::{Error, PixelLayout, Rect, Result, Subsampling, VideoFrame};

/**
    A read-only view of one plane.
*/
#[derive(Clone, Copy, Debug)]
pub struct PlaneView<'a> {
    pub data: &'a [u8],
    pub stride: usize,
    pub rect: Rect,
    /// Interleaved samples per pixel.
    pub channels: usize,
}

impl<'a> PlaneView<'a> {
    /**
        Returns the samples of row `y` within the view's rectangle.
    */
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        let start = (y - self.rect.y0) as usize * self.stride;
        &self.data[start..start + self.rect.width() as usize * self.channels]
    }
}

/**
    A mutable view of one plane.
*/
#[derive(Debug)]
pub struct PlaneViewMut<'a> {
    pub data: &'a mut [u8],
    pub stride: usize,
    pub rect: Rect,
    /// Interleaved samples per pixel.
    pub channels: usize,
}

impl PlaneViewMut<'_> {
    /**
        Returns the samples of row `y` within the view's rectangle.
    */
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = (y - self.rect.y0) as usize * self.stride;
        let len = self.rect.width() as usize * self.channels;
        &mut self.data[start..start + len]
    }
}

/**
    Read-only luma and chroma planes of a planar frame.
*/
#[derive(Clone, Copy, Debug)]
pub struct YCbCrView<'a> {
    pub y: PlaneView<'a>,
    pub cb: PlaneView<'a>,
    pub cr: PlaneView<'a>,
    pub subsampling: Subsampling,
}

/**
    Mutable luma and chroma planes of a planar frame.
*/
#[derive(Debug)]
pub struct YCbCrViewMut<'a> {
    pub y: PlaneViewMut<'a>,
    pub cb: PlaneViewMut<'a>,
    pub cr: PlaneViewMut<'a>,
    pub subsampling: Subsampling,
}

/**
    A read-only view of a whole frame.
*/
#[derive(Clone, Copy, Debug)]
pub enum ImageView<'a> {
    Packed(PlaneView<'a>),
    YCbCr(YCbCrView<'a>),
}

impl<'a> ImageView<'a> {
    /**
        Builds a view over a frame's planes after validating it.
    */
    pub fn of(frame: &'a VideoFrame) -> Result<Self> {
        let layout = frame.validate()?;
        let view = |index: usize| {
            let (rect, channels) = layout.plane_geometry(index, frame.rect);
            let plane = &frame.planes[index];
            PlaneView {
                data: &plane.data,
                stride: plane.stride,
                rect,
                channels,
            }
        };
        Ok(match layout {
            PixelLayout::Packed { .. } => Self::Packed(view(0)),
            PixelLayout::Planar(subsampling) => Self::YCbCr(YCbCrView {
                y: view(0),
                cb: view(1),
                cr: view(2),
                subsampling,
            }),
        })
    }
}

/**
    A mutable view of a whole frame.
*/
#[derive(Debug)]
pub enum ImageViewMut<'a> {
    Packed(PlaneViewMut<'a>),
    YCbCr(YCbCrViewMut<'a>),
}

impl<'a> ImageViewMut<'a> {
    /**
        Builds a mutable view over a frame's planes after validating it.
    */
    pub fn of(frame: &'a mut VideoFrame) -> Result<Self> {
        let layout = frame.validate()?;
        let rect = frame.rect;
        let view = |index: usize, plane: &'a mut crate::Plane| {
            let (plane_rect, channels) = layout.plane_geometry(index, rect);
            PlaneViewMut {
                data: &mut plane.data,
                stride: plane.stride,
                rect: plane_rect,
                channels,
            }
        };
        match (layout, frame.planes.as_mut_slice()) {
            (PixelLayout::Packed { .. }, [packed]) => Ok(Self::Packed(view(0, packed))),
            (PixelLayout::Planar(subsampling), [y, cb, cr]) => Ok(Self::YCbCr(YCbCrViewMut {
                y: view(0, y),
                cb: view(1, cb),
                cr: view(2, cr),
                subsampling,
            })),
            _ => Err(Error::invalid_data("plane count does not match layout")),
        }
    }
}
