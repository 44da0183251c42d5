/*!
    Reusable output buffers.
*/

use std::sync::Arc;

use frame_types::{PixelFormat, PixelLayout, Plane, Rect, VideoFrame};

/**
    Two alternating output frames.

    Each scale writes into the working slot, which is then published and
    the other slot becomes the next working slot. A published frame is
    therefore never written by the pull that follows it. If a consumer still
    holds a frame when its slot comes round again, the slot gets fresh
    storage of the same capacity instead of being overwritten.

    Plane storage only grows; shrinking a plane only shortens its length.
*/
#[derive(Debug)]
pub(crate) struct FrameBuffers {
    slots: [Arc<VideoFrame>; 2],
    working: usize,
}

impl FrameBuffers {
    pub fn new(format: PixelFormat) -> Self {
        let empty = || Arc::new(VideoFrame::from_planes(format, Rect::default(), Vec::new()));
        Self {
            slots: [empty(), empty()],
            working: 0,
        }
    }

    /**
        Sizes the working frame for `rect` with tightly packed rows and
        returns it for writing.
    */
    pub fn ensure_capacity(
        &mut self,
        format: PixelFormat,
        layout: PixelLayout,
        rect: Rect,
    ) -> &mut VideoFrame {
        let slot = &mut self.slots[self.working];
        if Arc::get_mut(slot).is_none() {
            log::trace!("output buffer {} still held by consumer, detaching", self.working);
            let detached = VideoFrame::from_planes(
                slot.format,
                slot.rect,
                slot.planes.iter().map(Plane::empty_like).collect(),
            );
            *slot = Arc::new(detached);
        }
        // The slot is uniquely owned here, so this never clones.
        let frame = Arc::make_mut(slot);

        frame.format = format;
        frame.rect = rect;
        frame.planes.resize_with(layout.plane_count(), Plane::default);
        for (index, plane) in frame.planes.iter_mut().enumerate() {
            let (plane_rect, channels) = layout.plane_geometry(index, rect);
            let stride = plane_rect.width() as usize * channels;
            let len = stride * plane_rect.height() as usize;
            if len > plane.data.capacity() {
                log::trace!(
                    "growing output plane {index} from {} to {len} bytes",
                    plane.data.capacity()
                );
            }
            plane.data.resize(len, 0);
            plane.stride = stride;
        }
        frame
    }

    /**
        Publishes the working frame and swaps slots.
    */
    pub fn publish(&mut self) -> Arc<VideoFrame> {
        let published = Arc::clone(&self.slots[self.working]);
        self.working ^= 1;
        published
    }

    /**
        Returns the total storage capacity of both slots, in bytes.
    */
    pub fn capacity(&self) -> usize {
        self.slots.iter().map(|slot| slot.capacity()).sum()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> [VideoFrame; 2] {
        [(*self.slots[0]).clone(), (*self.slots[1]).clone()]
    }
}
