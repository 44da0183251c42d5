/*!
    Pull-based frame sources.
*/

use std::sync::Arc;

use crate::{Error, Result, VideoFrame};

/**
    A producer of video frames, pulled one at a time by its consumer.

    End of stream is reported as [`Error::Eof`]. Pipeline stages implement
    this trait themselves so they can be chained.

    Frames are shared with [`Arc`]. A consumer holding a frame must not
    expect the producer to keep that frame's storage to itself; stages that
    reuse buffers detect outstanding references and never write into a
    frame that is still held elsewhere.
*/
pub trait FrameSource {
    /**
        Pulls the next frame.
    */
    fn pull(&mut self) -> Result<Arc<VideoFrame>>;

    /**
        Turns this source into an iterator that ends on [`Error::Eof`].

        Any other error is yielded once and the iterator ends after it.
    */
    fn frames(self) -> Frames<Self>
    where
        Self: Sized,
    {
        Frames {
            source: self,
            done: false,
        }
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn pull(&mut self) -> Result<Arc<VideoFrame>> {
        (**self).pull()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn pull(&mut self) -> Result<Arc<VideoFrame>> {
        (**self).pull()
    }
}

/**
    Iterator over the frames of a [`FrameSource`].
*/
#[derive(Debug)]
pub struct Frames<S> {
    source: S,
    done: bool,
}

impl<S> Frames<S> {
    /**
        Returns the wrapped source.
    */
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: FrameSource> Iterator for Frames<S> {
    type Item = Result<Arc<VideoFrame>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.pull() {
            Ok(frame) => Some(Ok(frame)),
            Err(Error::Eof) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/**
    A frame source backed by an iterator.

    Yields [`Error::Eof`] once the iterator is exhausted.
*/
#[derive(Debug)]
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = Result<Arc<VideoFrame>>>,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
        }
    }
}

impl IterSource<std::vec::IntoIter<Result<Arc<VideoFrame>>>> {
    /**
        Create a source yielding the given frames in order.
    */
    pub fn from_frames(frames: impl IntoIterator<Item = VideoFrame>) -> Self {
        let frames: Vec<_> = frames.into_iter().map(|f| Ok(Arc::new(f))).collect();
        Self::new(frames)
    }
}

impl<I> FrameSource for IterSource<I>
where
    I: Iterator<Item = Result<Arc<VideoFrame>>>,
{
    fn pull(&mut self) -> Result<Arc<VideoFrame>> {
        self.iter.next().unwrap_or(Err(Error::Eof))
    }
}
