/*!
    Pull-style scaling stage.
*/

use std::sync::Arc;

use frame_types::{FrameSource, Result, VideoFrame};

use crate::config::ScaleConfig;
use crate::scaler::Scaler;

/**
    A pipeline stage that scales the frames of an upstream source.

    Each pull pulls exactly one frame from upstream and scales it. Upstream
    errors, including [`Error::Eof`](frame_types::Error::Eof), are returned
    unchanged without touching the output buffers.

    Pulls on one stage must be serialised; the stage holds no locks.
*/
#[derive(Debug)]
pub struct FrameScaler<S> {
    source: S,
    scaler: Scaler,
}

impl<S: FrameSource> FrameScaler<S> {
    /**
        Create a stage scaling the frames of `source`.

        Fails with [`Error::Configuration`](frame_types::Error::Configuration)
        if neither target dimension is positive; nothing is pulled.
    */
    pub fn new(source: S, config: ScaleConfig) -> Result<Self> {
        Ok(Self {
            source,
            scaler: Scaler::new(config)?,
        })
    }

    /**
        Returns the underlying scaler.
    */
    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    /**
        Consumes the stage, returning the upstream source.
    */
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: FrameSource> FrameSource for FrameScaler<S> {
    fn pull(&mut self) -> Result<Arc<VideoFrame>> {
        let frame = self.source.pull()?;
        self.scaler.scale(&frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScalingAlgorithm;
    use crate::kernel::tests::{flat_ycbcr, gradient_rgba};
    use frame_types::{Error, IterSource, PixelFormat, Plane, Rect, Subsampling};

    /// Source counting its pulls.
    struct Counted<S> {
        inner: S,
        pulls: usize,
    }

    impl<S: FrameSource> FrameSource for Counted<S> {
        fn pull(&mut self) -> Result<Arc<VideoFrame>> {
            self.pulls += 1;
            self.inner.pull()
        }
    }

    fn source(frames: impl IntoIterator<Item = VideoFrame>) -> impl FrameSource {
        IterSource::from_frames(frames)
    }

    #[test_log::test]
    fn misconfiguration_fails_before_pulling() {
        let mut counted = Counted {
            inner: source([gradient_rgba(4, 4)]),
            pulls: 0,
        };
        let err = FrameScaler::new(&mut counted, ScaleConfig::new(-1, -1))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(counted.pulls, 0);
    }

    #[test_log::test]
    fn one_upstream_pull_per_pull() {
        let mut counted = Counted {
            inner: source([gradient_rgba(8, 8), gradient_rgba(8, 8)]),
            pulls: 0,
        };
        let mut stage = FrameScaler::new(&mut counted, ScaleConfig::new(4, 4)).unwrap();
        stage.pull().unwrap();
        stage.pull().unwrap();
        assert!(stage.pull().unwrap_err().is_eof());
        drop(stage);
        assert_eq!(counted.pulls, 3);
    }

    #[test_log::test]
    fn upstream_errors_pass_through() {
        let items = vec![
            Ok(Arc::new(gradient_rgba(8, 8))),
            Err(Error::upstream("decoder failed")),
        ];
        let mut stage = FrameScaler::new(IterSource::new(items), ScaleConfig::new(4, 4)).unwrap();
        let first = stage.pull().unwrap();
        let capacity = stage.scaler().buffer_capacity();

        match stage.pull() {
            Err(Error::Upstream { message }) => assert_eq!(message, "decoder failed"),
            other => panic!("unexpected pull result: {other:?}"),
        }
        assert_eq!(stage.scaler().buffer_capacity(), capacity);
        assert_eq!(first.rect, Rect::from_size(4, 4));
    }

    #[test_log::test]
    fn upstream_error_before_first_frame_leaves_stage_unresolved() {
        let items = vec![Err(Error::upstream("no signal"))];
        let config = ScaleConfig::fit_width(4);
        let mut stage = FrameScaler::new(IterSource::new(items), config).unwrap();
        assert!(stage.pull().is_err());
        assert!(!stage.scaler().is_resolved());
    }

    #[test_log::test]
    fn streams_fixed_size_output() {
        let frames = [
            gradient_rgba(1920, 1080),
            gradient_rgba(1280, 720),
            gradient_rgba(640, 640),
        ];
        let config = ScaleConfig::fit_width(640).with_algorithm(ScalingAlgorithm::ApproxBilinear);
        let stage = FrameScaler::new(source(frames), config).unwrap();

        let rects: Vec<Rect> = stage.frames().map(|f| f.unwrap().rect).collect();
        assert_eq!(rects, vec![Rect::from_size(640, 360); 3]);
    }

    #[test_log::test]
    fn frame_survives_following_pull() {
        let mut first = VideoFrame::new(PixelFormat::Bgra, 16, 16).unwrap();
        first.planes[0].data.fill(42);
        let mut second = first.clone();
        second.planes[0].data.fill(7);

        let mut stage = FrameScaler::new(source([first, second]), ScaleConfig::new(8, 8)).unwrap();
        let n = stage.pull().unwrap();
        let before = n.planes[0].data.clone();
        let n_plus_one = stage.pull().unwrap();

        assert_eq!(n.planes[0].data, before);
        assert!(n.planes[0].data.iter().all(|&v| v == 42));
        assert!(n_plus_one.planes[0].data.iter().all(|&v| v == 7));
    }

    #[test_log::test]
    fn unsupported_frame_fails_only_that_pull() {
        let nv12 = VideoFrame::from_planes(
            PixelFormat::Nv12,
            Rect::from_size(4, 4),
            vec![Plane::new(vec![0; 16], 4), Plane::new(vec![0; 8], 4)],
        );
        let frames = [
            flat_ycbcr(Subsampling::Yuv422, 8, 8),
            nv12,
            flat_ycbcr(Subsampling::Yuv422, 8, 8),
        ];
        let mut stage = FrameScaler::new(source(frames), ScaleConfig::new(4, 4)).unwrap();

        assert!(stage.pull().is_ok());
        assert!(stage.pull().unwrap_err().is_unsupported_format());
        let last = stage.pull().unwrap();
        assert_eq!(last.format, PixelFormat::Yuv422p);
        assert!(stage.pull().unwrap_err().is_eof());
    }

    #[test_log::test]
    fn stages_chain() {
        let frames = [gradient_rgba(64, 32), gradient_rgba(64, 32)];
        let first = FrameScaler::new(source(frames), ScaleConfig::new(32, 16)).unwrap();
        let second = FrameScaler::new(first, ScaleConfig::fit_height(8)).unwrap();

        let rects: Vec<Rect> = second.frames().map(|f| f.unwrap().rect).collect();
        assert_eq!(rects, vec![Rect::from_size(16, 8); 2]);
    }

    #[test_log::test]
    fn into_inner_returns_source() {
        let config = ScaleConfig::new(1, 1);
        let stage = FrameScaler::new(source([gradient_rgba(2, 2)]), config).unwrap();
        let mut upstream = stage.into_inner();
        assert_eq!(upstream.pull().unwrap().width(), 2);
    }
}
