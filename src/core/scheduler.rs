//! Cooperative frame loop keyed to the platform's refresh callback.
//!
//! The platform "request next frame" call is injected as a
//! [`FrameRequester`], so the loop can be driven by hand with synthetic
//! timestamps.

use super::constants::{MAX_FRAME_DT_MS, STATIC_FRAME_DT_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameRequester {
    fn request(&mut self) -> Option<FrameHandle>;
    fn cancel(&mut self, handle: FrameHandle);
}

/// Periodic timer of an external text feed, paused alongside the loop.
pub trait FeedTimer {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Whatever the loop drives once per frame.
pub trait FrameClient {
    fn frame(&mut self, now: f64, dt: f64);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

pub struct FrameScheduler<R: FrameRequester> {
    requester: R,
    state: LoopState,
    pending: Option<FrameHandle>,
    last_now: f64,
    reduced_motion: bool,
    feed: Option<Box<dyn FeedTimer>>,
}

impl<R: FrameRequester> FrameScheduler<R> {
    pub fn new(requester: R, reduced_motion: bool) -> Self {
        Self {
            requester,
            state: LoopState::Stopped,
            pending: None,
            last_now: 0.0,
            reduced_motion,
            feed: None,
        }
    }

    pub fn set_feed(&mut self, feed: Box<dyn FeedTimer>) {
        self.feed = Some(feed);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn requester(&self) -> &R {
        &self.requester
    }

    pub fn start(&mut self, now: f64) {
        if self.is_running() {
            return;
        }
        self.state = LoopState::Running;
        self.last_now = now;
        self.pending = self.requester.request();
        log::debug!("[loop] start at {:.1}", now);
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
        if let Some(h) = self.pending.take() {
            self.requester.cancel(h);
        }
        log::debug!("[loop] stop");
    }

    /// One refresh callback. Returns `false` when the loop was stopped and
    /// nothing ran.
    pub fn tick(&mut self, now: f64, client: &mut impl FrameClient) -> bool {
        self.pending = None;
        if !self.is_running() {
            return false;
        }
        let dt = (now - self.last_now).clamp(0.0, MAX_FRAME_DT_MS);
        self.last_now = now;
        client.frame(now, dt);
        self.pending = self.requester.request();
        true
    }

    /// Single frame for the reduced-motion path, where the loop never runs.
    pub fn render_static(&mut self, now: f64, client: &mut impl FrameClient) {
        client.frame(now, STATIC_FRAME_DT_MS);
    }

    pub fn visibility_changed(&mut self, hidden: bool, now: f64) {
        if hidden {
            self.stop();
            if let Some(f) = self.feed.as_mut() {
                f.stop();
            }
        } else if !self.reduced_motion {
            self.start(now);
            if let Some(f) = self.feed.as_mut() {
                f.start();
            }
        }
    }
}
