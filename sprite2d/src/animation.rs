//! Frame-strip animation.
//!
//! A texture strip holds `frame_count` equal-width frames side by side. The
//! animation either loops over every frame, plays a bounded "short" sequence,
//! or stays idle. A short sequence with looping enabled keeps cycling
//! `0..=stop`; without looping it plays once and rests on a chosen frame.
//!
//! Time is supplied by the caller in milliseconds, so the state machine has
//! no clock of its own.

/// What the animation is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationMode {
    /// Frame stays where it is.
    Idle,
    /// Loops `0..frame_count` forever.
    Continuous,
    /// Plays up to `stop`. With `looping` set it wraps back to frame 0 and
    /// stays short; otherwise it rests on `final_frame` and goes idle.
    Short {
        stop: u32,
        final_frame: u32,
        looping: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    frame_count: u32,
    current_frame: u32,
    /// Minimum time between frame changes. Zero advances on every call.
    pub frame_interval_ms: u64,
    last_advance_ms: u64,
    mode: AnimationMode,
}

impl AnimationState {
    pub fn new(frame_count: u32, continuous: bool) -> Self {
        Self {
            frame_count: frame_count.max(1),
            current_frame: 0,
            frame_interval_ms: 0,
            last_advance_ms: 0,
            mode: if continuous {
                AnimationMode::Continuous
            } else {
                AnimationMode::Idle
            },
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn last_advance_ms(&self) -> u64 {
        self.last_advance_ms
    }

    /// Replace the strip length, e.g. after binding a new texture. Any short
    /// sequence in progress is dropped and the frame resets to 0.
    pub fn set_frame_count(&mut self, frame_count: u32) {
        self.frame_count = frame_count.max(1);
        self.current_frame = 0;
        self.mode = self.base_mode();
    }

    /// Jump to `frame`. Out-of-range frames reset to 0.
    pub fn set_current_frame(&mut self, frame: u32) {
        self.current_frame = self.checked_frame(frame);
    }

    /// True if looping is enabled, including inside a short sequence.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self.mode,
            AnimationMode::Continuous | AnimationMode::Short { looping: true, .. }
        )
    }

    pub fn set_continuous(&mut self, continuous: bool) {
        self.mode = match self.mode {
            AnimationMode::Short {
                stop, final_frame, ..
            } => AnimationMode::Short {
                stop,
                final_frame,
                looping: continuous,
            },
            _ if continuous => AnimationMode::Continuous,
            _ => AnimationMode::Idle,
        };
    }

    pub fn is_animating(&self) -> bool {
        self.mode != AnimationMode::Idle
    }

    /// Play `start..=stop`, then rest on `final_frame`. If looping is on, the
    /// sequence repeats from frame 0 instead of resting.
    ///
    /// `start` and `final_frame` follow the out-of-range reset policy; `stop`
    /// is clamped to the last frame.
    pub fn start_short(&mut self, start: u32, stop: u32, final_frame: u32) {
        self.current_frame = self.checked_frame(start);
        self.mode = AnimationMode::Short {
            stop: stop.min(self.frame_count - 1),
            final_frame: self.checked_frame(final_frame),
            looping: self.is_continuous(),
        };
    }

    /// Advance one frame if animating and at least `frame_interval_ms` has
    /// passed since the last change. Returns true if the frame changed.
    pub fn animate(&mut self, now_ms: u64) -> bool {
        let end_frame = match self.mode {
            AnimationMode::Idle => return false,
            AnimationMode::Continuous => self.frame_count - 1,
            AnimationMode::Short { stop, .. } => stop,
        };

        if now_ms.saturating_sub(self.last_advance_ms) < self.frame_interval_ms {
            return false;
        }

        if self.current_frame < end_frame {
            self.current_frame += 1;
        } else {
            match self.mode {
                AnimationMode::Short {
                    final_frame,
                    looping: false,
                    ..
                } => {
                    self.current_frame = final_frame;
                    self.mode = AnimationMode::Idle;
                }
                _ => self.current_frame = 0,
            }
        }

        self.last_advance_ms = now_ms;
        true
    }

    fn base_mode(&self) -> AnimationMode {
        if self.is_continuous() {
            AnimationMode::Continuous
        } else {
            AnimationMode::Idle
        }
    }

    fn checked_frame(&self, frame: u32) -> u32 {
        if frame < self.frame_count {
            frame
        } else {
            log::debug!(
                "frame {} out of range for {}-frame strip, resetting to 0",
                frame,
                self.frame_count
            );
            0
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(1, true)
    }
}
