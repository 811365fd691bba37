//! Animation definitions
//!
//! An [`Animation`] is an owned, ordered list of frames plus an optional link
//! to the animation that follows it. An [`AnimationSet`] is the closed,
//! validated registry a renderable picks states from.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::render::sprite::Sprite;

/// Name of the state every single-image sprite starts in
pub const IDLE: &str = "Idle";

/// Errors raised while building or driving animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A state name, initial state, or successor link names no animation
    #[error("no animation named '{name}'")]
    LookupFailure {
        /// Name that failed to resolve
        name: String,
    },

    /// An animation with no frames
    #[error("animation '{name}' has no frames")]
    EmptyAnimation {
        /// Offending animation
        name: String,
    },

    /// A frame whose duration is zero, negative or NaN
    #[error("frame {frame} of animation '{name}' has non-positive duration {duration}")]
    NonPositiveDuration {
        /// Offending animation
        name: String,
        /// Frame number
        frame: u32,
        /// Duration found
        duration: f32,
    },
}

/// A single image held for a fixed time
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Image shown while this frame is current
    pub image: Sprite,
    /// Seconds before advancing
    pub duration: f32,
    /// Frame number; not necessarily contiguous or zero-based
    pub number: u32,
}

impl Frame {
    /// Create a frame
    pub fn new(image: Sprite, duration: f32, number: u32) -> Self {
        Self { image, duration, number }
    }
}

/// Ordered frame sequence with an optional successor
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    name: String,
    frames: Vec<Frame>,
    next: Option<String>,
}

impl Animation {
    /// Create an animation that loops to itself
    pub fn new(name: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            name: name.into(),
            frames,
            next: None,
        }
    }

    /// Hand over to `next` after the last frame instead of looping
    #[must_use]
    pub fn then(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// Append a frame
    #[must_use]
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Animation name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frames in playback order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Name of the animation that follows, if any
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// True when playback wraps to this animation's first frame
    pub const fn loops_to_self(&self) -> bool {
        self.next.is_none()
    }

    fn validate(&self) -> Result<(), AnimationError> {
        if self.frames.is_empty() {
            return Err(AnimationError::EmptyAnimation { name: self.name.clone() });
        }
        // `!(d > 0)` also rejects NaN
        if let Some(frame) = self.frames.iter().find(|f| !(f.duration > 0.0)) {
            return Err(AnimationError::NonPositiveDuration {
                name: self.name.clone(),
                frame: frame.number,
                duration: frame.duration,
            });
        }
        Ok(())
    }
}

/// Closed registry of animations keyed by name
///
/// Construction rejects empty animations, non-positive frame durations and
/// dangling successor links, so lookups through a set only fail for names
/// supplied at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSet {
    animations: Vec<Animation>,
    successors: Vec<Option<usize>>,
    by_name: BTreeMap<String, usize>,
}

impl AnimationSet {
    /// Validate and index a collection of animations
    ///
    /// A later animation with the same name replaces an earlier one.
    pub fn new(animations: impl IntoIterator<Item = Animation>) -> Result<Self, AnimationError> {
        let mut by_name = BTreeMap::new();
        let mut list: Vec<Animation> = Vec::new();
        for animation in animations {
            animation.validate()?;
            match by_name.get(animation.name()) {
                Some(&index) => list[index] = animation,
                None => {
                    by_name.insert(animation.name.clone(), list.len());
                    list.push(animation);
                }
            }
        }

        let successors = list
            .iter()
            .map(|animation| match animation.next() {
                Some(next) => by_name
                    .get(next)
                    .copied()
                    .map(Some)
                    .ok_or_else(|| AnimationError::LookupFailure { name: next.to_string() }),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            animations: list,
            successors,
            by_name,
        })
    }

    /// One-frame [`IDLE`] set for a static image
    pub fn single(image: Sprite) -> Self {
        Self {
            animations: vec![Animation::new(IDLE, vec![Frame::new(image, 1.0, 1)])],
            successors: vec![None],
            by_name: BTreeMap::from([(IDLE.to_string(), 0)]),
        }
    }

    /// Look up an animation
    pub fn get(&self, name: &str) -> Result<&Animation, AnimationError> {
        self.resolve(name).map(|index| &self.animations[index])
    }

    pub(crate) fn resolve(&self, name: &str) -> Result<usize, AnimationError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| AnimationError::LookupFailure { name: name.to_string() })
    }

    pub(crate) fn at(&self, index: usize) -> &Animation {
        &self.animations[index]
    }

    pub(crate) fn successor(&self, index: usize) -> Option<usize> {
        self.successors[index]
    }
}
