//! Animation playback state
//!
//! Tracks which animation a renderable is showing, which frame of it is
//! current, and how long that frame has been on screen.

use std::sync::Arc;

use super::clip::{Animation, AnimationError, AnimationSet, Frame};
use crate::render::sprite::Sprite;

/// Playback cursor over an [`AnimationSet`]
///
/// `update` crosses at most one frame boundary per call. A long tick holds
/// the next frame for its full duration instead of skipping frames.
#[derive(Debug, Clone)]
pub struct AnimationState {
    set: Arc<AnimationSet>,
    current: usize,
    frame_index: usize,
    elapsed: f32,
}

impl AnimationState {
    /// Start playing `initial` from its first frame
    pub fn new(set: Arc<AnimationSet>, initial: &str) -> Result<Self, AnimationError> {
        let current = set.resolve(initial)?;
        Ok(Self {
            set,
            current,
            frame_index: 0,
            elapsed: 0.0,
        })
    }

    /// Show one static image, in the [`IDLE`](super::IDLE) state
    pub fn single(image: Sprite) -> Self {
        Self {
            set: Arc::new(AnimationSet::single(image)),
            current: 0,
            frame_index: 0,
            elapsed: 0.0,
        }
    }

    /// Name of the animation being played
    pub fn current_name(&self) -> &str {
        self.animation().name()
    }

    /// Animation set this state draws from
    pub fn set(&self) -> &Arc<AnimationSet> {
        &self.set
    }

    /// Seconds spent in the current frame
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Animation being played
    pub fn animation(&self) -> &Animation {
        self.set.at(self.current)
    }

    /// Frame currently on screen
    pub fn current_frame(&self) -> &Frame {
        &self.animation().frames()[self.frame_index]
    }

    /// Image currently on screen
    pub fn sprite(&self) -> &Sprite {
        &self.current_frame().image
    }

    /// Width of the current image
    pub fn width(&self) -> i32 {
        self.sprite().size().x
    }

    /// Height of the current image
    pub fn height(&self) -> i32 {
        self.sprite().size().y
    }

    /// Advance playback by `dt` seconds
    pub fn update(&mut self, dt: f32) -> &mut Self {
        self.elapsed += dt;
        if self.elapsed < self.current_frame().duration {
            return self;
        }

        self.elapsed = 0.0;
        if self.frame_index + 1 < self.animation().frames().len() {
            self.frame_index += 1;
        } else if let Some(next) = self.set.successor(self.current) {
            log::trace!(
                "Animation '{}' hands over to '{}'",
                self.animation().name(),
                self.set.at(next).name()
            );
            self.current = next;
            self.frame_index = 0;
        } else {
            self.frame_index = 0;
        }
        self
    }

    /// Continuous playback position: frame number plus fractional progress
    pub fn frame(&self) -> f32 {
        let frame = self.current_frame();
        frame.number as f32 + self.elapsed / frame.duration
    }

    /// Seek to a continuous position produced by [`Self::frame`]
    ///
    /// The integer part selects the frame by number, the fraction restores
    /// progress within it. A number with no matching frame rewinds to the
    /// first frame with no progress.
    pub fn set_frame(&mut self, value: f32) {
        let whole = value.floor();
        let matched = self
            .animation()
            .frames()
            .iter()
            .position(|frame| frame.number as f32 == whole);

        match matched {
            Some(index) => {
                self.frame_index = index;
                self.elapsed = (value - whole) * self.current_frame().duration;
            }
            None => {
                self.frame_index = 0;
                self.elapsed = 0.0;
            }
        }
    }

    /// Rewind to the first frame with no progress
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frame_index = 0;
    }

    /// Switch to another animation, starting from its first frame
    ///
    /// Fails with [`AnimationError::LookupFailure`] and leaves playback
    /// untouched if `name` is not in the set.
    pub fn set_state(&mut self, name: &str) -> Result<(), AnimationError> {
        let incoming = self.set.resolve(name)?;
        self.reset();
        self.current = incoming;
        self.reset();
        Ok(())
    }

    /// Switch to another animation, carrying the playback position over
    ///
    /// Meant for animations that share frame numbering, such as the same
    /// walk cycle facing a different direction.
    pub fn set_state_keep_frame(&mut self, name: &str) -> Result<(), AnimationError> {
        let position = self.frame();
        self.set_state(name)?;
        self.set_frame(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::clip::IDLE;
    use crate::render::sprite::Color;
    use approx::assert_relative_eq;

    fn frames(layout: &[(u32, f32)]) -> Vec<Frame> {
        layout.iter()
            .map(|&(number, duration)| Frame::new(Sprite::solid_square(4, Color::BLACK, None), duration, number))
            .collect()
    }

    fn walk_set() -> Arc<AnimationSet> {
        Arc::new(
            AnimationSet::new([
                Animation::new("Walk", frames(&[(0, 0.1), (1, 0.2), (2, 0.3)])),
                Animation::new("Attack", frames(&[(0, 0.05), (1, 0.05)])).then("Walk"),
                Animation::new("Sparse", frames(&[(1, 0.5), (4, 0.5), (9, 0.5)])),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_unknown_initial_state() {
        let err = AnimationState::new(walk_set(), "Swim").unwrap_err();
        assert_eq!(err, AnimationError::LookupFailure { name: "Swim".into() });
    }

    #[test]
    fn test_cycles_on_exact_boundaries() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        let durations = [0.1, 0.2, 0.3];
        let mut seen = Vec::new();

        for _ in 0..4 {
            for (i, d) in durations.iter().enumerate() {
                assert_eq!(state.current_frame().number as usize, i);
                seen.push(state.current_frame().number);
                state.update(*d);
            }
        }

        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2]);
        assert_eq!(state.current_name(), "Walk");
    }

    #[test]
    fn test_partial_progress_does_not_advance() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        state.update(0.04).update(0.04);
        assert_eq!(state.current_frame().number, 0);
        assert_relative_eq!(state.frame(), 0.8, epsilon = 1e-5);
    }

    #[test]
    fn test_large_tick_crosses_one_boundary() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        state.update(10.0);
        assert_eq!(state.current_frame().number, 1);
        assert_relative_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_hands_over_to_next_animation() {
        let mut state = AnimationState::new(walk_set(), "Attack").unwrap();
        state.update(0.05);
        assert_eq!(state.current_name(), "Attack");
        state.update(0.05);
        assert_eq!(state.current_name(), "Walk");
        assert_eq!(state.current_frame().number, 0);
    }

    #[test]
    fn test_set_frame_round_trip_keeps_image() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        state.update(0.1).update(0.05);
        let before = state.sprite().clone();
        let position = state.frame();

        state.set_frame(position);

        assert_eq!(*state.sprite(), before);
        assert_relative_eq!(state.frame(), position, epsilon = 1e-5);
    }

    #[test]
    fn test_set_frame_matches_by_number_not_index() {
        let mut state = AnimationState::new(walk_set(), "Sparse").unwrap();
        state.set_frame(4.5);
        assert_eq!(state.current_frame().number, 4);
        assert_relative_eq!(state.elapsed(), 0.25);
    }

    #[test]
    fn test_set_frame_past_end_wraps_to_start() {
        let mut state = AnimationState::new(walk_set(), "Sparse").unwrap();
        state.update(0.5);
        state.set_frame(12.3);
        assert_eq!(state.current_frame().number, 1);
        assert_relative_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_set_frame_in_gap_wraps_to_start() {
        let mut state = AnimationState::new(walk_set(), "Sparse").unwrap();
        state.set_frame(5.5);
        assert_eq!(state.current_frame().number, 1);
        assert_relative_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        state.update(0.1).update(0.1);
        state.reset();
        assert_eq!(state.current_frame().number, 0);
        assert_relative_eq!(state.frame(), 0.0);
    }

    #[test]
    fn test_set_state_resets_both_sides() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        state.update(0.1).update(0.1);
        state.set_state("Attack").unwrap();
        assert_eq!(state.current_name(), "Attack");
        assert_relative_eq!(state.frame(), 0.0);
    }

    #[test]
    fn test_set_state_unknown_leaves_state_untouched() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        state.update(0.1).update(0.05);
        let position = state.frame();

        let err = state.set_state("Fly").unwrap_err();

        assert!(matches!(err, AnimationError::LookupFailure { .. }));
        assert_eq!(state.current_name(), "Walk");
        assert_relative_eq!(state.frame(), position);
    }

    #[test]
    fn test_set_state_keep_frame() {
        let mut state = AnimationState::new(walk_set(), "Walk").unwrap();
        state.update(0.1).update(0.1);
        state.set_state_keep_frame("Sparse").unwrap();
        assert_eq!(state.current_name(), "Sparse");
        assert_eq!(state.current_frame().number, 1);
        assert_relative_eq!(state.frame(), 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_single_image_state() {
        let image = Sprite::solid_rect(3, 10, Color::BLACK, None);
        let state = AnimationState::single(image.clone());
        assert_eq!(state.current_name(), IDLE);
        assert_eq!(*state.sprite(), image);
        assert_eq!((state.width(), state.height()), (3, 10));
    }
}
