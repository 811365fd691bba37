//! Frame-chain animation
//!
//! Animations are validated up front and shared between renderables through
//! `Arc<AnimationSet>`; each renderable keeps its own [`AnimationState`].

pub mod clip;
pub mod state;

pub use clip::{Animation, AnimationError, AnimationSet, Frame, IDLE};
pub use state::AnimationState;
