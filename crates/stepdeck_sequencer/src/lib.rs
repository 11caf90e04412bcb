// SPDX-License-Identifier: MIT OR Apache-2.0
//! Step/frame sequencing engine for `StepDeck` presentations.
//!
//! This crate provides the storyboard state machine shared by the
//! presentation tools:
//! - Storyboard definitions with per-step frame counts
//! - Step navigation with an in-flight animation gate
//! - Tick-by-tick frame scheduling with normalized progress
//! - The render surface contract
//! - Easing helpers for mapping progress onto reveal elements
//!
//! ## Architecture
//!
//! The engine is built on a strict ownership split:
//! - [`StepSequencer`] owns navigation state (current position, animating
//!   flag) and gatekeeps all transitions
//! - [`FrameScheduler`] owns the ephemeral state of one animation run
//! - [`RenderSurface`] is a stateless capability of the host, a pure
//!   function of `(step, progress)`
//!
//! Scheduling is cooperative: the host owns the timer and polls
//! [`StepSequencer::tick`] at a fixed interval. Nothing here blocks.

pub mod easing;
pub mod scheduler;
pub mod sequencer;
pub mod storyboard;
pub mod surface;

#[cfg(test)]
mod test_support;

pub use easing::Easing;
pub use scheduler::{FrameScheduler, TickOutcome};
pub use sequencer::{NavOutcome, Position, StepSequencer};
pub use storyboard::{StepDescriptor, Storyboard, StoryboardError, StoryboardId};
pub use surface::{Progress, RenderError, RenderSurface};
