// SPDX-License-Identifier: MIT OR Apache-2.0
//! Storyboard definitions: the ordered list of steps a deck plays through.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a storyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryboardId(pub Uuid);

impl StoryboardId {
    /// Create a new random storyboard ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryboardId {
    fn default() -> Self {
        Self::new()
    }
}

/// Storyboard configuration errors.
///
/// All of these are fatal at startup: a deck with invalid step data must
/// refuse to run rather than play with it.
#[derive(Debug, Error)]
pub enum StoryboardError {
    /// The storyboard has no steps
    #[error("storyboard has no steps")]
    Empty,

    /// A step declares a zero frame count
    #[error("step {index} ({name:?}) declares a zero frame count")]
    ZeroFrameStep {
        /// Index of the offending step
        index: usize,
        /// Display name of the offending step
        name: String,
    },

    /// Deck file could not be parsed
    #[error("failed to parse storyboard: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Storyboard could not be serialized
    #[error("failed to serialize storyboard: {0}")]
    Serialize(#[from] ron::Error),

    /// Deck file could not be read
    #[error("failed to read storyboard file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storyboard operations
pub type Result<T> = std::result::Result<T, StoryboardError>;

/// One unit of a storyboard: a display name and a fixed animation length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Display label, opaque to the sequencing core
    pub name: String,
    /// Number of ticks required to play the step's reveal to completion
    pub total_frames: u32,
}

impl StepDescriptor {
    /// Create a new step descriptor
    pub fn new(name: impl Into<String>, total_frames: u32) -> Self {
        Self {
            name: name.into(),
            total_frames,
        }
    }
}

/// An ordered sequence of steps, fixed at construction time.
///
/// Validated once, before any navigation is accepted: every step must
/// declare at least one frame and the storyboard must not be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storyboard {
    /// Unique storyboard ID
    #[serde(default)]
    pub id: StoryboardId,
    /// Deck title
    pub title: String,
    /// Steps in playback order
    steps: Vec<StepDescriptor>,
}

impl Storyboard {
    /// Create a validated storyboard
    pub fn new(title: impl Into<String>, steps: Vec<StepDescriptor>) -> Result<Self> {
        let board = Self {
            id: StoryboardId::new(),
            title: title.into(),
            steps,
        };
        board.validate()?;
        Ok(board)
    }

    /// Parse a storyboard from RON and validate it
    pub fn from_ron(source: &str) -> Result<Self> {
        let board: Self = ron::from_str(source)?;
        board.validate()?;
        Ok(board)
    }

    /// Serialize to RON
    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Load and validate a storyboard from a deck file
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(StoryboardError::Empty);
        }
        for (index, step) in self.steps.iter().enumerate() {
            if step.total_frames < 1 {
                return Err(StoryboardError::ZeroFrameStep {
                    index,
                    name: step.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Get a step by index
    pub fn step(&self, index: usize) -> Option<&StepDescriptor> {
        self.steps.get(index)
    }

    /// Iterate over all steps in playback order
    pub fn steps(&self) -> impl Iterator<Item = &StepDescriptor> {
        self.steps.iter()
    }

    /// Number of steps (the landing view is not a step)
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the last step
    pub fn last_step(&self) -> usize {
        self.steps.len() - 1
    }
}
