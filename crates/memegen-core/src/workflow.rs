use std::fmt;

use crate::error::{MemeError, Result};

/// Which step of load → generate → read/reset is currently valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    NoImage,
    ImageLoaded,
    MemeGenerated,
}

/// User actions that move the workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowEvent {
    Load,
    Generate,
    Reset,
    Read,
}

/// Enabled flags for the three action buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonGates {
    pub submit: bool,
    pub reset: bool,
    pub read: bool,
}

impl WorkflowState {
    /// Apply `event`, returning the next state or an error if the event is
    /// not valid from the current state.
    pub fn apply(self, event: WorkflowEvent) -> Result<WorkflowState> {
        let next = match (self, event) {
            (_, WorkflowEvent::Load) => WorkflowState::ImageLoaded,
            (WorkflowState::ImageLoaded, WorkflowEvent::Generate) => WorkflowState::MemeGenerated,
            (WorkflowState::MemeGenerated, WorkflowEvent::Reset) => WorkflowState::ImageLoaded,
            (WorkflowState::MemeGenerated, WorkflowEvent::Read) => WorkflowState::MemeGenerated,
            (state, event) => return Err(MemeError::InvalidTransition { event, state }),
        };
        Ok(next)
    }

    pub fn allows(self, event: WorkflowEvent) -> bool {
        self.apply(event).is_ok()
    }

    pub fn gates(self) -> ButtonGates {
        ButtonGates {
            submit: self.allows(WorkflowEvent::Generate),
            reset: self.allows(WorkflowEvent::Reset),
            read: self.allows(WorkflowEvent::Read),
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImage => write!(f, "no image is loaded"),
            Self::ImageLoaded => write!(f, "an image is loaded"),
            Self::MemeGenerated => write!(f, "a meme is generated"),
        }
    }
}

impl fmt::Display for WorkflowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load an image"),
            Self::Generate => write!(f, "generate"),
            Self::Reset => write!(f, "reset"),
            Self::Read => write!(f, "read text"),
        }
    }
}
