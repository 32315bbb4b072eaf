use thiserror::Error;

use crate::workflow::{WorkflowEvent, WorkflowState};

#[derive(Error, Debug)]
pub enum MemeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        event: WorkflowEvent,
        state: WorkflowState,
    },

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MemeError>;
