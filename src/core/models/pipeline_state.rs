use std::fmt;

use crate::core::models::ImageLocator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Capturing,
    Uploading,
    Succeeded,
    Notified,
    Failed,
}

impl PipelineState {
    pub fn can_transition_to(self, next: PipelineState) -> bool {
        use PipelineState::*;

        matches!(
            (self, next),
            (Idle, Capturing)
                | (Capturing, Uploading)
                | (Capturing, Idle)
                | (Uploading, Succeeded)
                | (Uploading, Failed)
                | (Succeeded, Notified)
                | (Notified, Idle)
                | (Failed, Idle)
        )
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "Idle"),
            PipelineState::Capturing => write!(f, "Capturing"),
            PipelineState::Uploading => write!(f, "Uploading"),
            PipelineState::Succeeded => write!(f, "Succeeded"),
            PipelineState::Notified => write!(f, "Notified"),
            PipelineState::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Cancelled,
    Failed,
    Notified(ImageLocator),
}

/// Result of one capture -> upload -> notify invocation.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub outcome: PipelineOutcome,
    pub visited_states: Vec<PipelineState>,
}

impl PipelineRun {
    pub fn locator(&self) -> Option<&ImageLocator> {
        match &self.outcome {
            PipelineOutcome::Notified(locator) => Some(locator),
            _ => None,
        }
    }
}
