use std::path::PathBuf;

use crate::classify::{FailureSignature, NOTIFY_FAILURE, UPDATE_FAILURE};

pub const DEFAULT_LOG_PATH: &str = "/QOpenSys/containers/qmgtools/main.log";
pub const DEFAULT_INTERPRETER: &str = "qsh";

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One CL command the job issues, with the log text for each outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub cl_command: &'static str,
    pub failure: FailureSignature,
    pub success_message: &'static str,
    pub failure_message: &'static str,
}

pub const UPDATE_STEP: Step = Step {
    name: "update",
    cl_command: "QMGTOOLS/CMPVER NOPROMPT(Y)",
    failure: UPDATE_FAILURE,
    success_message: "Update of QMGTOOLS ended successfully.",
    failure_message: "Update of QMGTOOLS ended abnormally!",
};

pub const NOTIFY_STEP: Step = Step {
    name: "notify",
    cl_command: "SNDMSG MSG('QMGTOOLS has been updated') TOMSGQ(*SYSOPR)",
    failure: NOTIFY_FAILURE,
    success_message: "Message sent successfully.",
    failure_message: "Message ended abnormally!",
};

// ---------------------------------------------------------------------------
// UpdateConfig
// ---------------------------------------------------------------------------

/// Fixed settings for a run. There is no external source for these; the
/// binary always uses [`UpdateConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfig {
    pub interpreter: String,
    pub log_path: PathBuf,
    pub update: Step,
    pub notify: Step,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            update: UPDATE_STEP,
            notify: NOTIFY_STEP,
        }
    }
}
