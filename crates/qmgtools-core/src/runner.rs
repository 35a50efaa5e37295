//! The update job: run `CMPVER`, and on a clean result tell `*SYSOPR`.
//!
//! Each step's body returns an explicit `Result<Verdict>`. The runner turns
//! that into exactly one operator log record and a [`StepOutcome`]; nothing
//! escapes a step, so a run always completes.

use crate::classify::{classify, Verdict};
use crate::command::{CommandRunner, Invocation};
use crate::config::{Step, UpdateConfig};
use crate::error::Result;
use crate::log::{Level, LogRecord, LogSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    FailureDetected { indicator: &'static str },
    /// The command could not be executed; holds the error text.
    Errored(String),
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub update: StepOutcome,
    /// `None` when the update step did not succeed.
    pub notify: Option<StepOutcome>,
}

pub struct UpdateRunner<'a, R, L> {
    config: &'a UpdateConfig,
    commands: &'a R,
    log: &'a mut L,
}

impl<'a, R: CommandRunner, L: LogSink> UpdateRunner<'a, R, L> {
    pub fn new(config: &'a UpdateConfig, commands: &'a R, log: &'a mut L) -> Self {
        Self {
            config,
            commands,
            log,
        }
    }

    /// Run the update and, only if it ended cleanly, send the completion notice.
    pub fn run_update(&mut self) -> RunSummary {
        let step = self.config.update;
        let result = self.execute(&step);
        let update = self.settle(&step, result);

        let notify = update
            .is_success()
            .then(|| self.send_completion_notice());

        RunSummary { update, notify }
    }

    /// Send the "QMGTOOLS has been updated" message to the operator queue.
    pub fn send_completion_notice(&mut self) -> StepOutcome {
        let step = self.config.notify;
        let result = self.execute(&step);
        self.settle(&step, result)
    }

    fn execute(&self, step: &Step) -> Result<Verdict> {
        let invocation = Invocation::cl_command(&self.config.interpreter, step.cl_command);
        tracing::info!(step = step.name, command = step.cl_command, "running step");
        let output = self.commands.run(&invocation)?;
        Ok(classify(&output, &step.failure))
    }

    fn settle(&mut self, step: &Step, result: Result<Verdict>) -> StepOutcome {
        match result {
            Ok(Verdict::Clean) => {
                self.record(Level::Info, step.success_message);
                StepOutcome::Succeeded
            }
            Ok(Verdict::FailureDetected { indicator }) => {
                tracing::debug!(
                    step = step.name,
                    signature = step.failure.name,
                    indicator,
                    "failure signature matched"
                );
                self.record(Level::Error, step.failure_message);
                StepOutcome::FailureDetected { indicator }
            }
            Err(e) => {
                let text = format!("{:#}", anyhow::Error::from(e));
                self.record(Level::Error, &format!("Error: {text}"));
                StepOutcome::Errored(text)
            }
        }
    }

    fn record(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }
        if let Err(e) = self.log.write(&LogRecord::now(level, message)) {
            tracing::warn!(error = %e, "failed to write operator log record");
        }
    }
}
