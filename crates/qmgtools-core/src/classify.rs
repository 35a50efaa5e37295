use crate::command::CommandOutput;

// ---------------------------------------------------------------------------
// FailureSignature
// ---------------------------------------------------------------------------

/// Literal message IDs whose presence in command output marks the command
/// as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureSignature {
    pub name: &'static str,
    pub indicators: &'static [&'static str],
}

/// CPF0000: CL command ended abnormally.
pub const UPDATE_FAILURE: FailureSignature = FailureSignature {
    name: "update",
    indicators: &["CPF0000"],
};

/// CPF2469: error occurred when sending message.
pub const NOTIFY_FAILURE: FailureSignature = FailureSignature {
    name: "notify",
    indicators: &["CPF2469"],
};

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    FailureDetected { indicator: &'static str },
}

/// Plain substring match of every indicator against stdout, then stderr.
/// The first indicator found wins.
pub fn classify(output: &CommandOutput, signature: &FailureSignature) -> Verdict {
    signature
        .indicators
        .iter()
        .copied()
        .find(|indicator| output.stdout.contains(indicator) || output.stderr.contains(indicator))
        .map_or(Verdict::Clean, |indicator| Verdict::FailureDetected { indicator })
}
