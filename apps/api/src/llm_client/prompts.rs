// Completion prompt constants.
// The system instruction is fixed for every turn; only the user text varies.

pub const MENTOR_SYSTEM_PROMPT: &str = "You are a helpful career mentor AI.";
