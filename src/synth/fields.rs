//! Question ids read by the synthesizer.

pub const OBJECTIVE: &str = "objective";
pub const AUDIENCE: &str = "audience";
pub const TONE: &str = "tone";
pub const FORMAT: &str = "format";
pub const LENGTH: &str = "length";
pub const CONTEXT: &str = "context";
pub const EXAMPLES: &str = "examples";
pub const CONSTRAINTS: &str = "constraints";

/// Fields every document renders. The rest are optional.
pub const REQUIRED: &[&str] = &[OBJECTIVE, AUDIENCE, TONE, FORMAT, LENGTH];
