// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Instruction enforcing the bundle rendering invariant on model output.
pub const SHAPE_INSTRUCTION: &str = "\
    CRITICAL: every array in your output must contain at least one element, \
    and every text field must be non-empty. A response with an empty array \
    or blank field is invalid and will be rejected.";
