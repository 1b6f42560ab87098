// Prompt fragments shared by every module that calls the LLM.
// Module-specific prompts live in a prompts.rs next to the caller.

/// Appended to every evaluation prompt so scores stay tied to the transcript.
pub const EVIDENCE_INSTRUCTION: &str = "\
    CRITICAL: Every score must be justified by a short quote or paraphrase from the \
    candidate's answers. Do NOT reward content the candidate did not say. \
    If a dimension was not exercised, score it low and say so in the evidence.";
