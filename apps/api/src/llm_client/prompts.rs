// Shared prompt fragments used by every caller of the model.
// Feature-specific prompts live beside the feature (see recommendation::prompts).

/// Instruction appended to system messages whose reply is schema-constrained.
pub const STRUCTURED_OUTPUT_INSTRUCTION: &str = "\
    Respond with a single JSON object that matches the requested schema exactly. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT add fields that are not in the schema.";
