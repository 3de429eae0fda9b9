pub const MCQ_REQUEST_DIRECTIVE: &str = "make 5 mcqs just from the following text:\n";

pub const GENERATION_DIRECTIVE: &str =
    "Generate multiple choice questions based on the following content:\n";

pub const GENERATION_SUFFIX: &str =
    "\nInclude four options per question and highlight the correct answer with 'Answer:'.";

/// Prompt the relay consumer posts to `/generate`. The text is passed through untouched.
pub fn build_mcq_prompt(text: &str) -> String {
    format!("{MCQ_REQUEST_DIRECTIVE}{text}")
}

/// Instruction handed to the model for a relayed prompt.
pub fn generation_instruction(prompt: &str) -> String {
    format!("{GENERATION_DIRECTIVE}{prompt}{GENERATION_SUFFIX}")
}
