//! Input classification
//!
//! Turns a raw line from the terminal into an exit request, a re-prompt,
//! or a task instruction, and builds the task text handed to the runner.

/// Result of classifying one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Terminate the REPL
    Exit,
    /// Nothing usable was entered, prompt again
    Empty,
    /// A task instruction, trimmed but otherwise as typed
    Instruction(String),
}

/// Classify a raw input line.
///
/// The exit keywords are matched case-insensitively after trimming;
/// instruction text keeps its original case, since credentials and URLs
/// are case-sensitive.
pub fn classify(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" => Input::Exit,
        _ => Input::Instruction(trimmed.to_string()),
    }
}

/// Reasoning guidance appended to every instruction
pub const TASK_GUIDANCE: &str = "Use reasoning to inspect the DOM and find login form fields \
     dynamically (look for inputs with type text or password, labels like 'username' or \
     'password', and placeholders). Do not hardcode element ids or names. Fill the \
     credentials and submit, then verify success by checking for a redirect or a success \
     message.";

/// Build the full task text for an instruction
pub fn enhance_instruction(instruction: &str) -> String {
    format!("{}. {}", instruction, TASK_GUIDANCE)
}
