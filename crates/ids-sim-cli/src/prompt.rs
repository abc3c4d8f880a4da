//! Interactive prompts. Only reached when running with `--interactive`.

use std::path::PathBuf;

use dialoguer::{Confirm, Input};

use crate::error::CliResult;

/// Ask for a file path.
pub fn file_path(prompt: &str) -> CliResult<PathBuf> {
    let answer: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(PathBuf::from(answer.trim()))
}

/// Ask for a positive day count.
pub fn day_count(prompt: &str, default: usize) -> CliResult<usize> {
    let days: usize = Input::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(|n: &usize| if *n > 0 { Ok(()) } else { Err("must be at least 1") })
        .interact_text()?;
    Ok(days)
}

/// Yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> CliResult<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Block until the user presses enter.
pub fn pause() -> CliResult<()> {
    let _: String = Input::new()
        .with_prompt("Press enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
