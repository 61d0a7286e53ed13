// crates/zk-image-cli/src/prompt.rs - Interactive and piped input
//
// Commands that need a value the user did not pass as an argument ask for it:
// on a terminal through a dialoguer prompt, otherwise by reading stdin. Both
// paths share the same validation so piped input behaves like typed input.

use anyhow::{Result, anyhow};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Read};

const DESCRIPTION_PROMPT: &str = "Description of the image";

/// Use the provided argument, or read a single value from piped stdin
///
/// ```bash
/// zk-image delete k3v9x0c2m1qz7a4b
/// echo k3v9x0c2m1qz7a4b | zk-image delete
/// ```
pub fn read_input_or_stdin(arg: Option<&str>, missing: &str) -> Result<String> {
    if let Some(value) = arg.filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }

    if io::stdin().is_terminal() {
        return Err(anyhow!("{}", missing));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let input = buffer.trim();
    if input.is_empty() {
        return Err(anyhow!("{}", missing));
    }

    Ok(input.to_string())
}

/// Return the given description, or ask until a non-empty one is entered
pub fn resolve_description(given: Option<String>) -> Result<String> {
    if let Some(description) = given.filter(|d| !d.trim().is_empty()) {
        return Ok(description);
    }

    if io::stdin().is_terminal() {
        prompt_until_non_empty(|| {
            let answer: String = Input::new()
                .with_prompt(DESCRIPTION_PROMPT)
                .allow_empty(true)
                .interact_text()?;
            Ok(Some(answer))
        })
    } else {
        let mut lines = io::stdin().lock().lines();
        prompt_until_non_empty(|| Ok(lines.next().transpose()?))
    }
}

/// Keep asking until `ask` yields something other than blank text
///
/// `ask` returns `None` once input is exhausted, which ends the loop with an
/// error instead of spinning forever.
pub fn prompt_until_non_empty<F>(mut ask: F) -> Result<String>
where
    F: FnMut() -> Result<Option<String>>,
{
    loop {
        match ask()? {
            Some(answer) if !answer.trim().is_empty() => return Ok(answer.trim().to_string()),
            Some(_) => continue,
            None => return Err(anyhow!("No description provided")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[&str]) -> impl FnMut() -> Result<Option<String>> {
        let mut queue: Vec<String> = values.iter().rev().map(|s| s.to_string()).collect();
        move || Ok(queue.pop())
    }

    #[test]
    fn test_first_non_empty_answer_wins() {
        let result = prompt_until_non_empty(answers(&["", "   ", "a cat photo", "ignored"]));
        assert_eq!(result.unwrap(), "a cat photo");
    }

    #[test]
    fn test_counts_prompts() {
        let mut asked = 0;
        let result = prompt_until_non_empty(|| {
            asked += 1;
            Ok(Some(if asked < 3 { String::new() } else { "x".to_string() }))
        });
        assert_eq!(result.unwrap(), "x");
        assert_eq!(asked, 3);
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        assert!(prompt_until_non_empty(answers(&["", ""])).is_err());
    }

    #[test]
    fn test_given_description_skips_prompt() {
        let description = resolve_description(Some("sunset".to_string())).unwrap();
        assert_eq!(description, "sunset");
    }

    #[test]
    fn test_given_argument_skips_stdin() {
        let id = read_input_or_stdin(Some("abc"), "missing").unwrap();
        assert_eq!(id, "abc");
    }
}
