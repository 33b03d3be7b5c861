//! Line-oriented input for the menu. Every reader returns `Ok(None)` when the
//! input ends, which the menu treats like choosing quit.

use colored::Colorize;
use std::io::{BufRead, Write};
use towerkit::error::Result;
use towerkit::model::Priority;

pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    read_line(input)
}

/// Ask for a non-empty line of text, clipped to `max_len` characters.
pub fn ask_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    max_len: usize,
) -> Result<Option<String>> {
    loop {
        let Some(line) = ask(input, output, prompt)? else {
            return Ok(None);
        };
        let text = line.trim();
        if text.is_empty() {
            writeln!(output, "{}", "Value cannot be empty. Try again.".yellow())?;
            continue;
        }
        return Ok(Some(clip(text, max_len)));
    }
}

/// Ask for a priority until a valid one arrives.
pub fn ask_priority<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Priority>> {
    let prompt = format!(
        "Priority ({}..{}) ({} = highest): ",
        Priority::HIGHEST,
        Priority::LOWEST,
        Priority::HIGHEST
    );
    loop {
        let Some(line) = ask(input, output, &prompt)? else {
            return Ok(None);
        };
        match line.parse::<Priority>() {
            Ok(priority) => return Ok(Some(priority)),
            Err(e) => writeln!(output, "{} Try again.", e.to_string().yellow())?,
        }
    }
}

pub fn clip(s: &str, max_len: usize) -> String {
    s.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_line_endings_and_detects_eof() {
        let mut input = Cursor::new("one\r\ntwo");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("one"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("two"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn ask_text_reprompts_on_blank_and_clips() {
        colored::control::set_override(false);
        let mut input = Cursor::new("   \nAntena de longo alcance\n");
        let mut output = Vec::new();
        let text = ask_text(&mut input, &mut output, "Name: ", 6).unwrap();
        assert_eq!(text.as_deref(), Some("Antena"));

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Name: ").count(), 2);
        assert!(printed.contains("cannot be empty"));
    }

    #[test]
    fn ask_priority_reprompts_until_valid() {
        colored::control::set_override(false);
        let mut input = Cursor::new("high\n0\n11\n4\n");
        let mut output = Vec::new();
        let priority = ask_priority(&mut input, &mut output).unwrap();
        assert_eq!(priority.map(|p| p.get()), Some(4));

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Try again.").count(), 3);
    }

    #[test]
    fn ask_priority_gives_up_on_eof() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();
        assert_eq!(ask_priority(&mut input, &mut output).unwrap(), None);
    }

    #[test]
    fn clip_counts_characters_not_bytes() {
        assert_eq!(clip("propulsão", 8), "propulsã");
        assert_eq!(clip("ab", 10), "ab");
    }
}
