//! Validated interactive prompts.
//!
//! All interaction goes through the [`Console`] trait so the collection logic
//! can run against a terminal in the binary and against canned input in
//! tests. Each primitive repeats "read, parse, complain" until a valid value
//! arrives; the retry count is bounded only by the console running out of
//! input.

use crate::Result;

/// Presentation style for a line of output
///
/// The console decides how (or whether) a style is rendered; core logic only
/// states intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Plain,
    Heading,
    Menu,
    Info,
    Success,
    Error,
}

/// A line-oriented console: one output channel, one blocking input channel
pub trait Console {
    /// Display a line of text with the given style
    fn say(&mut self, style: Style, text: &str);

    /// Display `prompt` (no trailing newline) and block for one line of input
    ///
    /// Returns the line without its trailing newline. A console whose input
    /// source is exhausted returns [`crate::Error::InputClosed`].
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Read until `parse` accepts the input: the validate-or-repeat combinator
///
/// `parse` returns `None` to reject a line, which emits `invalid_msg` and
/// re-prompts. There is no retry cap; a live terminal can retry forever.
pub fn read_until_valid<T, C, F>(
    console: &mut C,
    prompt: &str,
    invalid_msg: &str,
    parse: F,
) -> Result<T>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let line = console.read_line(prompt)?;
        match parse(line.trim()) {
            Some(value) => return Ok(value),
            None => console.say(Style::Error, invalid_msg),
        }
    }
}

/// Prompt for a floating point number greater than zero
pub fn positive_f64<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<f64> {
    read_until_valid(
        console,
        prompt,
        "Invalid input. Please enter a positive number.",
        |text| text.parse::<f64>().ok().filter(|v| *v > 0.0),
    )
}

/// Prompt for an integer greater than zero
pub fn positive_u32<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<u32> {
    read_until_valid(
        console,
        prompt,
        "Invalid input. Please enter a positive whole number.",
        |text| text.parse::<u32>().ok().filter(|v| *v > 0),
    )
}

/// Ask a yes/no question; accepts yes/y/no/n in any case
pub fn yes_no<C: Console + ?Sized>(console: &mut C, question: &str) -> Result<bool> {
    let prompt = format!("{} (yes/y or no/n): ", question);
    read_until_valid(
        console,
        &prompt,
        "Invalid input. Please enter 'yes', 'y', 'no', or 'n'.",
        |text| match text.to_lowercase().as_str() {
            "yes" | "y" => Some(true),
            "no" | "n" => Some(false),
            _ => None,
        },
    )
}

/// Parse a 1-based menu choice out of `text`
///
/// Accepts only a plain digit string within `[1, item_count]`. This helper
/// does not retry: the two call sites apply different invalid-choice policies
/// (skip vs. abort) and handle rejection themselves.
pub fn parse_menu_choice(text: &str, item_count: usize) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let index = text.parse::<usize>().ok()?;
    (1..=item_count).contains(&index).then_some(index)
}
