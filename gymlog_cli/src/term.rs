//! ANSI terminal console.
//!
//! The presentation side of [`Console`]: styled lines on stdout, blocking
//! line reads from stdin. Core logic never touches escape codes.

use std::io::{self, BufRead, Write};

use gymlog_core::{Console, Error, Result, Style};

const RESET: &str = "\x1b[0m";

fn color(style: Style) -> Option<&'static str> {
    match style {
        Style::Plain => None,
        Style::Heading => Some("\x1b[95m"),
        Style::Menu => Some("\x1b[93m"),
        Style::Info => Some("\x1b[96m"),
        Style::Success => Some("\x1b[92m"),
        Style::Error => Some("\x1b[91m"),
    }
}

/// Console over stdin/stdout with the classic ANSI palette
#[derive(Default)]
pub struct AnsiConsole;

impl AnsiConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for AnsiConsole {
    fn say(&mut self, style: Style, text: &str) {
        match color(style) {
            Some(code) => println!("{}{}{}", code, text, RESET),
            None => println!("{}", text),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            // Stdin hit EOF; a retry loop would spin forever on it.
            return Err(Error::InputClosed);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
