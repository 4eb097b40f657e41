//! Interaction boundary: the workflows ask questions through this trait
//! and block until an answer arrives. Tests script the answers; the CLI
//! uses the stdin-backed implementation.

use std::io::{self, BufRead, Write};

pub trait Interaction {
    /// Yes/no question. Anything but an explicit yes is `false`.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Pick one label out of `options`. An unreadable or out-of-range
    /// answer maps to the first option, which by convention is the
    /// cancellation sentinel.
    fn select_one(&mut self, prompt: &str, options: &[String]) -> String;

    /// Free-form text input, returned trimmed but otherwise untouched.
    fn prompt_text(&mut self, prompt: &str) -> String;
}

/// Interactive prompts on stdin/stdout.
#[derive(Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    fn read_line(&self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_string()
    }
}

impl Interaction for StdinPrompter {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        io::stdout().flush().ok();
        matches!(self.read_line().to_lowercase().as_str(), "y" | "yes")
    }

    fn select_one(&mut self, prompt: &str, options: &[String]) -> String {
        println!("{}", prompt);
        for (i, opt) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, opt);
        }
        print!("> ");
        io::stdout().flush().ok();

        let answer = self.read_line();
        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .or_else(|| options.iter().find(|o| **o == answer));

        match picked {
            Some(label) => label.clone(),
            None => options.first().cloned().unwrap_or_default(),
        }
    }

    fn prompt_text(&mut self, prompt: &str) -> String {
        print!("{} ", prompt);
        io::stdout().flush().ok();
        self.read_line()
    }
}
