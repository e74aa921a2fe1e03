use crate::traits::Interface;
use std::io::{self, BufRead, Write};

pub struct TerminalInterface;

impl TerminalInterface {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl Interface for TerminalInterface {
    fn receive_input(&self) -> Option<String> {
        let mut line = String::new();

        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None, // EOF
            Ok(_) => Some(line.trim().to_string()),
            Err(_) => None,
        }
    }

    fn send_output(&self, message: &str) {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(message.as_bytes());
        let _ = stdout.write_all(b"\n");
        let _ = stdout.flush();
    }

    fn send_prompt(&self, prompt: &str) {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(prompt.as_bytes());
        let _ = stdout.flush();
    }
}
