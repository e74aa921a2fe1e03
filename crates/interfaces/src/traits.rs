/// Line-oriented console used by the interactive editor.
pub trait Interface {
    /// Read one line, trimmed. `None` once input is exhausted.
    fn receive_input(&self) -> Option<String>;

    /// Print a full line.
    fn send_output(&self, message: &str);

    /// Print a prompt without a trailing newline.
    fn send_prompt(&self, prompt: &str);

    fn prompt(&self, prompt: &str) -> Option<String> {
        self.send_prompt(prompt);
        self.receive_input()
    }

    /// Ask a yes/no question; `y` and `yes` approve, anything else declines.
    fn request_approval(&self, question: &str) -> bool {
        match self.prompt(&format!("{} (y/n): ", question)) {
            Some(answer) => matches!(normalize_answer(&answer).as_str(), "y" | "yes"),
            None => false,
        }
    }

    fn show_status(&self, status: &str) {
        self.send_output(&format!("ℹ️  {}", status));
    }
}

/// Trim and lowercase a confirmation answer.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct Scripted {
        input: RefCell<VecDeque<String>>,
        output: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(lines: &[&str]) -> Self {
            Self {
                input: RefCell::new(lines.iter().map(|l| l.to_string()).collect()),
                output: RefCell::new(Vec::new()),
            }
        }
    }

    impl Interface for Scripted {
        fn receive_input(&self) -> Option<String> {
            self.input.borrow_mut().pop_front()
        }

        fn send_output(&self, message: &str) {
            self.output.borrow_mut().push(message.to_string());
        }

        fn send_prompt(&self, prompt: &str) {
            self.output.borrow_mut().push(prompt.to_string());
        }
    }

    #[test]
    fn test_request_approval_answers() {
        let ui = Scripted::new(&["Y", " yes ", "n", "sure"]);
        assert!(ui.request_approval("Create?"));
        assert!(ui.request_approval("Create?"));
        assert!(!ui.request_approval("Create?"));
        assert!(!ui.request_approval("Create?"));
        assert!(!ui.request_approval("Create?"));
        assert_eq!(ui.output.borrow()[0], "Create? (y/n): ");
    }

    #[test]
    fn test_show_status_prefix() {
        let ui = Scripted::new(&[]);
        ui.show_status("ready");
        assert_eq!(ui.output.borrow()[0], "ℹ️  ready");
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("  N \n"), "n");
        assert_eq!(normalize_answer("Yes"), "yes");
    }
}
