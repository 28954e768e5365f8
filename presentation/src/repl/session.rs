//! REPL (Read-Eval-Print Loop) for checking face pairs interactively.
//!
//! Each round reads two triples and prints the full evaluation.
//! Recomputation is cheap, so there is nothing to cache between rounds.

use crate::output::console::ConsoleFormatter;
use brick_application::{EvaluatePairInput, EvaluatePairUseCase, EvaluationParams};
use brick_domain::Strictness;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive face-pair checker
pub struct BrickRepl {
    use_case: EvaluatePairUseCase,
    strictness: Strictness,
    show_banner: bool,
    history_file: Option<PathBuf>,
}

impl BrickRepl {
    /// Create a new BrickRepl
    pub fn new() -> Self {
        Self {
            use_case: EvaluatePairUseCase::new(),
            strictness: Strictness::Lenient,
            show_banner: true,
            history_file: None,
        }
    }

    /// Set the initial strictness
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("euler-brick").join("history.txt"))
        });

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            self.print_welcome();
        }

        loop {
            let first = match self.read_triple(&mut rl, "first  › ") {
                LineOutcome::Line(line) => line,
                LineOutcome::Cancelled => continue,
                LineOutcome::Quit => break,
            };
            let second = match self.read_triple(&mut rl, "second › ") {
                LineOutcome::Line(line) => line,
                LineOutcome::Cancelled => {
                    println!("(pair cancelled)");
                    continue;
                }
                LineOutcome::Quit => break,
            };

            self.process_pair(&first, &second);
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Read one triple, looping past empty lines and slash commands.
    fn read_triple(&mut self, rl: &mut DefaultEditor, prompt: &str) -> LineOutcome {
        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            return LineOutcome::Quit;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    return LineOutcome::Line(line.to_string());
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    return LineOutcome::Cancelled;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    return LineOutcome::Quit;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return LineOutcome::Quit;
                }
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        euler-brick - Interactive Mode       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Enter two Pythagorean triples, one per prompt.");
        println!("Formats: 3,4,5  (3,4,5)  [3,4,5]  3 4 5");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /strict   - Also require the third face diagonal to be integral");
        println!("  /lenient  - Check only the two supplied faces (default)");
        println!("  /quit     - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /strict          - Require an integral third face diagonal");
                println!("  /lenient         - Check only the two supplied faces");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            "/strict" => {
                self.strictness = Strictness::Strict;
                println!("Strict mode: the third face diagonal must be an integer.");
                false
            }
            "/lenient" => {
                self.strictness = Strictness::Lenient;
                println!("Lenient mode: only the two supplied faces are checked.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    fn process_pair(&self, first: &str, second: &str) {
        println!();

        let input = EvaluatePairInput::new(first, second)
            .with_params(EvaluationParams::default().with_strictness(self.strictness));

        match self.use_case.execute(input) {
            Ok(evaluation) => {
                println!("{}", ConsoleFormatter::format(&evaluation));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}

impl Default for BrickRepl {
    fn default() -> Self {
        Self::new()
    }
}

enum LineOutcome {
    Line(String),
    Cancelled,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_commands_toggle_strictness() {
        let mut repl = BrickRepl::new();
        assert_eq!(repl.strictness, Strictness::Lenient);

        assert!(!repl.handle_command("/strict"));
        assert_eq!(repl.strictness, Strictness::Strict);

        assert!(!repl.handle_command("/lenient"));
        assert_eq!(repl.strictness, Strictness::Lenient);
    }

    #[test]
    fn test_quit_commands_exit() {
        let mut repl = BrickRepl::new();
        assert!(repl.handle_command("/quit"));
        assert!(repl.handle_command("/q"));
        assert!(!repl.handle_command("/help"));
        assert!(!repl.handle_command("/unknown"));
    }

    #[test]
    fn test_builder_configuration() {
        let repl = BrickRepl::new()
            .with_strictness(Strictness::Strict)
            .with_banner(false);
        assert_eq!(repl.strictness, Strictness::Strict);
        assert!(!repl.show_banner);
    }
}
