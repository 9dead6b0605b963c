//! The main REPL implementation.

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, is_complete};
use crate::session::Session;
use plotstack_foundation::{Error, Result, Stack, Value};
use plotstack_language::Step;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Stack and variables carried between lines.
    session: Session,

    /// Output and feature settings.
    config: RuntimeConfig,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,

    /// Whether output carries ANSI styling. Set while the REPL loop runs.
    styled: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL over the standard vocabulary with the given editor.
    pub fn with_editor(editor: E, config: RuntimeConfig) -> Self {
        let session = Session::standard(&config);
        Self {
            editor,
            session,
            config,
            prompt: "ps> ".to_string(),
            continuation_prompt: ".. ".to_string(),
            styled: false,
        }
        .with_completions()
    }

    /// Replaces the session, e.g. to use a custom vocabulary.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.with_completions()
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enables or disables ANSI styling of printed stacks.
    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn with_completions(mut self) -> Self {
        let words = self.session.interpreter().word_names().to_vec();
        self.editor.set_words(words);
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        self.styled = true;
        if self.config.banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    if e.is_user_error() {
                        self.print_error(&e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(trimmed) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Reads a potentially multi-line input.
    ///
    /// Continuation lines are joined with commas, so a line break separates
    /// tokens the same way a comma does.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let read = if first_line {
                self.editor.read_line(&self.prompt)?
            } else {
                self.editor.read_continuation(&self.continuation_prompt)?
            };

            match read {
                ReadResult::Line(line) => {
                    if first_line {
                        input = line;
                    } else {
                        input.push(',');
                        input.push_str(&line);
                    }

                    if input.trim_start().starts_with('.') || is_complete(&input) {
                        return Ok(Some(input));
                    }

                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::invalid_syntax("unexpected end of input in multi-line program"));
                }
            }
        }
    }

    /// Evaluates one line: a REPL command or a program.
    ///
    /// Returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error if the program fails; the session is left unchanged.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        let input = input.trim();
        let (command, argument) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(c, a)| (c, a.trim()));

        match command {
            ".stack" => Ok(self.format_stack(self.session.stack())),
            ".vars" => Ok(self.format_variables()),
            ".words" => Ok(self.format_words()),
            ".help" => Ok(HELP.trim_end().to_string()),
            ".clear" => {
                self.session.clear();
                Ok(String::new())
            }
            ".debug" => {
                let steps = self.session.debug(argument)?;
                Ok(format_steps(&steps))
            }
            _ if self.config.debug => {
                let steps = self.session.execute_traced(input)?;
                Ok(format_steps(&steps))
            }
            _ => {
                self.session.execute(input)?;
                Ok(self.format_stack(self.session.stack()))
            }
        }
    }

    /// Runs every line of a file as one program.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the program fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<String> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
        let program = source
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.eval(&program)
            .map_err(|e| e.in_source(path.display().to_string()))
    }

    /// Formats a stack top first, one value per line.
    fn format_stack(&self, stack: &Stack) -> String {
        let mut lines: Vec<String> = stack.iter().map(|v| self.style("1", &v.to_string())).collect();
        if self.config.show_types {
            lines.push(self.style("2", &stack.type_summary()));
        }
        lines.join("\n")
    }

    fn style(&self, code: &str, text: &str) -> String {
        if self.styled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn format_variables(&self) -> String {
        let mut entries: Vec<(&String, &Value)> = self.session.variables().iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(k, v)| format!("{k} = {v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_words(&self) -> String {
        let interpreter = self.session.interpreter();
        interpreter
            .word_names()
            .iter()
            .flat_map(|name| interpreter.candidates(name))
            .map(|word| {
                let marker = if word.is_stable() { "" } else { " (unstable)" };
                format!(":{:<10} {}{marker}", word.name(), word.signature())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
        if let Some(context) = &error.context {
            eprintln!("\x1b[2m{context}\x1b[0m");
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mplotstack\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Enter comma separated programs. Type .help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
.stack            Show the stack, top first
.vars             Show variables
.words            List words and their signatures
.clear            Empty the stack and reset variables
.debug PROGRAM    Show every step of PROGRAM without running it
.help             Show this help
";

/// Formats a debug trace, one step per line: stack (top first) then the
/// tokens still to run.
#[must_use]
pub fn format_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(|step| {
            let stack = step
                .context
                .stack()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let remaining = step
                .remaining
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            format!("[{stack}] | {remaining}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
