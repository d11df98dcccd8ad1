use std::borrow::Cow;

use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Context, EditMode, Editor, Helper, Highlighter, Hinter, Validator};

use rangespec::{Discard, Range, SpecResult, TokenKind, parse, tokenize, validate};

const HISTORY_FILE: &str = "rangespec_history.txt";

const COMMANDS: &[(&str, &str)] = &[
    ("add", "add <spec>      add the values described by <spec>"),
    ("del", "del <spec>      delete the values described by <spec>"),
    ("in", "in <spec>       membership of each value, in order"),
    ("all", "all <spec>      whether every value is a member"),
    ("show", "show            the range as a minimal spec"),
    ("list", "list            every member, ascending"),
    ("runs", "runs            the runs of consecutive members"),
    ("size", "size            number of members"),
    ("clear", "clear           remove every member"),
    ("help", "help            this message"),
    ("exit", "exit            leave (Ctrl-D works too)"),
];

// Splits "add 1..3 5" into ("add", "1..3 5").
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn takes_spec(command: &str) -> bool {
    matches!(command, "add" | "del" | "in" | "all")
}

struct CommandCompleter;

impl rustyline::completion::Completer for CommandCompleter {
    type Candidate = String;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let prefix = &line[..pos];
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }
        Ok((
            0,
            COMMANDS
                .iter()
                .filter(|(name, _)| name.starts_with(prefix))
                .map(|(name, _)| name.to_string())
                .collect(),
        ))
    }
}

struct SpecValidator;

impl Validator for SpecValidator {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let (command, rest) = split_command(ctx.input());
        if !takes_spec(command) {
            return Ok(ValidationResult::Valid(None));
        }
        Ok(match validate(rest) {
            Ok(()) => ValidationResult::Valid(None),
            Err(e) => ValidationResult::Invalid(Some(format!("  - {}", e.kind))),
        })
    }
}

struct SpecHighlighter;

impl Highlighter for SpecHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let (command, _) = split_command(line);
        let Some(offset) = line.find(command).map(|i| i + command.len()) else {
            return Cow::Borrowed(line);
        };
        let (head, tail) = line.split_at(offset);
        let Ok(tokens) = tokenize(tail) else {
            return Cow::Borrowed(line);
        };

        let mut highlighted = format!("\x1b[1m{}\x1b[0m", head); // Bold command
        for token in tokens {
            let text = token.text(tail);
            match token.kind {
                TokenKind::Number => highlighted.push_str(&format!("\x1b[33m{}\x1b[0m", text)),
                TokenKind::RangeSep => highlighted.push_str(&format!("\x1b[36m{}\x1b[0m", text)),
                TokenKind::Comma | TokenKind::Whitespace => highlighted.push_str(text),
            }
        }
        Cow::Owned(highlighted)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
struct ReplHelper {
    #[rustyline(Validator)]
    validator: SpecValidator,
    #[rustyline(Highlighter)]
    highlighter: SpecHighlighter,
    #[rustyline(Completer)]
    completer: CommandCompleter,
}

// Values named by a spec, in spec order.
fn spec_values(spec: &str) -> SpecResult<Vec<i64>> {
    Ok(parse(spec, &mut Discard)?
        .iter()
        .flat_map(|section| section.values())
        .collect())
}

fn print_help() {
    for (_, usage) in COMMANDS {
        println!("  {}", usage);
    }
}

enum Outcome {
    Continue,
    Exit,
}

fn run_command(range: &mut Range, line: &str) -> SpecResult<Outcome> {
    let (command, rest) = split_command(line);
    match command {
        "add" => range.add_range([rest])?,
        "del" => range.delete_range([rest])?,
        "in" => {
            let values = spec_values(rest)?;
            for (value, member) in values.iter().zip(range.in_range_each(values.iter().copied())) {
                println!("{}: {}", value, member);
            }
        }
        "all" => println!("{}", range.in_range_all(spec_values(rest)?)),
        "show" => println!("{}", range),
        "list" => println!("{:?}", range.sorted_values()),
        "runs" => {
            for run in range.runs() {
                println!("{}..={}", run.start(), run.end());
            }
        }
        "size" => println!("{}", range.size()),
        "clear" => range.clear(),
        "help" => print_help(),
        "exit" => return Ok(Outcome::Exit),
        other => println!("Unknown command '{}'. Type 'help' for a list.", other),
    }
    Ok(Outcome::Continue)
}

fn main() -> rustyline::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("rangespec REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' or Ctrl-D to quit.");

    let edit_mode = match std::env::var("RANGESPEC_EDIT_MODE").as_deref() {
        Ok("vi") => EditMode::Vi,
        _ => EditMode::Emacs,
    };
    let config = rustyline::config::Config::builder()
        .edit_mode(edit_mode)
        .auto_add_history(true)
        .build();
    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper {
        validator: SpecValidator,
        highlighter: SpecHighlighter,
        completer: CommandCompleter,
    }));
    if rl.load_history(HISTORY_FILE).is_err() {
        println!("No previous history.");
    }

    let mut range = Range::default();
    loop {
        match rl.readline("range> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match run_command(&mut range, &line) {
                    Ok(Outcome::Continue) => {}
                    Ok(Outcome::Exit) => break,
                    Err(e) => {
                        if e.pretty_print().is_err() {
                            eprintln!("Error: {}", e);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Type 'exit' or Ctrl-D to quit.");
            }
            Err(ReadlineError::Eof) => {
                println!("\nExiting.");
                break;
            }
            Err(err) => {
                eprintln!("Readline Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history(HISTORY_FILE)
}
