//! Toylang CLI - prints the tokens of toylang source code.

use std::env;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use toylang_lexer::{LexError, Scanner, Token, TokenKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command-line options.
#[derive(Debug, Default)]
struct Options {
    eval_code: Option<String>,
    file: Option<String>,
    interactive: bool,
    kinds_only: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let options = match parse_args(args)? {
        Some(options) => options,
        None => return Ok(()),
    };
    debug!("options: {:?}", options);

    let clean = if let Some(code) = &options.eval_code {
        scan_and_print("<eval>", code, options.kinds_only)
    } else if let Some(filepath) = &options.file {
        let code = read_file(filepath)?;
        scan_and_print(filepath, &code, options.kinds_only)
    } else {
        return start_repl(options.kinds_only);
    };

    if options.interactive {
        start_repl(options.kinds_only)?;
    }

    if !clean {
        return Err("input contained invalid tokens".to_string());
    }
    Ok(())
}

/// Parse arguments. Returns `None` when the program should exit right away.
fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-v" | "--version" => {
                print_version();
                return Ok(None);
            }
            "-e" | "--eval" => {
                i += 1;
                if i >= args.len() {
                    return Err("-e requires an argument".to_string());
                }
                options.eval_code = Some(args[i].clone());
            }
            "-i" | "--interactive" => {
                options.interactive = true;
            }
            "-k" | "--kinds" => {
                options.kinds_only = true;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                options.file = Some(arg.clone());
                break;
            }
        }
        i += 1;
    }

    Ok(Some(options))
}

fn print_usage() {
    println!(
        r#"
Toylang v{} - token listing for toylang source

Usage:
  toylang [options] [file]

Options:
  -h, --help         Show this help message
  -v, --version      Show version
  -e, --eval         Tokenize code from command line
  -k, --kinds        Print only the token kinds, on one line
  -i, --interactive  Start REPL after tokenizing file

Examples:
  toylang                       Start interactive REPL
  toylang script.toy            Tokenize a script file
  toylang -e "11 + 2 - 3.5"     Tokenize code
  toylang -k -e "let x 4.62"    Print the kind sequence only
"#,
        VERSION
    );
}

fn print_version() {
    println!("Toylang {}", VERSION);
}

fn read_file(filepath: &str) -> Result<String, String> {
    let path = Path::new(filepath);

    if !path.exists() {
        return Err(format!("File not found: {}", filepath));
    }

    info!("reading {}", filepath);
    fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))
}

/// Tokenize `source` and print the tokens followed by any diagnostics.
/// Returns true if no `Error` tokens were produced.
fn scan_and_print(name: &str, source: &str, kinds_only: bool) -> bool {
    let mut scanner = Scanner::new(name, source);
    let tokens: Vec<Token> = scanner.by_ref().collect();

    if kinds_only {
        let kinds: Vec<String> = tokens.iter().map(|t| t.kind.to_string()).collect();
        println!("{}", kinds.join(" "));
    } else {
        for token in &tokens {
            println!("{}", format_token(token, source));
        }
    }

    let errors = scanner.errors();
    for (error, token) in errors
        .iter()
        .zip(tokens.iter().filter(|t| t.kind == TokenKind::Error))
    {
        eprintln!("{}", render_error(error, scanner.line_text(&token.span)));
    }
    errors.is_empty()
}

fn format_token(token: &Token, source: &str) -> String {
    let position = format!("{}:{}", token.span.line, token.span.column);
    match token.kind {
        TokenKind::EndOfFile => format!("{:<8} {}", position, token.kind),
        _ => format!(
            "{:<8} {:<7} {:?}",
            position,
            token.kind,
            token.raw(source).unwrap_or_default()
        ),
    }
}

/// Render a diagnostic with the offending line and a caret under it.
fn render_error(error: &LexError, line_text: Option<&str>) -> String {
    match line_text {
        Some(text) => {
            let indent: String = text
                .chars()
                .take(error.column().saturating_sub(1))
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            format!("{}\n  {}\n  {}^", error, text, indent)
        }
        None => error.to_string(),
    }
}

fn start_repl(kinds_only: bool) -> Result<(), String> {
    println!("Toylang v{} - Type 'exit' or Ctrl+D to quit", VERSION);
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| format!("Failed to create editor: {}", e))?;

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "exit" || trimmed == "quit" {
                    println!("Goodbye!");
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed).ok(); // Ignore history errors
                scan_and_print("<repl>", &line, kinds_only);
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                return Err(format!("Readline error: {}", e));
            }
        }
    }

    Ok(())
}
