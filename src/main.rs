mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod value;

use std::path::PathBuf;

use clap::Parser;
use env::Environment;
use error::InterpError;
use eval::eval;
use parser::{parse_one, parse_program};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use value::V;

/// A tree-walking interpreter for the Lispy language.
#[derive(Parser, Debug)]
#[command(name = "interp")]
#[command(version = config::VERSION)]
#[command(about = "A small Lisp-family expression language")]
struct Cli {
    /// Script files to load and run, in order. With none, starts the REPL.
    files: Vec<PathBuf>,
}

fn main() {
    simple_logger::init_with_level(log::Level::Info).ok();
    log::info!("lispy interpreter starting");

    let cli = Cli::parse();
    let env = Environment::new();
    builtins::register_builtins(&env);

    if cli.files.is_empty() {
        repl(&env);
    } else {
        for path in &cli.files {
            load_file(&env, path);
        }
    }
}

/// Loads and evaluates one argv-supplied file, the same way the `load`
/// builtin treats its own path argument: a missing file or a parse failure
/// becomes a printed `Err`, never a nonzero exit or a skipped remainder of
/// argv (see `SPEC_FULL.md` §4.8/§6.3).
fn load_file(env: &std::rc::Rc<Environment>, path: &PathBuf) {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(source) => {
            let err = InterpError::FileRead {
                path: path.clone(),
                source,
            };
            log::warn!("{}", err);
            println!("Error: Could not load Library: {}", err);
            return;
        }
    };

    let exprs = match parse_program(&contents) {
        Ok(exprs) => exprs,
        Err(e) => {
            let err = InterpError::Parse(format!("{}: {}", path.display(), e));
            log::warn!("{}", err);
            println!("Error: Could not load Library: {}", err);
            return;
        }
    };

    for expr in exprs {
        let result = eval(env, expr);
        if let V::Err(msg) = &result {
            println!("Error: {}", msg);
        }
    }

    log::info!("loaded {}", path.display());
}

fn repl(env: &std::rc::Rc<Environment>) {
    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config).expect("failed to initialize line editor");
    let _ = rl.load_history(config::HISTORY_FILE);

    loop {
        match rl.readline(config::PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_one(&line) {
                    Ok(expr) => println!("{}", eval(env, expr)),
                    Err(e) => eprintln!("Parse error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                log::error!("readline error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(config::HISTORY_FILE);
}
