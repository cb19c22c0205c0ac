#[macro_use]
extern crate log;

use rustyline::error::ReadlineError;
use rustyline::Editor;

use tinylisp::{Config, Interpreter};

fn main() {
    env_logger::init();

    let config = Config::from_env();
    let interpreter = Interpreter::new(&config);
    let mut rl = Editor::<()>::new();

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str());
                match interpreter.eval_line(&line) {
                    Ok(result) => println!("{}", result),
                    Err(err) => println!("{}", err),
                }
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!("reading input: {}", err);
                break;
            },
        }
    }
}
