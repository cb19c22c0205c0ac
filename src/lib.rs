#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;

pub mod builtin;
pub mod config;
pub mod error;
pub mod read;
pub mod runtime;
pub mod value;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::runtime::Environment;
pub use crate::value::Value;

/// Evaluates one line at a time against a global environment that persists
/// between lines.
#[derive(Debug)]
pub struct Interpreter {
    environment: Environment,
    max_depth: usize,
}

impl Interpreter {
    pub fn new(config: &Config) -> Interpreter {
        Interpreter {
            environment: builtin::initial_environment(),
            max_depth: config.max_depth,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the rendered value of the line's first form, or the error
    /// that aborted it. A failed line leaves earlier bindings intact.
    pub fn eval_line(&self, line: &str) -> Result<String, Error> {
        let tokens = read::tokenize(line);
        trace!("tokens {:?}", tokens);
        read::read(&tokens, &self.environment, self.max_depth)
    }
}

impl Default for Interpreter {
    fn default() -> Interpreter {
        Interpreter::new(&Config::default())
    }
}
