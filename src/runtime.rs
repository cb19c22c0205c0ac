use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, SyntaxError};
use crate::read::{parse_integer, Node};
use crate::value::Value;

// Clone-by-reference environment
#[derive(Clone, Debug)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

#[derive(Debug, Default)]
struct EnvironmentData {
    outer: Option<Environment>,
    local: HashMap<String, Value>,
}

pub type Builtin = fn(Vec<Value>, &Environment) -> Result<Value, Error>;

#[derive(Clone, Copy)]
enum ProcEnum {
    Builtin(Builtin),
    // First operand arrives as its literal symbol instead of being atomized.
    Binder(Builtin),
}

#[derive(Clone, Copy)]
pub struct Procedure {
    name: &'static str,
    procc: ProcEnum,
}

impl Environment {
    fn from_data(data: EnvironmentData) -> Environment {
        Environment(Rc::new(RefCell::new(data)))
    }

    pub fn new() -> Environment {
        Environment::from_data(EnvironmentData::default())
    }

    pub fn from_hashmap(hmap: HashMap<String, Value>) -> Environment {
        Environment::from_data(EnvironmentData {
            outer: None,
            local: hmap,
        })
    }

    pub fn make_child(&self) -> Environment {
        Environment::from_data(EnvironmentData {
            outer: Some(self.clone()),
            local: HashMap::new(),
        })
    }

    /// The nearest environment in the chain, starting here, that binds
    /// `symbol`.
    pub fn find(&self, symbol: &str) -> Option<Environment> {
        let data = self.0.borrow();
        if data.local.contains_key(symbol) {
            Some(self.clone())
        } else {
            data.outer.as_ref().and_then(|env| env.find(symbol))
        }
    }

    pub fn get_local(&self, symbol: &str) -> Option<Value> {
        self.0.borrow().local.get(symbol).cloned()
    }

    pub fn lookup(&self, symbol: &str) -> Option<Value> {
        self.find(symbol).and_then(|env| env.get_local(symbol))
    }

    /// Bind in this environment only; outer bindings are shadowed, never
    /// touched.
    pub fn define(&self, symbol: &str, val: Value) {
        self.0.borrow_mut().local.insert(symbol.to_string(), val);
    }
}

impl Default for Environment {
    fn default() -> Environment {
        Environment::new()
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Procedure {
    pub fn builtin(name: &'static str, bltin: Builtin) -> Procedure {
        Procedure { name, procc: ProcEnum::Builtin(bltin) }
    }

    pub fn binder(name: &'static str, bltin: Builtin) -> Procedure {
        Procedure { name, procc: ProcEnum::Binder(bltin) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn takes_literal_first(&self) -> bool {
        match self.procc {
            ProcEnum::Binder(_) => true,
            ProcEnum::Builtin(_) => false,
        }
    }

    pub fn apply(&self, args: Vec<Value>, env: &Environment) ->
        Result<Value, Error> {

        match self.procc {
            ProcEnum::Builtin(f) | ProcEnum::Binder(f) => f(args, env),
        }
    }
}

// Builtins are unique per name.
impl PartialEq for Procedure {
    fn eq(&self, other: &Procedure) -> bool {
        self.name == other.name
            && self.takes_literal_first() == other.takes_literal_first()
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<procedure {}>", self.name)
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#<builtin {}>", self.name)
    }
}

/// Resolve a single token. Only the local bindings of `env` are consulted,
/// not the outer chain; tokens that are neither bound nor integers stay
/// symbols.
pub fn atomize(token: &str, env: &Environment) -> Value {
    if let Some(val) = env.get_local(token) {
        val
    } else if let Some(n) = parse_integer(token) {
        Value::int(n)
    } else {
        Value::symbol(token)
    }
}

// Symbols produced by a nested call get another chance to resolve.
fn reatomize(val: Value, env: &Environment) -> Value {
    match val.as_symbol() {
        Some(s) => atomize(s, env),
        None => val,
    }
}

pub fn eval(node: &Node, env: &Environment) -> Result<Value, Error> {
    match *node {
        Node::Atom(token) => Ok(atomize(token, env)),
        Node::Call(ref items) => eval_call(items, env),
    }
}

fn eval_call(items: &[Node], env: &Environment) -> Result<Value, Error> {
    let (operator, operands) = items.split_first()
        .ok_or(SyntaxError::EmptyCall)?;
    let name = match *operator {
        Node::Atom(name) => name,
        Node::Call(_) => return Err(SyntaxError::OperatorNotSymbol.into()),
    };
    let binding = env.find(name)
        .and_then(|scope| scope.get_local(name))
        .ok_or_else(|| Error::UnboundSymbol(name.to_string()))?;
    let procc = binding.as_procedure()
        .ok_or_else(|| Error::Type(format!("{} is not a procedure", binding)))?;

    let mut args = Vec::with_capacity(operands.len());
    for (i, operand) in operands.iter().enumerate() {
        let val = match *operand {
            // Integer literals stay integers so a binder can't rebind them.
            Node::Atom(token) if i == 0 && procc.takes_literal_first() =>
                parse_integer(token).map_or_else(|| Value::symbol(token),
                    Value::int),
            Node::Atom(token) => atomize(token, env),
            Node::Call(ref inner) => reatomize(eval_call(inner, env)?, env),
        };
        args.push(val);
    }

    debug!("applying {} to {} argument(s)", procc.name(), args.len());
    procc.apply(args, env)
}
