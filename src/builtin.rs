use std::collections::HashMap;
use std::convert::TryFrom;

use crate::error::{ArithmeticError, Error};
use crate::runtime::{Environment, Procedure};
use crate::value::Value;

fn int_args(name: &str, args: &[Value]) -> Result<Vec<i64>, Error> {
    if args.is_empty() {
        return Err(Error::Type(format!("{} expects at least 1 argument",
            name)));
    }
    args.iter()
        .map(|arg| arg.as_int().ok_or_else(|| Error::Type(format!(
            "{} expects integer arguments, got {}", name, arg))))
        .collect()
}

// Left fold over the integers, failing on overflow.
fn fold<F>(first: i64, rest: &[i64], op: F) -> Result<i64, Error>
    where F: Fn(i64, i64) -> Option<i64> {

    let mut total = first;
    for &n in rest {
        total = op(total, n).ok_or(ArithmeticError::Overflow)?;
    }
    Ok(total)
}

fn sum(args: Vec<Value>, _: &Environment) -> Result<Value, Error> {
    let nums = int_args("+", &args)?;
    Ok(Value::int(fold(nums[0], &nums[1..], i64::checked_add)?))
}

fn minus(args: Vec<Value>, _: &Environment) -> Result<Value, Error> {
    let nums = int_args("-", &args)?;
    // Summed wide so only a final result outside i64 counts as overflow.
    let rest: i128 = nums[1..].iter().map(|&n| i128::from(n)).sum();
    let diff = i64::try_from(i128::from(nums[0]) - rest)
        .map_err(|_| ArithmeticError::Overflow)?;
    Ok(Value::int(diff))
}

fn times(args: Vec<Value>, _: &Environment) -> Result<Value, Error> {
    let nums = int_args("*", &args)?;
    Ok(Value::int(fold(nums[0], &nums[1..], i64::checked_mul)?))
}

fn divide(args: Vec<Value>, _: &Environment) -> Result<Value, Error> {
    let nums = int_args("/", &args)?;
    if nums[1..].contains(&0) {
        return Err(ArithmeticError::DivisionByZero.into());
    }
    // Truncates toward zero.
    Ok(Value::int(fold(nums[0], &nums[1..], i64::checked_div)?))
}

fn define(args: Vec<Value>, env: &Environment) -> Result<Value, Error> {
    if args.len() != 2 {
        return Err(Error::Type(format!("define expects 2 arguments, got {}",
            args.len())));
    }
    let name = args[0].as_symbol().ok_or_else(|| Error::Type(format!(
        "define expects a symbol to bind, got {}", args[0])))?;
    debug!("define {} = {}", name, args[1]);
    env.define(name, args[1].clone());
    Ok(Value::int(0))
}

pub fn initial_environment() -> Environment {
    let pre_hashmap = hashmap! {
        "+" => Procedure::builtin("+", sum),
        "-" => Procedure::builtin("-", minus),
        "*" => Procedure::builtin("*", times),
        "/" => Procedure::builtin("/", divide),
        "define" => Procedure::binder("define", define),
    };

    let mut hashmap = HashMap::new();
    for (key, procc) in pre_hashmap {
        hashmap.insert(key.to_string(), Value::procedure(procc));
    }

    Environment::from_hashmap(hashmap)
}
