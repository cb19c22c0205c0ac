use std::fmt;
use std::rc::Rc;

use crate::runtime::Procedure;

#[derive(Clone, Debug, PartialEq)]
enum ValueData {
    Int(i64),
    Symbol(String),
    Procedure(Procedure),
}

/// Result of evaluating a form. Clone-by-reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Value(Rc<ValueData>);

impl Value {
    fn from_data(data: ValueData) -> Value {
        Value(Rc::new(data))
    }

    pub fn int(n: i64) -> Value {
        Value::from_data(ValueData::Int(n))
    }

    pub fn as_int(&self) -> Option<i64> {
        if let ValueData::Int(n) = *self.0 {
            Some(n)
        } else {
            None
        }
    }

    pub fn symbol<S: ToString>(s: S) -> Value {
        Value::from_data(ValueData::Symbol(s.to_string()))
    }

    pub fn as_symbol(&self) -> Option<&str> {
        if let ValueData::Symbol(ref s) = *self.0 {
            Some(&*s)
        } else {
            None
        }
    }

    pub fn procedure(procc: Procedure) -> Value {
        Value::from_data(ValueData::Procedure(procc))
    }

    pub fn as_procedure(&self) -> Option<Procedure> {
        if let ValueData::Procedure(ref procc) = *self.0 {
            Some(procc.clone())
        } else {
            None
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ValueData::Int(n) => write!(f, "{}", n),
            ValueData::Symbol(ref s) => write!(f, "{}", s),
            ValueData::Procedure(ref procc) => write!(f, "{}", procc),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Value;
    use crate::builtin::initial_environment;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::int(3).as_int(), Some(3));
        assert_eq!(Value::int(3).as_symbol(), None);
        assert_eq!(Value::symbol("x").as_symbol(), Some("x"));
        assert!(Value::symbol("x").as_procedure().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::int(-12).to_string(), "-12");
        assert_eq!(Value::symbol("foo").to_string(), "foo");
        let plus = initial_environment().lookup("+").unwrap();
        assert_eq!(plus.to_string(), "#<builtin +>");
    }
}
