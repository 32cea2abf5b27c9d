use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values
///
/// Every coercion the interpreter performs lives here. Arithmetic works on
/// reals, commands narrow to integers, conditions ask for truthiness.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i32),
    Real(f64),
    String(Rc<str>),
}

impl Val {
    pub fn from_bool(b: bool) -> Val {
        if b {
            Val::Integer(1)
        } else {
            Val::Integer(0)
        }
    }

    /// Non-zero numbers and non-empty strings are true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Integer(n) => *n != 0,
            Val::Real(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    pub fn to_real(&self) -> Result<f64> {
        f64::try_from(self)
    }

    pub fn to_integer(&self) -> Result<i32> {
        i32::try_from(self)
    }
}

impl TryFrom<&Val> for f64 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<Self> {
        match val {
            Val::Integer(n) => Ok(*n as f64),
            Val::Real(n) => Ok(*n),
            Val::String(s) => Err(error!(TypeMismatch; &format!("\"{}\" IS NOT A NUMBER", s))),
        }
    }
}

impl TryFrom<&Val> for i32 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<Self> {
        match val {
            Val::Integer(n) => Ok(*n),
            Val::Real(n) => {
                let n = n.round();
                if n.is_finite() && n >= i32::min_value() as f64 && n <= i32::max_value() as f64 {
                    Ok(n as i32)
                } else {
                    Err(error!(Overflow))
                }
            }
            Val::String(s) => Err(error!(TypeMismatch; &format!("\"{}\" IS NOT A NUMBER", s))),
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Real(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
