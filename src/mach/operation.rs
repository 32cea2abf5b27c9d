use super::Val;
use crate::error;
use crate::lang::ast::Operator;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Or => Ok(Val::from_bool(lhs.is_truthy() || rhs.is_truthy())),
            And => Ok(Val::from_bool(lhs.is_truthy() && rhs.is_truthy())),
            Equal => Ok(Val::from_bool(Operation::equal_bool(&lhs, &rhs)?)),
            NotEqual => Ok(Val::from_bool(!Operation::equal_bool(&lhs, &rhs)?)),
            Less => Operation::compare(lhs, rhs, |l, r| l < r),
            LessEqual => Operation::compare(lhs, rhs, |l, r| l <= r),
            Greater => Operation::compare(lhs, rhs, |l, r| l > r),
            GreaterEqual => Operation::compare(lhs, rhs, |l, r| l >= r),
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Power => Operation::power(lhs, rhs),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Real(lhs.to_real()? + rhs.to_real()?))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Real(lhs.to_real()? - rhs.to_real()?))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Real(lhs.to_real()? * rhs.to_real()?))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (lhs.to_real()?, rhs.to_real()?);
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Real(l / r))
    }

    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (lhs.to_real()?, rhs.to_real()?);
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Real(l % r))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Real(lhs.to_real()?.powf(rhs.to_real()?)))
    }

    /// Strings compare by their text, so `"5" == 5` holds.
    fn equal_bool(lhs: &Val, rhs: &Val) -> Result<bool> {
        if lhs.is_string() || rhs.is_string() {
            return Ok(lhs.to_string() == rhs.to_string());
        }
        Ok(lhs.to_real()? == rhs.to_real()?)
    }

    fn compare(lhs: Val, rhs: Val, cmp: fn(f64, f64) -> bool) -> Result<Val> {
        if lhs.is_string() || rhs.is_string() {
            return Err(error!(TypeMismatch; "STRINGS ONLY COMPARE WITH == AND !="));
        }
        Ok(Val::from_bool(cmp(lhs.to_real()?, rhs.to_real()?)))
    }
}
