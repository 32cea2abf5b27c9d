use super::{Function, Operation, State, Val};
use crate::lang::ast::Expression;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Evaluates an expression tree against the current state.
/// Function arguments are evaluated left to right before the call.
pub fn evaluate(expr: &Expression, state: &State, function: &Function) -> Result<Val> {
    match expr {
        Expression::Integer(n) => Ok(Val::Integer(*n)),
        Expression::Real(n) => Ok(Val::Real(*n)),
        Expression::String(s) => Ok(Val::String(s.clone())),
        Expression::Var(name) => state.vars.fetch(name),
        Expression::Function(name, args) => {
            let mut vals = Vec::with_capacity(args.len());
            for arg in args {
                vals.push(evaluate(arg, state, function)?);
            }
            function.call(name, state, &vals)
        }
        Expression::Binary(op, lhs, rhs) => {
            let lhs = evaluate(lhs, state, function)?;
            let rhs = evaluate(rhs, state, function)?;
            Operation::binary(*op, lhs, rhs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{parse, ErrorCode};

    fn eval(s: &str, state: &State) -> Result<Val> {
        evaluate(&parse(s)?, state, &Function::new())
    }

    #[test]
    fn test_precedence() {
        let state = State::new(3);
        assert_eq!(eval("2 + 3 * 4", &state).unwrap().to_integer().unwrap(), 14);
        assert_eq!(eval("10 - 3 - 2", &state).unwrap().to_integer().unwrap(), 5);
        assert_eq!(eval("2 ** 3 ** 2", &state).unwrap().to_integer().unwrap(), 64);
        assert_eq!(eval("(1 + 1) * -3", &state).unwrap(), Val::Real(-6.0));
        assert_eq!(eval("1 < 2 && 3 >= 3", &state).unwrap(), Val::Integer(1));
    }

    #[test]
    fn test_variables_and_functions() {
        let mut state = State::new(8);
        state.vars.store(&"n".into(), Val::Integer(4));
        assert_eq!(eval("n * GetCanvasSize()", &state).unwrap(), Val::Real(32.0));
        let e = eval("m + 1", &state).unwrap_err();
        assert_eq!(e.code(), Some(ErrorCode::UndefinedVariable));
        let e = eval("Missing(1)", &state).unwrap_err();
        assert_eq!(e.code(), Some(ErrorCode::UndefinedFunction));
        assert_eq!(eval("IsBrushColor(\"Transparent\")", &state).unwrap(), Val::Integer(1));
    }
}
