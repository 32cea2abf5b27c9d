use super::{ast::*, ident::is_identifier, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Parses an expression straight from its source text.
///
/// There is no token stream. The text is split at the loosest binding
/// operator found outside parentheses and quotes, preferring the rightmost
/// one on ties so that `10-3-2` groups as `(10-3)-2`.
pub fn parse(s: &str) -> Result<Expression> {
    let s = s.trim();
    if s.is_empty() {
        return Err(error!(SyntaxError; "EXPECTED EXPRESSION"));
    }
    if is_enclosed(s)? {
        return parse(&s[1..s.len() - 1]);
    }
    if let Some(function) = function_call(s)? {
        return Ok(function);
    }
    if let Some((index, op)) = split_point(s)? {
        let lhs = parse(&s[..index])?;
        let rhs = parse(&s[index + op.len()..])?;
        return Ok(Expression::binary(op, lhs, rhs));
    }
    atom(s)
}

/// Splits on `sep` wherever it sits outside parentheses and quotes.
pub fn split_top_level(s: &str, sep: char) -> Result<Vec<&str>> {
    let mut parts = vec![];
    let mut depth = 0;
    let mut quoted = false;
    let mut start = 0;
    for (index, ch) in s.char_indices() {
        if quoted {
            if ch == '"' {
                quoted = false;
            }
            continue;
        }
        match ch {
            '"' => quoted = true,
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(error!(SyntaxError; "UNBALANCED PARENTHESES"));
                }
                depth -= 1;
            }
            _ if ch == sep && depth == 0 => {
                parts.push(s[start..index].trim());
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    if quoted {
        return Err(error!(SyntaxError; "UNTERMINATED STRING"));
    }
    if depth != 0 {
        return Err(error!(SyntaxError; "UNBALANCED PARENTHESES"));
    }
    parts.push(s[start..].trim());
    Ok(parts)
}

/// Byte index of the `)` matching the `(` at `open`.
pub fn matching_paren(s: &str, open: usize) -> Result<usize> {
    debug_assert_eq!(s[open..].chars().next(), Some('('));
    let mut depth = 0;
    let mut quoted = false;
    for (index, ch) in s[open..].char_indices() {
        if quoted {
            if ch == '"' {
                quoted = false;
            }
            continue;
        }
        match ch {
            '"' => quoted = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + index);
                }
            }
            _ => {}
        }
    }
    Err(error!(SyntaxError; "EXPECTED RIGHT PARENTHESIS"))
}

fn is_enclosed(s: &str) -> Result<bool> {
    if !s.starts_with('(') {
        return Ok(false);
    }
    Ok(matching_paren(s, 0)? == s.len() - 1)
}

fn function_call(s: &str) -> Result<Option<Expression>> {
    let open = match s.find('(') {
        Some(open) if open > 0 && s.ends_with(')') => open,
        _ => return Ok(None),
    };
    let name = s[..open].trim();
    if !is_identifier(name) || matching_paren(s, open)? != s.len() - 1 {
        return Ok(None);
    }
    let inner = &s[open + 1..s.len() - 1];
    let mut args = vec![];
    if !inner.trim().is_empty() {
        for arg in split_top_level(inner, ',')? {
            args.push(parse(arg)?);
        }
    }
    Ok(Some(Expression::Function(name.into(), args)))
}

fn is_operator_char(ch: char) -> bool {
    "+-*/%<>=!&|".contains(ch)
}

fn split_point(s: &str) -> Result<Option<(usize, Operator)>> {
    let mut best: Option<(usize, Operator)> = None;
    let mut consider = |index: usize, op: Operator| {
        if best.map_or(true, |(_, b)| op.precedence() <= b.precedence()) {
            best = Some((index, op));
        }
    };
    let mut depth = 0;
    let mut quoted = false;
    let mut prev: Option<char> = None;
    let mut chars = s.char_indices();
    while let Some((index, ch)) = chars.next() {
        if quoted {
            if ch == '"' {
                quoted = false;
            }
            prev = Some(ch);
            continue;
        }
        match ch {
            '"' => quoted = true,
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(error!(SyntaxError; "UNBALANCED PARENTHESES"));
                }
                depth -= 1;
            }
            _ if depth == 0 => {
                if let Some(op) = s.get(index..index + 2).and_then(Operator::from_two) {
                    consider(index, op);
                    chars.next();
                    prev = Some(ch);
                    continue;
                }
                if let Some(op) = Operator::from_one(ch) {
                    let sign = (op == Operator::Plus || op == Operator::Minus)
                        && prev.map_or(true, is_operator_char);
                    if !sign {
                        consider(index, op);
                    }
                }
            }
            _ => {}
        }
        if !ch.is_whitespace() {
            prev = Some(ch);
        }
    }
    if quoted {
        return Err(error!(SyntaxError; "UNTERMINATED STRING"));
    }
    if depth != 0 {
        return Err(error!(SyntaxError; "UNBALANCED PARENTHESES"));
    }
    Ok(best)
}

fn atom(s: &str) -> Result<Expression> {
    if s.eq_ignore_ascii_case("true") {
        return Ok(Expression::Integer(1));
    }
    if s.eq_ignore_ascii_case("false") {
        return Ok(Expression::Integer(0));
    }
    if let Ok(n) = s.parse::<i32>() {
        return Ok(Expression::Integer(n));
    }
    if s.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') {
        return match s.parse::<f64>() {
            Ok(r) => Ok(Expression::Real(r)),
            Err(_) => Err(error!(SyntaxError; &format!("INVALID NUMBER {}", s))),
        };
    }
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') && !s[1..s.len() - 1].contains('"')
    {
        return Ok(Expression::String(s[1..s.len() - 1].into()));
    }
    if let Some(rest) = s.strip_prefix('-') {
        let operand = parse(rest)?;
        return Ok(Expression::binary(
            Operator::Minus,
            Expression::Integer(0),
            operand,
        ));
    }
    if let Some(rest) = s.strip_prefix('+') {
        return parse(rest);
    }
    if is_identifier(s) {
        return Ok(Expression::Var(s.into()));
    }
    Err(error!(SyntaxError; &format!("INVALID EXPRESSION {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i32) -> Expression {
        Expression::Integer(n)
    }

    fn var(s: &str) -> Expression {
        Expression::Var(s.into())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse("2 + 3 * 4").unwrap(),
            Expression::binary(
                Operator::Plus,
                int(2),
                Expression::binary(Operator::Multiply, int(3), int(4))
            )
        );
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            parse("10 - 3 - 2").unwrap(),
            Expression::binary(
                Operator::Minus,
                Expression::binary(Operator::Minus, int(10), int(3)),
                int(2)
            )
        );
    }

    #[test]
    fn test_power_is_not_two_multiplies() {
        assert_eq!(
            parse("2*3**2").unwrap(),
            Expression::binary(
                Operator::Multiply,
                int(2),
                Expression::binary(Operator::Power, int(3), int(2))
            )
        );
    }

    #[test]
    fn test_parens() {
        assert_eq!(
            parse("((a))").unwrap(),
            var("a"),
        );
        assert_eq!(
            parse("(a) + (b)").unwrap(),
            Expression::binary(Operator::Plus, var("a"), var("b"))
        );
        assert_eq!(
            parse("(1 + 2) * 3").unwrap(),
            Expression::binary(
                Operator::Multiply,
                Expression::binary(Operator::Plus, int(1), int(2)),
                int(3)
            )
        );
    }

    #[test]
    fn test_logic_and_comparison() {
        assert_eq!(
            parse("a < 3 && b >= 4 || c != 0").unwrap(),
            Expression::binary(
                Operator::Or,
                Expression::binary(
                    Operator::And,
                    Expression::binary(Operator::Less, var("a"), int(3)),
                    Expression::binary(Operator::GreaterEqual, var("b"), int(4)),
                ),
                Expression::binary(Operator::NotEqual, var("c"), int(0)),
            )
        );
    }

    #[test]
    fn test_functions() {
        assert_eq!(
            parse("GetActualX()").unwrap(),
            Expression::Function("GetActualX".into(), vec![])
        );
        assert_eq!(
            parse("GetColorCount(\"Red\", 0, 0, f(1, 2), 9)").unwrap(),
            Expression::Function(
                "GetColorCount".into(),
                vec![
                    Expression::String("Red".into()),
                    int(0),
                    int(0),
                    Expression::Function("f".into(), vec![int(1), int(2)]),
                    int(9),
                ]
            )
        );
        assert_eq!(
            parse("f(1) + g(2)").unwrap(),
            Expression::binary(
                Operator::Plus,
                Expression::Function("f".into(), vec![int(1)]),
                Expression::Function("g".into(), vec![int(2)]),
            )
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("TRUE").unwrap(), int(1));
        assert_eq!(parse("false").unwrap(), int(0));
        assert_eq!(parse("-7").unwrap(), int(-7));
        assert_eq!(parse("2.5").unwrap(), Expression::Real(2.5));
        assert_eq!(parse("\"a+b\"").unwrap(), Expression::String("a+b".into()));
    }

    #[test]
    fn test_signs() {
        assert_eq!(
            parse("3 - -2").unwrap(),
            Expression::binary(Operator::Minus, int(3), int(-2))
        );
        assert_eq!(
            parse("-x").unwrap(),
            Expression::binary(Operator::Minus, int(0), var("x"))
        );
        assert_eq!(
            parse("a<-1").unwrap(),
            Expression::binary(Operator::Less, var("a"), int(-1))
        );
    }

    #[test]
    fn test_errors() {
        assert!(parse("").unwrap_err().is_syntax());
        assert!(parse("(1 + 2").unwrap_err().is_syntax());
        assert!(parse("1 + 2)").unwrap_err().is_syntax());
        assert!(parse("1 +").unwrap_err().is_syntax());
        assert!(parse("a b").unwrap_err().is_syntax());
        assert!(parse("\"open").unwrap_err().is_syntax());
        assert!(parse("3x").unwrap_err().is_syntax());
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(
            split_top_level("1, f(2, 3), \"a,b\"", ',').unwrap(),
            vec!["1", "f(2, 3)", "\"a,b\""]
        );
    }
}
