use super::ast::*;
use super::ident::{is_identifier, is_label};
use super::parse::{matching_paren, parse, split_top_level};
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## A single line of program source

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    source: String,
}

#[derive(Debug, PartialEq)]
pub enum LineKind<'a> {
    Blank,
    /// Label name as written, without the colon.
    Label(&'a str),
    Code,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line {
            source: s.trim_end_matches(|ch: char| ch == '\r' || ch == '\n').to_string(),
        }
    }

    pub fn kind(&self) -> LineKind {
        let s = self.source.trim();
        if s.is_empty() {
            LineKind::Blank
        } else if s.ends_with(':') && !s.contains(char::is_whitespace) {
            LineKind::Label(&s[..s.len() - 1])
        } else {
            LineKind::Code
        }
    }

    pub fn statement(&self) -> Result<Statement> {
        let s = self.source.trim();
        if is_goto(s) {
            goto(&s[4..])
        } else if let Some(arrow) = s.find("<-") {
            assignment(&s[..arrow], &s[arrow + 2..])
        } else {
            command(s)
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

fn is_goto(s: &str) -> bool {
    match s.get(..4) {
        Some(word) if word.eq_ignore_ascii_case("goto") => match s[4..].chars().next() {
            None => true,
            Some(ch) => ch.is_whitespace() || ch == '[',
        },
        _ => false,
    }
}

fn goto(s: &str) -> Result<Statement> {
    let s = s.trim_start();
    if !s.starts_with('[') {
        return Err(error!(SyntaxError; "EXPECTED [LABEL]"));
    }
    let close = match s.find(']') {
        Some(close) => close,
        None => return Err(error!(SyntaxError; "EXPECTED ]")),
    };
    let label = s[1..close].trim();
    if !is_label(label) {
        return Err(error!(InvalidLabel; label));
    }
    let rest = s[close + 1..].trim();
    let condition = if rest.is_empty() {
        Expression::Integer(1)
    } else if rest.starts_with('(') && matching_paren(rest, 0)? == rest.len() - 1 {
        parse(&rest[1..rest.len() - 1])?
    } else {
        return Err(error!(SyntaxError; "EXPECTED (CONDITION)"));
    };
    Ok(Statement::GoTo(label.into(), condition))
}

fn assignment(name: &str, expr: &str) -> Result<Statement> {
    let name = name.trim();
    if !is_identifier(name) {
        return Err(error!(SyntaxError; &format!("INVALID VARIABLE NAME {}", name)));
    }
    Ok(Statement::Let(name.into(), parse(expr)?))
}

fn command(s: &str) -> Result<Statement> {
    let (name, params) = match s.find('(') {
        None => (s, vec![]),
        Some(open) => {
            if matching_paren(s, open)? != s.len() - 1 {
                return Err(error!(SyntaxError; "UNEXPECTED TEXT AFTER PARAMETERS"));
            }
            let inner = &s[open + 1..s.len() - 1];
            let mut params = vec![];
            if !inner.trim().is_empty() {
                for p in split_top_level(inner, ',')? {
                    params.push(param(p)?);
                }
            }
            (s[..open].trim(), params)
        }
    };
    if !is_identifier(name) {
        return Err(error!(SyntaxError; &format!("INVALID COMMAND {}", name)));
    }
    match Verb::from_name(name) {
        Some(verb) => Ok(Statement::Command(verb, params)),
        None => Err(error!(UnknownCommand; name)),
    }
}

fn param(p: &str) -> Result<Param> {
    if p.is_empty() {
        return Err(error!(SyntaxError; "EXPECTED PARAMETER"));
    }
    if p.len() >= 2 && p.starts_with('"') && p.ends_with('"') && !p[1..p.len() - 1].contains('"')
    {
        return Ok(Param::String(p[1..p.len() - 1].into()));
    }
    if let Ok(n) = p.parse::<i32>() {
        return Ok(Param::Integer(n));
    }
    Ok(Param::Expression(parse(p)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(s: &str) -> Statement {
        match Line::new(s).statement() {
            Ok(statement) => statement,
            Err(e) => panic!("{} : {:?}", s, e),
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(Line::new("   ").kind(), LineKind::Blank);
        assert_eq!(Line::new("  loop-1:  ").kind(), LineKind::Label("loop-1"));
        assert_eq!(Line::new("not a label:").kind(), LineKind::Code);
        assert_eq!(Line::new("Fill").kind(), LineKind::Code);
    }

    #[test]
    fn test_command() {
        assert_eq!(
            statement("Spawn(2, n + 1)"),
            Statement::Command(
                Verb::Spawn,
                vec![
                    Param::Integer(2),
                    Param::Expression(Expression::binary(
                        Operator::Plus,
                        Expression::Var("n".into()),
                        Expression::Integer(1)
                    ))
                ]
            )
        );
        assert_eq!(
            statement("color(\"Red\")"),
            Statement::Command(Verb::Color, vec![Param::String("Red".into())])
        );
        assert_eq!(statement("Fill"), Statement::Command(Verb::Fill, vec![]));
        assert_eq!(statement("Fill()"), Statement::Command(Verb::Fill, vec![]));
        assert_eq!(
            statement("DrawLine(-1, 0, GetActualX())"),
            Statement::Command(
                Verb::DrawLine,
                vec![
                    Param::Integer(-1),
                    Param::Integer(0),
                    Param::Expression(Expression::Function("GetActualX".into(), vec![]))
                ]
            )
        );
    }

    #[test]
    fn test_goto() {
        assert_eq!(
            statement("GoTo [loop] (i < 10)"),
            Statement::GoTo(
                "loop".into(),
                Expression::binary(
                    Operator::Less,
                    Expression::Var("i".into()),
                    Expression::Integer(10)
                )
            )
        );
        assert_eq!(
            statement("goto[End]"),
            Statement::GoTo("End".into(), Expression::Integer(1))
        );
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            statement("n <- n * 2"),
            Statement::Let(
                "n".into(),
                Expression::binary(
                    Operator::Multiply,
                    Expression::Var("n".into()),
                    Expression::Integer(2)
                )
            )
        );
        // a variable may start with the letters g-o-t-o
        assert_eq!(
            statement("gotox <- 1"),
            Statement::Let("gotox".into(), Expression::Integer(1))
        );
    }

    #[test]
    fn test_errors() {
        let err = |s: &str| Line::new(s).statement().unwrap_err();
        assert!(err("Jump(1)").is_syntax());
        assert!(err("Spawn(1, 2").is_syntax());
        assert!(err("Spawn(1, 2) extra").is_syntax());
        assert!(err("Spawn(1, )").is_syntax());
        assert!(err("GoTo loop (1)").is_syntax());
        assert!(err("GoTo [1loop] (1)").is_syntax());
        assert!(err("GoTo [loop] 1").is_syntax());
        assert!(err("2x <- 3").is_syntax());
        assert!(err("x <- ").is_syntax());
    }
}
