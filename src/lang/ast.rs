use std::rc::Rc;

/// A line after classification; blank lines and labels never get this far.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Command(Verb, Vec<Param>),
    GoTo(Rc<str>, Expression),
    Let(Rc<str>, Expression),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verb {
    Spawn,
    Color,
    Size,
    DrawLine,
    DrawCircle,
    DrawRectangle,
    Fill,
}

impl Verb {
    pub fn from_name(name: &str) -> Option<Verb> {
        use Verb::*;
        Some(match name.to_ascii_lowercase().as_str() {
            "spawn" => Spawn,
            "color" => Color,
            "size" => Size,
            "drawline" => DrawLine,
            "drawcircle" => DrawCircle,
            "drawrectangle" => DrawRectangle,
            "fill" => Fill,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Verb::*;
        match self {
            Spawn => write!(f, "Spawn"),
            Color => write!(f, "Color"),
            Size => write!(f, "Size"),
            DrawLine => write!(f, "DrawLine"),
            DrawCircle => write!(f, "DrawCircle"),
            DrawRectangle => write!(f, "DrawRectangle"),
            Fill => write!(f, "Fill"),
        }
    }
}

/// A command parameter as written in the source.
#[derive(Debug, PartialEq, Clone)]
pub enum Param {
    String(Rc<str>),
    Integer(i32),
    Expression(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i32),
    Real(f64),
    String(Rc<str>),
    Var(Rc<str>),
    Function(Rc<str>, Vec<Expression>),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Binary(op, Box::new(lhs), Box::new(rhs))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Or,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Power,
}

impl Operator {
    pub fn from_two(s: &str) -> Option<Operator> {
        use Operator::*;
        Some(match s {
            "||" => Or,
            "&&" => And,
            "==" => Equal,
            "!=" => NotEqual,
            "<=" => LessEqual,
            ">=" => GreaterEqual,
            "**" => Power,
            _ => return None,
        })
    }

    pub fn from_one(ch: char) -> Option<Operator> {
        use Operator::*;
        Some(match ch {
            '<' => Less,
            '>' => Greater,
            '+' => Plus,
            '-' => Minus,
            '*' => Multiply,
            '/' => Divide,
            '%' => Modulus,
            _ => return None,
        })
    }

    /// Lower binds looser.
    pub fn precedence(self) -> usize {
        use Operator::*;
        match self {
            Or => 1,
            And => 2,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 3,
            Plus | Minus => 4,
            Multiply | Divide | Modulus => 5,
            Power => 6,
        }
    }

    pub fn len(self) -> usize {
        self.to_string().len()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Or => write!(f, "||"),
            And => write!(f, "&&"),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
            Power => write!(f, "**"),
        }
    }
}
