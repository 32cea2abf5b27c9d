use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

/// Whether an error was found while reading a line or while running it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    InvalidLabel = 3,
    UnknownCommand = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    UndefinedLabel = 8,
    UndefinedVariable = 9,
    DivisionByZero = 11,
    TypeMismatch = 13,
    UndefinedFunction = 18,
    NotSpawned = 30,
    AlreadySpawned = 31,
    MissingSpawn = 32,
    OutOfCanvas = 33,
    InvalidColor = 34,
    Break = 40,
    InternalError = 51,
}

impl ErrorCode {
    fn from_u16(code: u16) -> Option<ErrorCode> {
        use ErrorCode::*;
        Some(match code {
            2 => SyntaxError,
            3 => InvalidLabel,
            4 => UnknownCommand,
            5 => IllegalFunctionCall,
            6 => Overflow,
            8 => UndefinedLabel,
            9 => UndefinedVariable,
            11 => DivisionByZero,
            13 => TypeMismatch,
            18 => UndefinedFunction,
            30 => NotSpawned,
            31 => AlreadySpawned,
            32 => MissingSpawn,
            33 => OutOfCanvas,
            34 => InvalidColor,
            40 => Break,
            51 => InternalError,
            _ => return None,
        })
    }

    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            SyntaxError | InvalidLabel | UnknownCommand => ErrorKind::Syntax,
            _ => ErrorKind::Runtime,
        }
    }
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        ErrorCode::from_u16(self.code)
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code() {
            Some(code) => code.kind(),
            None => ErrorKind::Runtime,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    pub fn is_runtime(&self) -> bool {
        self.kind() == ErrorKind::Runtime
    }

    /// One-based source line, once the driver has attached it.
    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "INVALID LABEL",
            4 => "UNKNOWN COMMAND",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            8 => "UNDEFINED LABEL",
            9 => "UNDEFINED VARIABLE",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            18 => "UNDEFINED FUNCTION",
            30 => "NOT SPAWNED",
            31 => "ALREADY SPAWNED",
            32 => "MISSING SPAWN",
            33 => "OUT OF CANVAS",
            34 => "INVALID COLOR",
            40 => "BREAK",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
