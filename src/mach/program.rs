use crate::error;
use crate::lang::{is_label, label_key, Error, Line, LineKind};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Loaded program source
///
/// Lines are kept as text and parsed when the counter reaches them.
/// Labels are collected once, up front, and never change afterwards.

#[derive(Debug, Clone, Default)]
pub struct Program {
    lines: Vec<Line>,
    labels: HashMap<String, usize>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Splits source into lines and registers every label. The first bad or
    /// repeated label fails the whole load.
    pub fn load(source: &str) -> Result<Program> {
        let mut program = Program {
            lines: source.lines().map(Line::new).collect(),
            labels: HashMap::new(),
        };
        for (index, line) in program.lines.iter().enumerate() {
            if let LineKind::Label(name) = line.kind() {
                let line_number = Some(index + 1);
                if !is_label(name) {
                    return Err(error!(InvalidLabel, line_number; name));
                }
                if program.labels.insert(label_key(name), index).is_some() {
                    return Err(error!(SyntaxError, line_number;
                        &format!("DUPLICATE LABEL {}", name)));
                }
            }
        }
        Ok(program)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.labels.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Zero-based index of the label's own line.
    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(&label_key(name)).copied()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}
