use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are case-sensitive. A variable exists from its first
/// assignment until the end of the run.

#[derive(Debug, Clone, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }
}
