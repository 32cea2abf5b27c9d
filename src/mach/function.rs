use super::{Color, State, Val};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

type Builtin = fn(&State, &[Val]) -> Result<Val>;

/// ## Built-in functions
///
/// Looked up by lowercase name. The table never changes after construction.

pub struct Function {
    table: HashMap<&'static str, (RangeInclusive<usize>, Builtin)>,
}

impl Default for Function {
    fn default() -> Self {
        Function::new()
    }
}

impl Function {
    pub fn new() -> Function {
        let entries: [(&'static str, RangeInclusive<usize>, Builtin); 7] = [
            ("getactualx", 0..=0, Function::get_actual_x),
            ("getactualy", 0..=0, Function::get_actual_y),
            ("getcanvassize", 0..=0, Function::get_canvas_size),
            ("getcolorcount", 5..=5, Function::get_color_count),
            ("isbrushcolor", 1..=1, Function::is_brush_color),
            ("isbrushsize", 1..=1, Function::is_brush_size),
            ("iscanvascolor", 3..=3, Function::is_canvas_color),
        ];
        Function {
            table: entries
                .iter()
                .cloned()
                .map(|(name, arity, f)| (name, (arity, f)))
                .collect(),
        }
    }

    pub fn call(&self, func_name: &str, state: &State, args: &[Val]) -> Result<Val> {
        let (arity, f) = match self.table.get(func_name.to_ascii_lowercase().as_str()) {
            Some(entry) => entry,
            None => return Err(error!(UndefinedFunction; func_name)),
        };
        if !arity.contains(&args.len()) {
            return Err(error!(IllegalFunctionCall; &format!(
                "{} TAKES {} ARGUMENTS, GOT {}",
                func_name,
                arity.start(),
                args.len()
            )));
        }
        f(state, args)
    }

    fn get_actual_x(state: &State, _: &[Val]) -> Result<Val> {
        Ok(Val::Integer(state.cursor.x))
    }

    fn get_actual_y(state: &State, _: &[Val]) -> Result<Val> {
        Ok(Val::Integer(state.cursor.y))
    }

    fn get_canvas_size(state: &State, _: &[Val]) -> Result<Val> {
        Ok(Val::Integer(state.canvas_size()))
    }

    fn get_color_count(state: &State, args: &[Val]) -> Result<Val> {
        let color = color_arg(&args[0])?;
        let x1 = args[1].to_integer()?;
        let y1 = args[2].to_integer()?;
        let x2 = args[3].to_integer()?;
        let y2 = args[4].to_integer()?;
        Ok(Val::Integer(state.canvas.count(color, x1, y1, x2, y2) as i32))
    }

    fn is_brush_color(state: &State, args: &[Val]) -> Result<Val> {
        Ok(Val::from_bool(state.brush.color() == color_arg(&args[0])?))
    }

    fn is_brush_size(state: &State, args: &[Val]) -> Result<Val> {
        Ok(Val::from_bool(state.brush.size() == args[0].to_integer()?))
    }

    fn is_canvas_color(state: &State, args: &[Val]) -> Result<Val> {
        let color = color_arg(&args[0])?;
        let vertical = args[1].to_integer()?;
        let horizontal = args[2].to_integer()?;
        let x = state.cursor.x.checked_add(horizontal);
        let y = state.cursor.y.checked_add(vertical);
        let found = match (x, y) {
            (Some(x), Some(y)) => state.canvas.get(x, y),
            _ => None,
        };
        Ok(Val::from_bool(found == Some(color)))
    }
}

fn color_arg(val: &Val) -> Result<Color> {
    match val {
        Val::String(name) => match Color::from_name(name) {
            Some(color) => Ok(color),
            None => Err(error!(InvalidColor; name)),
        },
        _ => Err(error!(TypeMismatch; "EXPECTED COLOR NAME")),
    }
}
