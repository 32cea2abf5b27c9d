use super::{evaluate, raster, Color, Function, Program, State};
use crate::error;
use crate::lang::ast::{Expression, Param, Statement, Verb};
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Where the program counter goes after a line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advance,
    Jump(usize),
}

/// ## A validated, ready to run line
///
/// Building a `Command` checks everything that can be known without
/// running: parameter count, literal kinds, literal ranges and jump
/// targets. [`Command::execute`] checks the rest against the live state.

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Spawn {
        x: Expression,
        y: Expression,
    },
    Color(Color),
    Size(Expression),
    DrawLine {
        dir_x: Expression,
        dir_y: Expression,
        distance: Expression,
    },
    DrawCircle {
        dir_x: Expression,
        dir_y: Expression,
        radius: Expression,
    },
    DrawRectangle {
        dir_x: Expression,
        dir_y: Expression,
        distance: Expression,
        width: Expression,
        height: Expression,
    },
    Fill,
    GoTo {
        target: usize,
        condition: Expression,
    },
    Let(Rc<str>, Expression),
}

impl Command {
    pub fn new(statement: Statement, program: &Program) -> Result<Command> {
        match statement {
            Statement::Command(verb, params) => Command::validate(verb, params),
            Statement::GoTo(label, condition) => match program.label(&label) {
                Some(target) => Ok(Command::GoTo { target, condition }),
                None => Err(error!(UndefinedLabel; &label)),
            },
            Statement::Let(name, expr) => Ok(Command::Let(name, expr)),
        }
    }

    pub fn validate(verb: Verb, params: Vec<Param>) -> Result<Command> {
        let expected = match verb {
            Verb::Fill => 0,
            Verb::Color | Verb::Size => 1,
            Verb::Spawn => 2,
            Verb::DrawLine | Verb::DrawCircle => 3,
            Verb::DrawRectangle => 5,
        };
        if params.len() != expected {
            return Err(error!(SyntaxError; &format!(
                "{} EXPECTS {} PARAMETERS, GOT {}",
                verb,
                expected,
                params.len()
            )));
        }
        let mut params = params.into_iter();
        let mut next = || params.next().ok_or_else(|| error!(InternalError));
        Ok(match verb {
            Verb::Spawn => Command::Spawn {
                x: number(next()?)?,
                y: number(next()?)?,
            },
            Verb::Color => Command::Color(color(next()?)?),
            Verb::Size => Command::Size(at_least(number(next()?)?, 1, "SIZE")?),
            Verb::DrawLine => Command::DrawLine {
                dir_x: direction(number(next()?)?)?,
                dir_y: direction(number(next()?)?)?,
                distance: at_least(number(next()?)?, 0, "DISTANCE")?,
            },
            Verb::DrawCircle => Command::DrawCircle {
                dir_x: direction(number(next()?)?)?,
                dir_y: direction(number(next()?)?)?,
                radius: at_least(number(next()?)?, 1, "RADIUS")?,
            },
            Verb::DrawRectangle => Command::DrawRectangle {
                dir_x: direction(number(next()?)?)?,
                dir_y: direction(number(next()?)?)?,
                distance: at_least(number(next()?)?, 0, "DISTANCE")?,
                width: at_least(number(next()?)?, 1, "WIDTH")?,
                height: at_least(number(next()?)?, 1, "HEIGHT")?,
            },
            Verb::Fill => Command::Fill,
        })
    }

    /// The verb for drawing and state commands; jumps and assignments have none.
    pub fn verb(&self) -> Option<Verb> {
        Some(match self {
            Command::Spawn { .. } => Verb::Spawn,
            Command::Color(_) => Verb::Color,
            Command::Size(_) => Verb::Size,
            Command::DrawLine { .. } => Verb::DrawLine,
            Command::DrawCircle { .. } => Verb::DrawCircle,
            Command::DrawRectangle { .. } => Verb::DrawRectangle,
            Command::Fill => Verb::Fill,
            Command::GoTo { .. } | Command::Let(..) => return None,
        })
    }

    pub fn execute(&self, state: &mut State, function: &Function) -> Result<Step> {
        if let Some(verb) = self.verb() {
            if verb == Verb::Spawn && state.cursor.spawned {
                return Err(error!(AlreadySpawned));
            }
            if verb != Verb::Spawn && !state.cursor.spawned {
                return Err(error!(NotSpawned; &format!("{} BEFORE SPAWN", verb)));
            }
        }
        match self {
            Command::Spawn { x, y } => {
                let x = integer(x, state, function)?;
                let y = integer(y, state, function)?;
                if !state.canvas.contains(x, y) {
                    return Err(error!(OutOfCanvas; &format!("SPAWN AT ({}, {})", x, y)));
                }
                state.cursor.x = x;
                state.cursor.y = y;
                state.cursor.spawned = true;
            }
            Command::Color(color) => state.brush.set_color(*color),
            Command::Size(size) => {
                let size = integer(size, state, function)?;
                if size < 1 {
                    return Err(error!(IllegalFunctionCall; "SIZE MUST BE POSITIVE"));
                }
                state.brush.set_size(size);
            }
            Command::DrawLine {
                dir_x,
                dir_y,
                distance,
            } => {
                if state.brush.is_transparent() {
                    return Ok(Step::Advance);
                }
                let (dx, dy) = directions(dir_x, dir_y, state, function)?;
                let distance = non_negative(integer(distance, state, function)?, "DISTANCE")?;
                let from = (state.cursor.x, state.cursor.y);
                let to = offset(from, (dx, dy), distance)?;
                inside(state, to)?;
                raster::line(
                    &mut state.canvas,
                    from,
                    to,
                    state.brush.color(),
                    state.brush.size(),
                );
                state.cursor.x = to.0;
                state.cursor.y = to.1;
            }
            Command::DrawCircle {
                dir_x,
                dir_y,
                radius,
            } => {
                if state.brush.is_transparent() {
                    return Ok(Step::Advance);
                }
                let (dx, dy) = directions(dir_x, dir_y, state, function)?;
                let radius = integer(radius, state, function)?;
                if radius < 1 {
                    return Err(error!(IllegalFunctionCall; "RADIUS MUST BE POSITIVE"));
                }
                let center = offset((state.cursor.x, state.cursor.y), (dx, dy), radius)?;
                inside(state, center)?;
                raster::circle(
                    &mut state.canvas,
                    center,
                    radius,
                    state.brush.color(),
                    state.brush.size(),
                );
                state.cursor.x = center.0;
                state.cursor.y = center.1;
            }
            Command::DrawRectangle {
                dir_x,
                dir_y,
                distance,
                width,
                height,
            } => {
                if state.brush.is_transparent() {
                    return Ok(Step::Advance);
                }
                let (dx, dy) = directions(dir_x, dir_y, state, function)?;
                let distance = non_negative(integer(distance, state, function)?, "DISTANCE")?;
                let width = integer(width, state, function)?;
                let height = integer(height, state, function)?;
                if width < 1 || height < 1 {
                    return Err(error!(IllegalFunctionCall; "WIDTH AND HEIGHT MUST BE POSITIVE"));
                }
                let center = offset((state.cursor.x, state.cursor.y), (dx, dy), distance)?;
                inside(state, center)?;
                let left = center.0 - width / 2;
                let top = center.1 - height / 2;
                let right = left + width - 1;
                let bottom = top + height - 1;
                inside(state, (left, top))?;
                inside(state, (right, bottom))?;
                let (color, size) = (state.brush.color(), state.brush.size());
                let canvas = &mut state.canvas;
                raster::line(canvas, (left, top), (right, top), color, size);
                raster::line(canvas, (right, top), (right, bottom), color, size);
                raster::line(canvas, (right, bottom), (left, bottom), color, size);
                raster::line(canvas, (left, bottom), (left, top), color, size);
                state.cursor.x = center.0;
                state.cursor.y = center.1;
            }
            Command::Fill => {
                if !state.brush.is_transparent() {
                    let at = (state.cursor.x, state.cursor.y);
                    raster::flood_fill(&mut state.canvas, at, state.brush.color());
                }
            }
            Command::GoTo { target, condition } => {
                if evaluate(condition, state, function)?.is_truthy() {
                    return Ok(Step::Jump(*target));
                }
            }
            Command::Let(name, expr) => {
                let val = evaluate(expr, state, function)?;
                state.vars.store(name, val);
            }
        }
        Ok(Step::Advance)
    }
}

fn integer(expr: &Expression, state: &State, function: &Function) -> Result<i32> {
    evaluate(expr, state, function)?.to_integer()
}

fn number(param: Param) -> Result<Expression> {
    match param {
        Param::Integer(n) => Ok(Expression::Integer(n)),
        Param::String(s) | Param::Expression(Expression::String(s)) => {
            Err(error!(SyntaxError; &format!("EXPECTED NUMBER, GOT \"{}\"", s)))
        }
        Param::Expression(expr) => Ok(expr),
    }
}

fn color(param: Param) -> Result<Color> {
    match param {
        Param::String(name) | Param::Expression(Expression::String(name)) => {
            match Color::from_name(&name) {
                Some(color) => Ok(color),
                None => Err(error!(InvalidColor; &name)),
            }
        }
        _ => Err(error!(SyntaxError; "EXPECTED QUOTED COLOR NAME")),
    }
}

fn direction(expr: Expression) -> Result<Expression> {
    match expr {
        Expression::Integer(n) if !(-1..=1).contains(&n) => {
            Err(error!(SyntaxError; &format!("DIRECTION {} NOT -1, 0 OR 1", n)))
        }
        _ => Ok(expr),
    }
}

fn at_least(expr: Expression, min: i32, what: &str) -> Result<Expression> {
    match expr {
        Expression::Integer(n) if n < min => {
            Err(error!(SyntaxError; &format!("{} {} OUT OF RANGE", what, n)))
        }
        _ => Ok(expr),
    }
}

fn directions(
    dir_x: &Expression,
    dir_y: &Expression,
    state: &State,
    function: &Function,
) -> Result<(i32, i32)> {
    let dx = integer(dir_x, state, function)?;
    let dy = integer(dir_y, state, function)?;
    for n in [dx, dy].iter() {
        if !(-1..=1).contains(n) {
            return Err(error!(IllegalFunctionCall; &format!("DIRECTION {} NOT -1, 0 OR 1", n)));
        }
    }
    Ok((dx, dy))
}

fn non_negative(n: i32, what: &str) -> Result<i32> {
    if n < 0 {
        Err(error!(IllegalFunctionCall; &format!("{} {} IS NEGATIVE", what, n)))
    } else {
        Ok(n)
    }
}

fn offset((x, y): (i32, i32), (dx, dy): (i32, i32), distance: i32) -> Result<(i32, i32)> {
    let x = dx.checked_mul(distance).and_then(|d| x.checked_add(d));
    let y = dy.checked_mul(distance).and_then(|d| y.checked_add(d));
    match (x, y) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(error!(Overflow)),
    }
}

fn inside(state: &State, (x, y): (i32, i32)) -> Result<()> {
    if state.canvas.contains(x, y) {
        Ok(())
    } else {
        Err(error!(OutOfCanvas; &format!("({}, {})", x, y)))
    }
}
