/*!
## Rust Machine Module

This Rust module runs Pixel Wall-E programs against a canvas.

*/

mod canvas;
mod command;
mod eval;
mod function;
mod operation;
mod program;
pub mod raster;
mod runtime;
mod state;
mod val;
mod var;

pub use canvas::Canvas;
pub use canvas::Color;
pub use command::Command;
pub use command::Step;
pub use eval::evaluate;
pub use function::Function;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::DEFAULT_CANVAS_SIZE;
pub use state::Brush;
pub use state::Cursor;
pub use state::State;
pub use val::Val;
pub use var::Var;
