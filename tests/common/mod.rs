#![allow(dead_code)]

use walle::mach::{Color, Event, Runtime, Val};

/// Loads and runs `source` on a fresh canvas. Returns the runtime for
/// inspection along with every error it reported, one per line.
pub fn run(size: usize, source: &str) -> (Runtime, String) {
    let mut runtime = Runtime::new(size);
    if let Err(error) = runtime.load(source) {
        return (runtime, format!("{}\n", error));
    }
    let s = exec(&mut runtime);
    (runtime, s)
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Value of a variable after the run, rendered as text.
pub fn var(runtime: &Runtime, name: &str) -> String {
    match runtime.var().get(name) {
        Some(val) => val.to_string(),
        None => String::from("<undefined>"),
    }
}

pub fn val(runtime: &Runtime, name: &str) -> Option<Val> {
    runtime.var().get(name).cloned()
}

pub fn cell(runtime: &Runtime, x: i32, y: i32) -> Option<Color> {
    runtime.canvas().get(x, y)
}

/// Cells of `color` anywhere on the canvas.
pub fn count(runtime: &Runtime, color: Color) -> usize {
    let max = runtime.canvas().size() as i32 - 1;
    runtime.canvas().count(color, 0, 0, max, max)
}
