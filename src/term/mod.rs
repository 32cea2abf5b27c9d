extern crate ansi_term;
extern crate ctrlc;
use crate::mach::{Canvas, Color, Event, Runtime};
use ansi_term::{Colour, Style};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Run a Pixel Wall-E program and print the painted canvas.
#[derive(Parser, Debug)]
#[command(name = "walle", version, about)]
pub struct Args {
    /// Program source file
    pub file_path: PathBuf,

    /// Canvas side in cells
    #[arg(long, default_value_t = 32)]
    pub size: usize,

    /// Lines run between interrupt checks
    #[arg(long, default_value_t = 5000)]
    pub cycles: usize,

    /// Print letters instead of colored blocks
    #[arg(long)]
    pub plain: bool,
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    match main_loop(&args, interrupted) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!(
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("{}: {}", args.file_path.display(), error))
            );
            std::process::exit(1);
        }
    }
}

/// Returns whether the program ran to completion.
fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let source = std::fs::read_to_string(&args.file_path)?;
    let mut runtime = Runtime::new(args.size);
    let mut success = true;
    if let Err(error) = runtime.load(&source) {
        print_error(&error.to_string());
        return Ok(false);
    }
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(args.cycles.max(1)) {
            Event::Running => {}
            Event::Stopped => break,
            Event::Error(error) => {
                print_error(&error.to_string());
                success = false;
                break;
            }
        }
    }
    let changed = runtime.drain_modified().len();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render(runtime.canvas(), args.plain))?;
    let cursor = runtime.cursor();
    if cursor.spawned {
        writeln!(out, "Cursor: ({}, {})", cursor.x, cursor.y)?;
    } else {
        writeln!(out, "Cursor: not spawned")?;
    }
    let brush = runtime.brush();
    writeln!(out, "Brush: {}, size {}", brush.color(), brush.size())?;
    let size = runtime.canvas().size();
    writeln!(out, "Canvas: {}x{}, {} cells changed", size, size, changed)?;
    Ok(success)
}

fn print_error(s: &str) {
    eprintln!("{}", Style::new().bold().paint(s));
}

fn render(canvas: &Canvas, plain: bool) -> String {
    let mut s = String::new();
    for row in canvas.rows() {
        for color in row {
            if plain {
                s.push(letter(*color));
            } else {
                s.push_str(&colour(*color).paint("  ").to_string());
            }
        }
        s.push('\n');
    }
    s
}

fn colour(color: Color) -> Style {
    match color {
        Color::Red => Colour::Red,
        Color::Blue => Colour::Blue,
        Color::Green => Colour::Green,
        Color::Yellow => Colour::Yellow,
        Color::Orange => Colour::Fixed(208),
        Color::Purple => Colour::Purple,
        Color::Black => Colour::Black,
        Color::White => Colour::White,
        Color::Transparent => Colour::Fixed(250),
    }
    .reverse()
}

fn letter(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Green => 'G',
        Color::Yellow => 'Y',
        Color::Orange => 'O',
        Color::Purple => 'P',
        Color::Black => 'K',
        Color::White => '.',
        Color::Transparent => ' ',
    }
}
