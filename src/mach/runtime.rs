use super::{Brush, Canvas, Command, Cursor, Function, Program, State, Step, Var};
use crate::error;
use crate::lang::{Error, LineKind};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Canvas side used by [`Runtime::default`].
pub const DEFAULT_CANVAS_SIZE: usize = 100;

/// What a batch of [`Runtime::execute`] ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// All requested cycles ran; call `execute` again to continue.
    Running,
    /// Nothing left to run.
    Stopped,
    /// The run was aborted. The error carries the one-based line number.
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Running,
    Interrupted,
}

/// ## Program driver
///
/// Owns everything a run touches. [`Runtime::load`] resets the state and
/// collects labels, then [`Runtime::execute`] walks the lines in bounded
/// batches so a host can redraw or cancel in between.

pub struct Runtime {
    program: Program,
    commands: Vec<Option<Command>>,
    state: State,
    function: Function,
    counter: usize,
    status: Status,
    loaded: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(DEFAULT_CANVAS_SIZE)
    }
}

impl Runtime {
    pub fn new(canvas_size: usize) -> Runtime {
        Runtime {
            program: Program::new(),
            commands: vec![],
            state: State::new(canvas_size),
            function: Function::new(),
            counter: 0,
            status: Status::Idle,
            loaded: false,
        }
    }

    /// Replaces the program and starts a fresh run of it.
    /// Label errors are returned here and nothing is left to execute.
    pub fn load(&mut self, source: &str) -> Result<()> {
        self.program.clear();
        self.commands.clear();
        self.loaded = false;
        self.reset();
        match Program::load(source) {
            Ok(program) => {
                debug!(
                    lines = program.len(),
                    labels = program.label_count(),
                    "program loaded"
                );
                self.commands = vec![None; program.len()];
                self.program = program;
                self.loaded = true;
                self.status = Status::Running;
                Ok(())
            }
            Err(error) => {
                debug!(%error, "program rejected");
                self.status = Status::Idle;
                Err(error)
            }
        }
    }

    /// Fresh canvas, cursor, brush and variables; a loaded program restarts from the top.
    pub fn reset(&mut self) {
        self.state = State::new(self.state.canvas.size());
        self.counter = 0;
        self.status = if self.loaded {
            Status::Running
        } else {
            Status::Idle
        };
    }

    pub fn resize(&mut self, canvas_size: usize) {
        debug!(canvas_size, "canvas resized");
        self.state = State::new(canvas_size);
        self.reset();
    }

    /// The next [`Runtime::execute`] reports `BREAK` at the current line and stops.
    pub fn interrupt(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Interrupted;
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Runs at most `cycles` lines.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.status {
            Status::Idle => return Event::Stopped,
            Status::Interrupted => {
                self.status = Status::Idle;
                let error = error!(Break, Some(self.counter + 1));
                debug!(%error, "run interrupted");
                return Event::Error(error);
            }
            Status::Running => {}
        }
        for _ in 0..cycles {
            if self.counter >= self.program.len() {
                self.status = Status::Idle;
                if !self.state.cursor.spawned {
                    let error = error!(MissingSpawn; "PROGRAM NEVER CALLED SPAWN");
                    debug!(%error, "run failed");
                    return Event::Error(error);
                }
                debug!(changed = self.state.canvas.modified().len(), "run finished");
                return Event::Stopped;
            }
            let current = self.counter;
            match self.step(current) {
                Ok(step) => {
                    trace!(line = current + 1, ?step);
                    self.counter = match step {
                        Step::Advance => current + 1,
                        Step::Jump(target) => target,
                    };
                }
                Err(error) => {
                    self.status = Status::Idle;
                    let error = error.in_line_number(Some(current + 1));
                    debug!(%error, "run failed");
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    /// Runs to completion. A program that loops forever never returns.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.execute(usize::max_value()) {
                Event::Running => {}
                Event::Stopped => return Ok(()),
                Event::Error(error) => return Err(error),
            }
        }
    }

    /// Code lines are validated on their first visit and kept for later ones.
    fn step(&mut self, index: usize) -> Result<Step> {
        let (line, slot) = match (self.program.line(index), self.commands.get_mut(index)) {
            (Some(line), Some(slot)) => (line, slot),
            _ => return Err(error!(InternalError)),
        };
        if let LineKind::Blank | LineKind::Label(_) = line.kind() {
            return Ok(Step::Advance);
        }
        if slot.is_none() {
            *slot = Some(Command::new(line.statement()?, &self.program)?);
        }
        match slot {
            Some(command) => command.execute(&mut self.state, &self.function),
            None => Err(error!(InternalError)),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Zero-based index of the next line to run.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.state.canvas
    }

    pub fn cursor(&self) -> Cursor {
        self.state.cursor
    }

    pub fn brush(&self) -> Brush {
        self.state.brush
    }

    pub fn var(&self) -> &Var {
        &self.state.vars
    }

    /// Cells painted since the last call, for incremental redraws.
    pub fn drain_modified(&mut self) -> Vec<(i32, i32)> {
        self.state.canvas.drain_modified()
    }
}
