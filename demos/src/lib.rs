//! Terminal driver for the pathviz crates.
//!
//! Builds a grid from command-line flags, optionally fills it with a maze or
//! scattered walls, then runs one search while drawing every intermediate
//! state. Drawing goes through a [`Frontend`] so the same session logic runs
//! in a live terminal ([`Terminal`]) or without any output ([`Headless`]).

use std::error::Error;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use pathviz_core::config::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WALL_PROBABILITY};
use pathviz_core::{CancelToken, CellState, Grid, GridConfig};
use pathviz_maze::{Generation, MazeGen};
use pathviz_paths::{Algorithm, SearchOutcome, run_grid};

/// Command-line flags of the `pathviz` binary.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Watch grid pathfinding algorithms at work", long_about = None)]
pub struct Args {
    /// Grid height (odd for mazes)
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: i32,

    /// Grid width (odd for mazes)
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: i32,

    /// a*, dijkstra, bfs or dfs
    #[arg(short, long, default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,

    /// Chance for each cell to become a wall with --walls
    #[arg(long, default_value_t = DEFAULT_WALL_PROBABILITY)]
    pub wall_probability: f64,

    /// Generate a recursive-division maze before searching
    #[arg(long)]
    pub maze: bool,

    /// Scatter random walls before searching
    #[arg(long, conflicts_with = "maze")]
    pub walls: bool,

    /// Seed for maze and wall generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each drawn step, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Do not draw intermediate steps
    #[arg(long)]
    pub headless: bool,
}

impl Args {
    pub fn config(&self) -> GridConfig {
        GridConfig {
            rows: self.rows,
            cols: self.cols,
            wall_probability: self.wall_probability,
        }
    }
}

/// Where a session draws its frames and reads cancel requests from.
pub trait Frontend {
    fn init(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Show `grid` with a one-line status below it.
    fn draw(&mut self, grid: &Grid, status: &str) -> io::Result<()>;

    /// Whether the user asked to stop the current operation.
    fn cancel_requested(&mut self) -> io::Result<bool> {
        Ok(false)
    }

    /// Time to wait after each frame.
    fn frame_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn close(&mut self) {}
}

/// Draws nothing and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Frontend for Headless {
    fn draw(&mut self, _: &Grid, _: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Live rendering in the alternate screen using crossterm.
///
/// `q` or `Esc` cancels the running operation.
#[derive(Debug, Default)]
pub struct Terminal {
    delay: Duration,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

fn state_color(state: CellState) -> CtColor {
    match state {
        CellState::Blank => CtColor::Rgb { r: 90, g: 90, b: 100 },
        CellState::Wall => CtColor::Rgb { r: 200, g: 200, b: 210 },
        CellState::Start => CtColor::Rgb { r: 80, g: 220, b: 80 },
        CellState::End => CtColor::Rgb { r: 230, g: 60, b: 60 },
        CellState::Open => CtColor::Rgb { r: 80, g: 200, b: 220 },
        CellState::Closed => CtColor::Rgb { r: 70, g: 90, b: 200 },
        CellState::Path => CtColor::Rgb { r: 255, g: 210, b: 60 },
    }
}

impl Frontend for Terminal {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
    }

    fn draw(&mut self, grid: &Grid, status: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        for cell in grid {
            if cell.id.col == 0 {
                queue!(stdout, cursor::MoveTo(0, cell.id.row as u16))?;
            }
            queue!(
                stdout,
                SetForegroundColor(state_color(cell.state)),
                Print(cell.state.glyph())
            )?;
        }
        queue!(
            stdout,
            ResetColor,
            cursor::MoveTo(0, grid.rows() as u16 + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        stdout.flush()
    }

    fn cancel_requested(&mut self) -> io::Result<bool> {
        let mut cancel = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                cancel |= matches!(code, KeyCode::Char('q') | KeyCode::Esc);
            }
        }
        Ok(cancel)
    }

    fn frame_delay(&self) -> Duration {
        self.delay
    }

    fn close(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// The end state of a session.
#[derive(Debug, Clone)]
pub struct Report {
    pub algorithm: Algorithm,
    pub grid: Grid,
    /// `Cancelled` also covers a cancelled maze, in which case no search ran.
    pub outcome: SearchOutcome,
    /// Frames drawn, including the final one.
    pub frames: usize,
}

impl Report {
    pub fn summary(&self) -> String {
        match &self.outcome {
            SearchOutcome::Found(path) => {
                format!("{}: path found, {} steps", self.algorithm, path.len())
            }
            SearchOutcome::NotFound => format!("{}: no solution", self.algorithm),
            SearchOutcome::Cancelled => format!("{}: cancelled", self.algorithm),
            SearchOutcome::MissingEndpoints => {
                format!("{}: start and end must both be set", self.algorithm)
            }
        }
    }
}

/// Draws one frame per callback and turns frontend failures and key presses
/// into cancellation.
struct Stepper<'a, D: Frontend + ?Sized> {
    front: &'a mut D,
    token: CancelToken,
    status: String,
    frames: usize,
    failure: Option<io::Error>,
}

impl<D: Frontend + ?Sized> Stepper<'_, D> {
    fn step(&mut self, grid: &Grid) {
        if self.failure.is_some() {
            return;
        }
        self.frames += 1;
        let polled = self
            .front
            .draw(grid, &self.status)
            .and_then(|()| self.front.cancel_requested());
        match polled {
            Ok(true) => self.token.cancel(),
            Ok(false) => {}
            Err(e) => {
                self.failure = Some(e);
                self.token.cancel();
            }
        }
        let delay = self.front.frame_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn check(&mut self) -> io::Result<()> {
        self.failure.take().map_or(Ok(()), Err)
    }
}

/// Run one session: build the grid, prepare it as `args` ask, then search.
///
/// The frontend is initialised first and always closed before returning.
pub fn run_session<D: Frontend + ?Sized>(args: &Args, front: &mut D) -> Result<Report, Box<dyn Error>> {
    front.init()?;
    let result = session(args, front);
    front.close();
    result
}

fn session<D: Frontend + ?Sized>(args: &Args, front: &mut D) -> Result<Report, Box<dyn Error>> {
    let mut grid = args.config().build()?;
    grid.reset_endpoints()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let token = CancelToken::new();
    let mut stepper = Stepper {
        front,
        token: token.clone(),
        status: String::new(),
        frames: 0,
        failure: None,
    };

    if args.maze {
        grid.clear_non_walls();
        grid.clear_walls();
        stepper.status = "building maze (q to stop)".to_string();
        let generation =
            MazeGen::new(&mut rng).generate_until(&mut grid, |g| stepper.step(g), &token)?;
        stepper.check()?;
        if generation == Generation::Cancelled {
            log::info!("maze generation cancelled");
            return finish(stepper, grid, args.algorithm, SearchOutcome::Cancelled);
        }
    } else if args.walls {
        grid.clear_non_walls();
        grid.clear_walls();
        grid.scatter_walls(args.wall_probability, &mut rng);
    }

    grid.clear_non_walls();
    stepper.status = format!("{}: searching (q to stop)", args.algorithm);
    let outcome = run_grid(args.algorithm, &mut grid, |g| stepper.step(g), &token);
    stepper.check()?;
    log::info!("{}: {:?}", args.algorithm, outcome.steps());
    finish(stepper, grid, args.algorithm, outcome)
}

fn finish<D: Frontend + ?Sized>(
    mut stepper: Stepper<'_, D>,
    grid: Grid,
    algorithm: Algorithm,
    outcome: SearchOutcome,
) -> Result<Report, Box<dyn Error>> {
    let mut report = Report {
        algorithm,
        grid,
        outcome,
        frames: stepper.frames,
    };
    stepper.front.draw(&report.grid, &report.summary())?;
    report.frames += 1;
    Ok(report)
}
