use super::StepClock;
use crate::config::Config;
use crate::domain::{Grid, Language, Pattern, presets};
use crate::error::Result;
use rand::Rng;

/// Whether the simulation advances on its own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Session owns one simulation: the grid, the run state and the step clock.
/// This is the application layer that the UI talks to.
pub struct Session {
    grid: Grid,
    run_state: RunState,
    clock: StepClock,
    language: Language,
    random_density: f64,
}

impl Session {
    /// Idle session with an empty `rows x cols` grid stepping at 8 gen/s
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let defaults = Config::default();
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            run_state: RunState::Idle,
            clock: StepClock::new(defaults.steps_per_second),
            language: Language::default(),
            random_density: defaults.random_density,
        })
    }

    /// Session sized and seeded from `config`, with its start preset placed
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let (rows, cols) = config.grid_dimensions();
        let mut session = Self {
            grid: Grid::new(rows, cols)?,
            run_state: RunState::Idle,
            clock: StepClock::new(config.steps_per_second),
            language: config.resolve_language(),
            random_density: config.random_density,
        };
        if config.start_preset != 0 {
            session.place_preset(config.start_preset)?;
        }
        tracing::info!(
            rows,
            cols,
            steps_per_second = config.steps_per_second,
            language = ?session.language,
            "session created"
        );
        Ok(session)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.grid.get(row, col)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        tracing::debug!(language = ?self.language, "language switched");
        self.language
    }

    /// Presets as ordered (id, name) pairs in the session language
    pub fn list_presets(&self) -> Vec<(u8, &'static str)> {
        presets::list(self.language)
    }

    /// Switch between Idle and Running
    pub fn toggle_running(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        };
        self.clock.reset();
        tracing::info!(state = ?self.run_state, generation = self.generation(), "run state changed");
        self.run_state
    }

    /// Advance exactly one generation. Only accepted while Idle.
    pub fn step_once(&mut self) -> bool {
        if self.is_running() {
            tracing::warn!("manual step ignored while running");
            return false;
        }
        self.grid.step();
        tracing::debug!(generation = self.generation(), "manual step");
        true
    }

    /// Kill every cell, reset the generation and stop
    pub fn clear(&mut self) {
        self.grid.clear();
        self.stop();
        tracing::info!("grid cleared");
    }

    /// Replace the grid with random noise at the configured density and stop
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.randomize(self.random_density, rng);
        self.stop();
        tracing::info!(
            density = self.random_density,
            population = self.grid.population(),
            "grid randomized"
        );
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.grid.set(row, col, alive)?;
        tracing::debug!(row, col, alive, "cell set");
        Ok(())
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        let alive = self.grid.toggle(row, col)?;
        tracing::debug!(row, col, alive, "cell toggled");
        Ok(alive)
    }

    /// Centre preset `id` (1-7) on the grid. Returns the anchor used.
    pub fn place_preset(&mut self, id: u8) -> Result<(usize, usize)> {
        let preset = presets::by_id(id).inspect_err(|err| tracing::warn!(%err, "preset rejected"))?;
        let anchor = self.grid.place_pattern(preset.pattern());
        tracing::info!(id, name = preset.name(Language::English), ?anchor, "preset placed");
        Ok(anchor)
    }

    /// Centre a custom pattern on the grid. Returns the anchor used.
    pub fn place_pattern(&mut self, pattern: &Pattern) -> (usize, usize) {
        let anchor = self.grid.place_pattern(pattern);
        tracing::debug!(dimensions = ?pattern.dimensions(), ?anchor, "pattern placed");
        anchor
    }

    /// Feed one frame of `delta_time` seconds. While Running, performs every
    /// step that came due and returns how many were taken.
    pub fn tick(&mut self, delta_time: f32) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.clock.advance(delta_time);
        for _ in 0..due {
            self.grid.step();
        }
        if due > 1 {
            tracing::debug!(due, generation = self.generation(), "caught up on steps");
        }
        due
    }

    fn stop(&mut self) {
        if self.is_running() {
            self.run_state = RunState::Idle;
            self.clock.reset();
            tracing::info!(state = ?self.run_state, "run state changed");
        }
    }
}
