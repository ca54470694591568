//! Command-line interface and the simulation run loop

use crate::automaton::engine::CellularAutomaton;
use crate::io::configuration::{
    DEFAULT_ALIVE_PROBABILITY, DEFAULT_RANDOM_HEIGHT, DEFAULT_RANDOM_WIDTH, DEFAULT_RULE_STRING,
    DEFAULT_SECONDS_PER_STEP, DEFAULT_SEED, DEFAULT_START_CHOICE, DEFAULT_STEPS,
    DEFAULT_UPDATE_RATE, GIF_CELL_SCALE,
};
use crate::io::display::FrameDisplay;
use crate::io::error::Result;
use crate::io::recording::GenerationRecorder;
use crate::io::render::{SymbolSet, render_grid};
use crate::io::validation::{RawInputs, SimulationConfig, validate_inputs};
use crate::presets::library::default_registry;
use crate::presets::random::RandomGridSpec;
use crate::spatial::Grid;
use clap::Parser;
use rand::RngCore;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "lifegrid")]
#[command(
    author,
    version,
    about = "Simulate cellular automata on a toroidal grid in the terminal"
)]
/// Command-line arguments for the simulator
///
/// The six simulation parameters are kept as raw text so that validation,
/// not argument parsing, decides what is acceptable.
pub struct Cli {
    /// Number of generations to compute after the starting state
    #[arg(short = 'n', long, default_value = DEFAULT_STEPS, allow_hyphen_values = true)]
    pub steps: String,

    /// Transition rule in S<survive digits>B<birth digits> notation
    #[arg(short, long, default_value = DEFAULT_RULE_STRING)]
    pub rule_string: String,

    /// Preset name, "random_choice" for a random preset, or "randomize" for a random grid
    #[arg(short = 'c', long, default_value = DEFAULT_START_CHOICE)]
    pub start_choice: String,

    /// Probability in [0, 1] that each cell updates per step
    #[arg(short, long, default_value = DEFAULT_UPDATE_RATE, allow_hyphen_values = true)]
    pub update_rate: String,

    /// Random seed for reproducible runs, or "none"
    #[arg(short, long, default_value = DEFAULT_SEED, allow_hyphen_values = true)]
    pub seed: String,

    /// Pause between generations in seconds (must exceed 0.01)
    #[arg(short = 't', long, default_value = DEFAULT_SECONDS_PER_STEP, allow_hyphen_values = true)]
    pub seconds_per_step: String,

    /// Width of a randomized starting grid
    #[arg(short = 'W', long, default_value_t = DEFAULT_RANDOM_WIDTH)]
    pub width: usize,

    /// Height of a randomized starting grid
    #[arg(short = 'H', long, default_value_t = DEFAULT_RANDOM_HEIGHT)]
    pub height: usize,

    /// Probability that each cell of a randomized grid starts alive
    #[arg(short, long, default_value_t = DEFAULT_ALIVE_PROBABILITY)]
    pub alive_probability: f64,

    /// Print frames one after another instead of redrawing in place
    #[arg(short, long)]
    pub plain: bool,

    /// Record every generation to an animated GIF
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// List available presets and exit
    #[arg(short, long)]
    pub list_presets: bool,
}

impl Cli {
    /// Simulation parameters in the form the validator expects
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            steps: self.steps.clone(),
            rule_string: self.rule_string.clone(),
            start_choice: self.start_choice.clone(),
            update_rate: self.update_rate.clone(),
            seed: self.seed.clone(),
            seconds_per_step: self.seconds_per_step.clone(),
        }
    }

    /// Settings for a randomized starting grid
    pub const fn random_spec(&self) -> RandomGridSpec {
        RandomGridSpec {
            width: self.width,
            height: self.height,
            alive_probability: self.alive_probability,
        }
    }
}

/// Orchestrates validation, start-state selection and the run loop
pub struct Simulation {
    cli: Cli,
}

impl Simulation {
    /// Create a simulation from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate all inputs, then run to completion
    ///
    /// Nothing is rendered unless every input is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, start-state construction, rendering or
    /// recording fails
    pub fn run(&self) -> Result<()> {
        let random_spec = self.cli.random_spec();
        random_spec.validate()?;
        let registry = default_registry(random_spec);

        if self.cli.list_presets {
            let mut stdout = std::io::stdout().lock();
            for name in registry.valid_choices() {
                writeln!(stdout, "{name}")?;
            }
            return Ok(());
        }

        let validated = validate_inputs(&self.cli.raw_inputs(), &registry)?;
        for warning in &validated.warnings {
            warn!(%warning, "suspicious input");
        }
        let config = validated.value;

        let mut rng = config.seed.into_rng();
        let start = registry.start(&config.start, &mut rng)?;

        info!(
            rule = %config.rule,
            start = %config.start,
            seed = %config.seed,
            steps = config.steps,
            update_rate = config.update_rate,
            rows = start.nrows(),
            cols = start.ncols(),
            "starting simulation"
        );

        let mut display = FrameDisplay::for_stdout(config.steps, self.cli.plain);
        let mut recorder = self
            .cli
            .record
            .as_ref()
            .map(|_| GenerationRecorder::new(GIF_CELL_SCALE, config.steps.saturating_add(1)));

        simulate(
            &config,
            &start,
            &mut rng,
            &SymbolSet::default(),
            &mut display,
            recorder.as_mut(),
        )?;
        display.finish();

        if let (Some(path), Some(recorder)) = (&self.cli.record, &recorder) {
            let delay_ms = config.frame_delay.as_millis().min(u128::from(u32::MAX)) as u32;
            recorder.export_gif(path, delay_ms)?;
            info!(path = %path.display(), frames = recorder.frame_count(), "recording saved");
        }

        Ok(())
    }
}

/// Step an automaton from `start`, showing every generation including the first
///
/// Sleeps for `config.frame_delay` between generations. Returns the final grid.
///
/// # Errors
///
/// Returns an error if the start grid fails normalization, a step fails, or
/// the display cannot be written
pub fn simulate<W: Write>(
    config: &SimulationConfig,
    start: &Grid,
    rng: &mut dyn RngCore,
    symbols: &SymbolSet,
    display: &mut FrameDisplay<W>,
    mut recorder: Option<&mut GenerationRecorder>,
) -> Result<Grid> {
    let mut automaton = CellularAutomaton::new(start, config.rule.clone())?
        .with_update_rate(config.update_rate, Some(rng))?;

    for generation in 0..=config.steps {
        if generation > 0 {
            std::thread::sleep(config.frame_delay);
            automaton.step()?;
        }

        display.show(
            automaton.generation(),
            automaton.population(),
            &render_grid(automaton.grid(), symbols),
        )?;

        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(automaton.grid())?;
        }
    }

    Ok(automaton.grid().clone())
}
