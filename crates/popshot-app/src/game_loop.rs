//! Game loop thread: runs the simulation engine at 60Hz and streams
//! snapshots as JSON lines.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; per-tick input comes
//! from the autoplay script, so a run replays exactly from its seed.

use std::io::Write;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use popshot_core::commands::PlayerCommand;
use popshot_core::constants::{DT, TICK_RATE};
use popshot_core::enums::GamePhase;
use popshot_sim::engine::{SimConfig, SimulationEngine};

use crate::autoplay::AutoplayScript;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Ticks to keep streaming after a level resolves, so the result screen
/// and jingle reach the output before the loop exits.
const RESULT_GRACE_TICKS: u64 = 120;

/// Messages accepted by the loop thread.
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    Shutdown,
}

/// Loop parameters.
pub struct GameLoopConfig {
    pub seed: u64,
    /// Stop after this many ticks regardless of phase.
    pub max_ticks: Option<u64>,
    /// Skip real-time pacing; used by tests and batch runs.
    pub unpaced: bool,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_ticks: None,
            unpaced: false,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn(
    config: GameLoopConfig,
    writer: impl Write + Send + 'static,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("popshot-game-loop".into())
        .spawn(move || {
            run(config, cmd_rx, writer);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until a Shutdown command, channel disconnect,
/// the tick budget, or shortly after a level resolves.
pub fn run(
    config: GameLoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut writer: impl Write,
) {
    let mut engine = SimulationEngine::new(SimConfig { seed: config.seed });
    let script = AutoplayScript::new();
    let mut next_tick_time = Instant::now();
    let mut ticks: u64 = 0;
    let mut grace_left: Option<u64> = None;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick on scripted input
        let input = script.frame(ticks);
        let snapshot = engine.tick(&input, DT);
        ticks += 1;

        // 3. Stream the snapshot as one JSON line
        match serde_json::to_string(&snapshot) {
            Ok(line) => {
                if writeln!(writer, "{line}").is_err() {
                    // Reader hung up.
                    return;
                }
            }
            Err(err) => {
                log::warn!("Snapshot serialization failed: {err}");
                return;
            }
        }

        // 4. Wind down once a resolved level has shown its result
        match snapshot.phase {
            GamePhase::Won | GamePhase::Lost => {
                let left = grace_left.get_or_insert(RESULT_GRACE_TICKS);
                if *left == 0 {
                    log::info!(
                        "Level resolved as {:?} after {} ticks, score {}",
                        snapshot.phase,
                        ticks,
                        snapshot.score.score
                    );
                    return;
                }
                *left -= 1;
            }
            _ => grace_left = None,
        }

        if let Some(max) = config.max_ticks {
            if ticks >= max {
                return;
            }
        }

        // 5. Sleep until next tick. Slow motion stretches simulation time
        //    inside the engine, so wall pacing stays fixed.
        if config.unpaced {
            continue;
        }
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
