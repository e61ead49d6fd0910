//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `LevelSnapshot`s. Completely headless
//! (no windowing or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use popshot_core::commands::{InputFrame, PlayerCommand};
use popshot_core::constants::{MAX_FRAME_DT, PLAYER_BODY_DROP};
use popshot_core::enums::{GamePhase, HandSide, SoundCue, WeaponKind};
use popshot_core::events::{AudioEvent, GameEvent};
use popshot_core::level::LevelData;
use popshot_core::state::{LevelSnapshot, ScoreBoard};
use popshot_core::types::SimTime;

use crate::environment::DayCycle;
use crate::player::PlayerRig;
use crate::registry::ColliderRegistry;
use crate::sound::SoundLedger;
use crate::systems;
use crate::systems::wave_progress::{LevelOutcome, WaveTracker};
use crate::tasks::{DeferredTasks, TaskAction};
use crate::time_control::TimeControl;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_control: TimeControl,
    rng: ChaCha8Rng,
    next_actor_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    registry: ColliderRegistry,
    ledger: SoundLedger,
    tasks: DeferredTasks,
    day_cycle: DayCycle,
    tracker: Option<WaveTracker>,
    rig: Option<PlayerRig>,
    score: ScoreBoard,
    audio_events: Vec<AudioEvent>,
    game_events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Starts in
    /// the main menu with the menu theme playing.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_control: TimeControl::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_actor_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            registry: ColliderRegistry::new(),
            ledger: SoundLedger::new(),
            tasks: DeferredTasks::new(),
            day_cycle: DayCycle::default(),
            tracker: None,
            rig: None,
            score: ScoreBoard::default(),
            audio_events: Vec::new(),
            game_events: Vec::new(),
        };
        engine.audio_events.push(AudioEvent::MusicStart {
            cue: SoundCue::MenuTheme,
        });
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. `raw_dt` is the frame delta in wall-clock seconds; it is
    /// clamped, then scaled by the time controller for everything that
    /// respects slow motion.
    pub fn tick(&mut self, input: &InputFrame, raw_dt: f32) -> LevelSnapshot {
        let raw_dt = raw_dt.clamp(0.0, MAX_FRAME_DT);
        self.process_commands();

        self.time_control.advance();
        let dt = self.time_control.scaled(raw_dt);

        if let Some(rig) = self.rig.as_mut() {
            rig.apply_input(input, raw_dt);
        }

        if self.phase == GamePhase::Active {
            self.run_systems(input, raw_dt, dt);
            self.time.advance(dt, raw_dt);
        }

        for action in self.tasks.run_due(self.time.raw_secs) {
            self.apply_task(action);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let game_events = std::mem::take(&mut self.game_events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.time_control.scale(),
            &self.day_cycle,
            self.tracker.as_ref(),
            &self.score,
            self.rig.as_ref(),
            audio_events,
            game_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current eased time factor.
    pub fn time_scale(&self) -> f32 {
        self.time_control.scale()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    #[cfg(test)]
    pub fn registry(&self) -> &ColliderRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn ledger(&self) -> &SoundLedger {
        &self.ledger
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &DeferredTasks {
        &self.tasks
    }

    #[cfg(test)]
    pub fn rig(&self) -> Option<&PlayerRig> {
        self.rig.as_ref()
    }

    #[cfg(test)]
    pub fn rig_mut(&mut self) -> Option<&mut PlayerRig> {
        self.rig.as_mut()
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::LoadLevel { level } => self.load_level(level),
            PlayerCommand::ReturnToMenu => {
                if self.phase == GamePhase::Active {
                    self.teardown_level();
                }
                if self.phase != GamePhase::MainMenu {
                    self.phase = GamePhase::MainMenu;
                    self.audio_events.push(AudioEvent::MusicStart {
                        cue: SoundCue::MenuTheme,
                    });
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.time_control.pause();
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Active {
                    self.time_control.resume();
                }
            }
        }
    }

    /// Validate and start a level. A document that fails validation is
    /// rejected wholesale and whatever was running stays running.
    fn load_level(&mut self, level: LevelData) {
        if let Err(error) = world_setup::validate_level(&level) {
            warn!("level rejected: {}", error);
            self.game_events.push(GameEvent::LevelRejected {
                reason: error.to_string(),
            });
            return;
        }
        if self.phase == GamePhase::Active {
            self.teardown_level();
        }
        self.setup_level(level);
    }

    fn setup_level(&mut self, level: LevelData) {
        self.time = SimTime::default();
        self.time_control = TimeControl::new();
        self.score = ScoreBoard::default();
        self.day_cycle = DayCycle::from_data(&level.environment);

        self.audio_events.push(AudioEvent::MusicStop);
        self.audio_events.push(AudioEvent::MusicStart {
            cue: SoundCue::LevelMusic,
        });

        let base = level.player.position.to_vec3();
        let mut rig = PlayerRig::new(level.player.health, base);

        for (side, data) in [
            (HandSide::Left, &level.player.left_hand),
            (HandSide::Right, &level.player.right_hand),
        ] {
            let Some(weapon_data) = data else { continue };
            // Vetted by validate_level; a failure here would be a
            // validator bug.
            if let Ok(Some(mut weapon)) = world_setup::create_weapon(weapon_data) {
                weapon.grabbed = true;
                if weapon.kind != WeaponKind::Hand {
                    weapon.fire_cue = Some(self.ledger.allocate());
                }
                let slot = rig.hand_mut(side);
                slot.weapon = Some(weapon);
                slot.sampler.reset(slot.position);
            }
        }

        let (head, body) = world_setup::spawn_player_colliders(
            &mut self.world,
            &mut self.registry,
            &mut self.next_actor_id,
            rig.head_position,
        );
        rig.head_entity = Some(head);
        rig.body_entity = Some(body);
        rig.hit_cue = Some(self.ledger.allocate());

        world_setup::spawn_walls(&mut self.world, &mut self.registry, &mut self.next_actor_id);

        // The button sits on the floor next to the player spawn.
        let button_at =
            Vec3::new(base.x, 0.0, base.z) + level.ui.return_button_offset.to_vec3();
        world_setup::spawn_return_button(
            &mut self.world,
            &mut self.registry,
            &mut self.next_actor_id,
            button_at,
        );

        rig.controllers_visible = rig.both_hands_empty();
        self.game_events.push(GameEvent::ControllersVisible {
            visible: rig.controllers_visible,
        });

        self.tracker = Some(WaveTracker::new(level.waves));
        self.rig = Some(rig);
        self.phase = GamePhase::Active;
    }

    /// Discard all level state. Pending deferred work runs now, every
    /// sound instance is released, and the world empties, so nothing
    /// outlives the level.
    fn teardown_level(&mut self) {
        for action in self.tasks.flush() {
            self.apply_task(action);
        }

        if let Some(mut rig) = self.rig.take() {
            for slot in [&mut rig.left, &mut rig.right] {
                if let Some(weapon) = slot.weapon.take() {
                    if let Some(cue) = weapon.fire_cue {
                        self.ledger.release(cue, &mut self.audio_events);
                    }
                }
            }
            if let Some(cue) = rig.hit_cue.take() {
                self.ledger.release(cue, &mut self.audio_events);
            }
        }
        self.tracker = None;

        self.world.clear();
        self.registry.clear();
        self.ledger.drain(&mut self.audio_events);
        self.time_control = TimeControl::new();

        self.audio_events.push(AudioEvent::MusicStop);
        self.game_events.push(GameEvent::ControllersVisible { visible: true });
    }

    fn apply_task(&mut self, action: TaskAction) {
        match action {
            TaskAction::ReleaseSound(sound) => {
                self.ledger.release(sound, &mut self.audio_events);
            }
            TaskAction::RestoreTimeScale => self.time_control.end_slow_motion(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputFrame, raw_dt: f32, dt: f32) {
        let (player_head, player_body) = match self.rig.as_ref() {
            Some(rig) => (
                rig.head_position,
                rig.head_position - Vec3::new(0.0, PLAYER_BODY_DROP, 0.0),
            ),
            None => (Vec3::ZERO, Vec3::ZERO),
        };

        self.day_cycle.advance(dt);

        // 1. Steering forces
        systems::steering::run(&mut self.world, dt, player_head, &mut self.rng);
        // 2. Kinematic integration
        systems::movement::run(&mut self.world, dt);
        // 3. Curve and weave trajectory shaping
        systems::flight::run(&mut self.world, dt);
        // 4. Pigeon heads and egg launches
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.registry,
            &mut self.ledger,
            &mut self.tasks,
            &mut self.rng,
            &mut self.next_actor_id,
            dt,
            self.time.raw_secs,
            player_head,
            player_body,
            &mut self.audio_events,
            &mut self.game_events,
        );
        // 5. Player weapons (raw clock)
        if let Some(rig) = self.rig.as_mut() {
            systems::weapons::run(
                &mut self.world,
                &mut self.registry,
                &mut self.ledger,
                rig,
                input,
                &mut self.rng,
                &mut self.next_actor_id,
                raw_dt,
                self.time_control.is_paused(),
                &mut self.score,
                &mut self.audio_events,
                &mut self.game_events,
            );
        }
        // 6. Bonus trailing and spin
        systems::bonus::run(&mut self.world, dt);
        // 7. Projectile contacts
        if let Some(rig) = self.rig.as_mut() {
            systems::collision::run(
                &mut self.world,
                &mut self.registry,
                &mut self.ledger,
                &mut self.tasks,
                &mut self.time_control,
                rig,
                &mut self.score,
                self.time.raw_secs,
                &mut self.audio_events,
                &mut self.game_events,
            );
        }
        // 8. Projectile floor and age expiry
        systems::lifetime::run(&mut self.world, &mut self.registry);
        // 9. Wave clear detection, win/lose decision
        let outcome = match (self.tracker.as_mut(), self.rig.as_ref()) {
            (Some(tracker), Some(rig)) => systems::wave_progress::run(
                &mut self.world,
                &mut self.registry,
                &mut self.rng,
                &mut self.next_actor_id,
                tracker,
                rig,
                &mut self.game_events,
            ),
            _ => LevelOutcome::Continue,
        };
        // 10. Despawn everything retired this tick
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        match outcome {
            LevelOutcome::Continue => {}
            LevelOutcome::Won => self.finish_level(GamePhase::Won, SoundCue::Victory),
            LevelOutcome::Lost => self.finish_level(GamePhase::Lost, SoundCue::Defeat),
        }
    }

    /// Leave the active phase for a result screen. Level state is torn
    /// down immediately; the scoreboard survives for display.
    fn finish_level(&mut self, phase: GamePhase, jingle: SoundCue) {
        self.phase = phase;
        self.teardown_level();
        self.audio_events.push(AudioEvent::MusicStart { cue: jingle });
    }
}
