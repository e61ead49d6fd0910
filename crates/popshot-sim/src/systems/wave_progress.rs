//! Level progression: the lose check, wave clear detection, and wave
//! spawning.
//!
//! A wave counts as cleared when no live pigeon remains. Balloons never
//! gate progression, so a balloon-only wave opens the next wave on the
//! following tick while the balloons drift on.

use hecs::World;
use log::warn;
use rand_chacha::ChaCha8Rng;

use popshot_core::components::{EnemyInfo, Lifecycle};
use popshot_core::enums::LifeState;
use popshot_core::events::GameEvent;
use popshot_core::level::WaveData;

use crate::player::PlayerRig;
use crate::registry::ColliderRegistry;
use crate::world_setup;

/// Wave list and progress cursor for the running level.
#[derive(Debug, Clone, Default)]
pub struct WaveTracker {
    waves: Vec<WaveData>,
    /// Index of the next wave to start.
    next_index: usize,
}

impl WaveTracker {
    pub fn new(waves: Vec<WaveData>) -> Self {
        Self {
            waves,
            next_index: 0,
        }
    }

    /// Zero-based index of the wave currently in play. `None` before the
    /// first wave starts.
    pub fn current_wave(&self) -> Option<u32> {
        self.next_index.checked_sub(1).map(|index| index as u32)
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }
}

/// What the progression pass decided this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    Continue,
    Won,
    Lost,
}

/// Decide the level's fate for this tick. Defeat is checked before
/// victory, so a player who dies clearing the final wave still loses.
pub fn run(
    world: &mut World,
    registry: &mut ColliderRegistry,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    tracker: &mut WaveTracker,
    rig: &PlayerRig,
    events: &mut Vec<GameEvent>,
) -> LevelOutcome {
    if rig.is_dead() {
        events.push(GameEvent::LevelLost);
        return LevelOutcome::Lost;
    }

    if live_pigeon_count(world) > 0 {
        return LevelOutcome::Continue;
    }

    loop {
        if tracker.next_index >= tracker.waves.len() {
            events.push(GameEvent::LevelWon);
            return LevelOutcome::Won;
        }
        let wave = tracker.waves[tracker.next_index].clone();
        let wave_index = tracker.next_index as u32;
        tracker.next_index += 1;

        // A wave spawns whole or not at all. On a bad entry the wave is
        // skipped and the cursor moves on, leaving no partial spawn.
        if let Some(error) = wave
            .enemies
            .iter()
            .find_map(|enemy| world_setup::validate_enemy(enemy).err())
        {
            warn!("skipping wave {}: {}", wave_index, error);
            continue;
        }

        events.push(GameEvent::WaveStarted {
            wave: wave_index,
            enemy_count: wave.enemies.len() as u32,
        });
        for enemy in &wave.enemies {
            // Vetted above; a failure here would be a validator bug.
            let _ = world_setup::spawn_enemy(world, registry, rng, next_actor_id, enemy, events);
        }
        return LevelOutcome::Continue;
    }
}

fn live_pigeon_count(world: &mut World) -> usize {
    let mut count = 0;
    for (_entity, (info, lifecycle)) in world.query_mut::<(&EnemyInfo, &Lifecycle)>() {
        if lifecycle.state == LifeState::Live && info.kind.is_pigeon() {
            count += 1;
        }
    }
    count
}
