#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::level::*;
    use crate::state::LevelSnapshot;
    use crate::types::{Aabb, Position, SimTime, Velocity};

    const SAMPLE_LEVEL: &str = r#"{
        "player": {
            "left_hand": { "type": "hand", "projectile": "none", "force": 0, "durability": -1, "cooldown": 0 },
            "right_hand": { "type": "gun", "projectile": "laser", "force": 40, "durability": 10, "cooldown": 0.35 },
            "health": 50,
            "position": { "x": 0, "y": 0, "z": 0 }
        },
        "environment": { "time": 0.25, "duration": 120 },
        "ui": { "returnButtonOffset": { "x": 0, "y": -0.5, "z": 2 } },
        "waves": [
            {
                "waveNumber": 1,
                "enemies": [
                    {
                        "type": "copper",
                        "health": 1,
                        "position": { "x": -2, "y": 3, "z": 8 },
                        "score": 10,
                        "bonus": { "type": "score", "score": 15 },
                        "behaviours": [
                            { "type": "floating", "force": 0.08, "oscillationFreq": 0.5 },
                            { "type": "moveAtoB", "force": 8, "radius": 1,
                              "pointA": { "x": -4, "y": 3, "z": 8 },
                              "pointB": { "x": 4, "y": 3, "z": 8 } }
                        ]
                    },
                    {
                        "type": "pigeonBoss",
                        "health": 3,
                        "position": { "x": 0, "y": 4, "z": 12 },
                        "score": 50,
                        "behaviours": [ { "type": "rush", "force": 12 } ]
                    }
                ]
            }
        ]
    }"#;

    /// The level format is fixed: snake_case hand keys, camelCase
    /// everything else, and the capitalized Egg tag.
    #[test]
    fn test_level_document_parses() {
        let level = parse_level(SAMPLE_LEVEL).unwrap();

        assert_eq!(level.player.health, 50);
        let right = level.player.right_hand.as_ref().unwrap();
        assert_eq!(right.kind, WeaponKind::Gun);
        assert_eq!(right.projectile, Some(ProjectileKind::Laser));
        assert_eq!(right.durability, 10);

        assert_eq!(level.waves.len(), 1);
        let wave = &level.waves[0];
        assert_eq!(wave.wave_number, Some(1));
        assert_eq!(wave.enemies.len(), 2);

        let copper = &wave.enemies[0];
        assert_eq!(copper.kind, EnemyKind::Copper);
        assert!(matches!(copper.bonus, Some(BonusData::Score { score: 15 })));
        assert_eq!(copper.behaviours.len(), 2);
        match &copper.behaviours[1] {
            BehaviourData::MoveAtoB { force, point_a, point_b, .. } => {
                assert_eq!(*force, 8.0);
                assert_eq!(point_a.to_vec3(), Vec3::new(-4.0, 3.0, 8.0));
                assert_eq!(point_b.to_vec3(), Vec3::new(4.0, 3.0, 8.0));
            }
            other => panic!("expected moveAtoB, got {other:?}"),
        }

        let boss = &wave.enemies[1];
        assert_eq!(boss.kind, EnemyKind::PigeonBoss);
        assert_eq!(boss.health, 3);
        assert!(boss.bonus.is_none());
    }

    #[test]
    fn test_level_document_defaults() {
        let level = parse_level(
            r#"{ "player": { "health": 20 }, "waves": [] }"#,
        )
        .unwrap();
        assert!(level.player.left_hand.is_none());
        assert!(level.player.right_hand.is_none());
        assert_eq!(level.environment.duration, 120.0);
        assert_eq!(level.ui.return_button_offset.to_vec3(), Vec3::ZERO);

        // Omitted bonus fields fall back to the stock values.
        let bonus: BonusData = serde_json::from_str(r#"{ "type": "time" }"#).unwrap();
        match bonus {
            BonusData::Time { duration, speed_ratio } => {
                assert_eq!(duration, 6.0);
                assert_eq!(speed_ratio, 0.5);
            }
            other => panic!("expected time bonus, got {other:?}"),
        }
    }

    #[test]
    fn test_level_parse_failure_is_invalid_data() {
        let err = parse_level("{ not json").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    /// Wire tags are part of the level format and must not drift.
    #[test]
    fn test_projectile_kind_tags() {
        assert_eq!(serde_json::to_string(&ProjectileKind::Egg).unwrap(), "\"Egg\"");
        assert_eq!(
            serde_json::to_string(&ProjectileKind::ChaosBall).unwrap(),
            "\"chaosBall\""
        );
        assert_eq!(serde_json::to_string(&ProjectileKind::Ball).unwrap(), "\"ball\"");
        let back: ProjectileKind = serde_json::from_str("\"Egg\"").unwrap();
        assert_eq!(back, ProjectileKind::Egg);
    }

    #[test]
    fn test_enemy_kind_tags() {
        assert_eq!(
            serde_json::to_string(&EnemyKind::PigeonBoss).unwrap(),
            "\"pigeonBoss\""
        );
        assert_eq!(
            serde_json::to_string(&EnemyKind::PigeonShooter).unwrap(),
            "\"pigeonShooter\""
        );
        assert!(EnemyKind::Gold.is_balloon());
        assert!(!EnemyKind::PigeonDropper.is_balloon());
    }

    #[test]
    fn test_weapon_kind_tags() {
        assert_eq!(
            serde_json::to_string(&WeaponKind::GatlingGun).unwrap(),
            "\"gatlingGun\""
        );
        assert_eq!(
            serde_json::to_string(&WeaponKind::BoomerangLauncher).unwrap(),
            "\"boomerangLauncher\""
        );
        assert!(WeaponKind::Gun.is_trigger_weapon());
        assert!(!WeaponKind::Hand.is_trigger_weapon());
        assert!(!WeaponKind::None.is_trigger_weapon());
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::ReturnToMenu,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::LoadLevel {
                level: parse_level(SAMPLE_LEVEL).unwrap(),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify LevelSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = LevelSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LevelSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::new(Vec3::new(1.5, 0.0, 0.0), Vec3::splat(1.0));
        let c = Aabb::new(Vec3::new(3.5, 0.0, 0.0), Vec3::splat(1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        // Touching faces count as overlap.
        let d = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(1.0));
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_aabb_padding_and_closest_point() {
        let base = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let padded = base.padded(0.5);
        assert_eq!(padded.half_extents, Vec3::splat(1.5));
        assert_eq!(padded.center, base.center);

        let outside = Vec3::new(5.0, 0.5, 0.0);
        assert_eq!(base.closest_point(outside), Vec3::new(1.0, 0.5, 0.0));
        let inside = Vec3::new(0.2, -0.3, 0.9);
        assert_eq!(base.closest_point(inside), inside);
    }

    #[test]
    fn test_position_and_velocity() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);

        let v = Velocity::new(3.0, 4.0, 0.0);
        assert!((v.speed() - 5.0).abs() < 1e-6);
    }

    /// The scaled and raw clocks advance independently.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(0.5 / 60.0, 1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 0.5).abs() < 1e-4);
        assert!((time.raw_secs - 1.0).abs() < 1e-4);
    }
}
