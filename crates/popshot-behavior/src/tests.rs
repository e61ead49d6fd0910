#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use popshot_core::constants::*;
    use popshot_core::enums::{EnemyKind, ProjectileKind, WeaponKind};
    use popshot_core::level::{BehaviourData, Vec3Data};
    use popshot_core::types::Aabb;

    use crate::profiles::{enemy_profile, projectile_profile, weapon_accepts, EggDelivery, FlightStyle};
    use crate::steering::{Steering, SteeringContext};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn make_context<'a>(
        position: Vec3,
        enemies: &'a [Vec3],
        obstacles: &'a [Aabb],
    ) -> SteeringContext<'a> {
        SteeringContext {
            position,
            velocity: Vec3::ZERO,
            player_eye: Vec3::new(0.0, 1.7, 0.0),
            enemies,
            obstacles,
        }
    }

    #[test]
    fn test_gravity_scales_with_dt() {
        let mut rng = rng();
        let ctx = make_context(Vec3::ZERO, &[], &[]);
        let mut behavior = Steering::Gravity { force: 9.81 };
        let f = behavior.force(0.5, &ctx, &mut rng);
        assert_eq!(f, Vec3::new(0.0, -9.81 * 0.5, 0.0));
    }

    #[test]
    fn test_floating_oscillates_vertically() {
        let mut rng = rng();
        let ctx = make_context(Vec3::ZERO, &[], &[]);
        let mut behavior = Steering::Floating {
            force: 0.08,
            oscillation_freq: 0.5,
            phase: 0.0,
            elapsed: 0.0,
        };
        // Collect half a period worth of samples; the sign must flip.
        let mut saw_positive = false;
        let mut saw_negative = false;
        for _ in 0..240 {
            let f = behavior.force(1.0 / 60.0, &ctx, &mut rng);
            assert_eq!(f.x, 0.0);
            assert_eq!(f.z, 0.0);
            assert!(f.y.abs() <= 0.08 + 1e-6);
            if f.y > 0.01 {
                saw_positive = true;
            }
            if f.y < -0.01 {
                saw_negative = true;
            }
        }
        assert!(saw_positive && saw_negative, "bob should cross zero");
    }

    #[test]
    fn test_attract_picks_nearest_within_radius() {
        let mut rng = rng();
        let enemies = [Vec3::new(5.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
        let ctx = make_context(Vec3::ZERO, &enemies, &[]);
        let mut behavior = Steering::AttractEnemy { force: 3.0, radius: 10.0 };
        let f = behavior.force(1.0 / 60.0, &ctx, &mut rng);
        // Pulls toward the enemy at x=2, not the farther one.
        assert!(f.x > 0.0);
        assert!((f.length() - 3.0).abs() < 1e-5);

        let far_enemies = [Vec3::new(50.0, 0.0, 0.0)];
        let ctx = make_context(Vec3::ZERO, &far_enemies, &[]);
        let f = behavior.force(1.0 / 60.0, &ctx, &mut rng);
        assert_eq!(f, Vec3::ZERO);
    }

    #[test]
    fn test_avoid_pushes_away_from_near_obstacle() {
        let mut rng = rng();
        let obstacles = [Aabb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(1.0))];
        let ctx = make_context(Vec3::ZERO, &[], &obstacles);
        let mut behavior = Steering::AvoidObstacles { force: 5.0, radius: 4.0 };
        let f = behavior.force(1.0 / 60.0, &ctx, &mut rng);
        // Net push points away from the box (negative x), deflected but
        // never toward it.
        assert!(f.x < 0.0, "expected repulsion, got {f:?}");

        // Out of radius: nothing.
        let ctx = make_context(Vec3::new(-10.0, 0.0, 0.0), &[], &obstacles);
        assert_eq!(behavior.force(1.0 / 60.0, &ctx, &mut rng), Vec3::ZERO);
    }

    #[test]
    fn test_avoid_magnitude_grows_as_distance_shrinks() {
        let mut rng = rng();
        let obstacles = [Aabb::new(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(1.0))];
        let mut behavior = Steering::AvoidObstacles { force: 5.0, radius: 6.0 };

        let near = make_context(Vec3::new(3.0, 0.0, 0.0), &[], &obstacles);
        let far = make_context(Vec3::new(1.0, 0.0, 0.0), &[], &obstacles);
        let f_near = behavior.force(1.0 / 60.0, &near, &mut rng);
        let f_far = behavior.force(1.0 / 60.0, &far, &mut rng);
        assert!(f_near.length() > f_far.length());
    }

    #[test]
    fn test_move_a_to_b_swaps_target_on_arrival() {
        let mut rng = rng();
        let a = Vec3::new(-4.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 0.0);
        let mut behavior = Steering::MoveAtoB {
            force: 10.0,
            switch_radius: 1.0,
            point_a: a,
            point_b: b,
            seeking_b: false,
        };

        // Standing right on A: the target flips to B and the force
        // points toward it.
        let ctx = make_context(a, &[], &[]);
        let f = behavior.force(1.0 / 60.0, &ctx, &mut rng);
        assert!(f.x > 0.0, "should now head for B, got {f:?}");
        match behavior {
            Steering::MoveAtoB { seeking_b, .. } => assert!(seeking_b),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_move_a_to_b_decelerating_arrival() {
        let mut rng = rng();
        let a = Vec3::new(-100.0, 0.0, 0.0);
        let b = Vec3::new(100.0, 0.0, 0.0);
        let mut behavior = Steering::MoveAtoB {
            force: 10.0,
            switch_radius: 1.0,
            point_a: a,
            point_b: b,
            seeking_b: false,
        };
        // Force is proportional to distance-to-target over the divisor.
        let near = make_context(Vec3::new(-90.0, 0.0, 0.0), &[], &[]);
        let far = make_context(Vec3::new(90.0, 0.0, 0.0), &[], &[]);
        let f_near = behavior.force(1.0 / 60.0, &near, &mut rng).length();
        let f_far = behavior.force(1.0 / 60.0, &far, &mut rng).length();
        assert!((f_near - 10.0 * (10.0 / PATROL_ARRIVAL_DIVISOR)).abs() < 1e-4);
        assert!((f_far - 10.0 * (190.0 / PATROL_ARRIVAL_DIVISOR)).abs() < 1e-3);
    }

    #[test]
    fn test_wander_retargets_on_interval() {
        let mut rng = rng();
        let min = Vec3::new(-5.0, 0.0, -5.0);
        let max = Vec3::new(5.0, 4.0, 5.0);
        let mut behavior = Steering::from_data(
            &BehaviourData::MoveFreelyInCube {
                force: 6.0,
                radius: 1.0,
                min_position: Vec3Data::new(min.x, min.y, min.z),
                max_position: Vec3Data::new(max.x, max.y, max.z),
            },
            &mut rng,
        );
        let initial_target = match &behavior {
            Steering::MoveFreelyInCube { target, .. } => *target,
            _ => unreachable!(),
        };
        assert!(initial_target.cmpge(min).all() && initial_target.cmple(max).all());

        // Cross the retarget interval.
        let ctx = make_context(Vec3::ZERO, &[], &[]);
        let ticks = (WANDER_RETARGET_SECS * 60.0) as usize + 1;
        for _ in 0..ticks {
            behavior.force(1.0 / 60.0, &ctx, &mut rng);
        }
        let new_target = match &behavior {
            Steering::MoveFreelyInCube { target, .. } => *target,
            _ => unreachable!(),
        };
        assert_ne!(initial_target, new_target);
    }

    #[test]
    fn test_rush_alternates_loiter_and_dash() {
        let mut rng = rng();
        let ctx = make_context(Vec3::new(0.0, 1.7, 10.0), &[], &[]);
        let mut behavior = Steering::Rush {
            force: 8.0,
            loiter: true,
            since_switch: 0.0,
            next_switch: 1.0,
        };
        let dt = 1.0 / 60.0;

        // Drive past the switch time; the behavior must flip to rushing.
        for _ in 0..70 {
            behavior.force(dt, &ctx, &mut rng);
        }
        let rushing = match &behavior {
            Steering::Rush { loiter, .. } => !*loiter,
            _ => unreachable!(),
        };
        assert!(rushing, "should have switched out of loiter");

        // While rushing, force points at the player eye at double strength.
        let f = behavior.force(dt, &ctx, &mut rng);
        let expected_dir = (ctx.player_eye - ctx.position).normalize();
        let cos = f.normalize().dot(expected_dir);
        assert!(cos > 0.999, "rush should aim at the player, cos={cos}");
        assert!((f.length() - 8.0 * RUSH_FORCE_FACTOR * dt).abs() < 1e-5);
    }

    #[test]
    fn test_from_data_randomizes_floating_phase() {
        let mut rng = rng();
        let data = BehaviourData::Floating { force: 0.08, oscillation_freq: 0.5 };
        let a = Steering::from_data(&data, &mut rng);
        let b = Steering::from_data(&data, &mut rng);
        let (pa, pb) = match (a, b) {
            (
                Steering::Floating { phase: pa, .. },
                Steering::Floating { phase: pb, .. },
            ) => (pa, pb),
            _ => unreachable!(),
        };
        assert_ne!(pa, pb);
    }

    #[test]
    fn test_enemy_profiles() {
        assert!(enemy_profile(EnemyKind::Copper).half_extents.x
            > enemy_profile(EnemyKind::Gold).half_extents.x);
        assert!(!enemy_profile(EnemyKind::Silver).tracks_player);
        assert!(enemy_profile(EnemyKind::Pigeon).tracks_player);
        assert_eq!(
            enemy_profile(EnemyKind::PigeonShooter).egg_delivery,
            Some(EggDelivery::Aimed)
        );
        assert_eq!(
            enemy_profile(EnemyKind::PigeonDropper).egg_delivery,
            Some(EggDelivery::Dropped)
        );
        assert!(enemy_profile(EnemyKind::PigeonBoss).egg_delivery.is_none());
    }

    #[test]
    fn test_projectile_profiles() {
        let ball = projectile_profile(ProjectileKind::Ball);
        assert_eq!(ball.style, FlightStyle::Straight);
        assert!(ball.gravity_force > 0.0);

        let laser = projectile_profile(ProjectileKind::Laser);
        assert_eq!(laser.gravity_force, 0.0);
        assert_eq!(laser.max_speed, PROJECTILE_MAX_SPEED);
        assert_eq!(laser.lifetime_secs, PROJECTILE_MAX_LIFETIME);

        assert_eq!(projectile_profile(ProjectileKind::Boomerang).style, FlightStyle::Curve);
        assert_eq!(projectile_profile(ProjectileKind::Javelin).style, FlightStyle::Curve);
        assert_eq!(projectile_profile(ProjectileKind::Disc).style, FlightStyle::Weave);
        assert_eq!(
            projectile_profile(ProjectileKind::ChaosBall).style,
            FlightStyle::ChaosWeave
        );
        // The chaos ball's nominal gravity is zero force.
        assert_eq!(projectile_profile(ProjectileKind::ChaosBall).gravity_force, 0.0);
    }

    #[test]
    fn test_weapon_round_compatibility() {
        use ProjectileKind::*;
        // Gun family is restricted.
        assert!(weapon_accepts(WeaponKind::Gun, Some(Laser)));
        assert!(weapon_accepts(WeaponKind::Gun, Some(Boomerang)));
        assert!(!weapon_accepts(WeaponKind::Gun, Some(Disc)));
        assert!(!weapon_accepts(WeaponKind::Gun, Some(None)));
        assert!(!weapon_accepts(WeaponKind::Gun, Option::None));
        assert!(weapon_accepts(WeaponKind::GatlingGun, Some(Ball)));
        assert!(!weapon_accepts(WeaponKind::GatlingGun, Some(ChaosBall)));
        // Launchers take any real round.
        assert!(weapon_accepts(WeaponKind::DiscLauncher, Some(ChaosBall)));
        assert!(!weapon_accepts(WeaponKind::DiscLauncher, Some(None)));
        // Hands and empty slots ignore the field.
        assert!(weapon_accepts(WeaponKind::Hand, Option::None));
        assert!(weapon_accepts(WeaponKind::None, Some(Ball)));
    }
}
