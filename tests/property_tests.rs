//! Property-based tests for greywolf
//!
//! Uses proptest to verify invariants and properties of the library.

use greywolf::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    // ==================== Source Properties ====================

    #[test]
    fn uniform_source_stays_in_unit_interval(seed in any::<u64>()) {
        let mut source = UniformSource::seeded(seed);
        for _ in 0..200 {
            let v = source.draw();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn chaotic_source_never_degenerates(seed in any::<u64>(), draws in 1usize..2000) {
        let mut source = ChaoticSource::seeded(seed);
        for _ in 0..draws {
            let v = source.draw();
            prop_assert!(v > 0.0 && v <= 1.0);
        }
    }

    #[test]
    fn chaotic_reseed_lands_inside_the_map_image(
        seed in any::<u64>(),
        state in prop_oneof![0.0..9.0e-7, (1.0 - 9.0e-7)..1.0],
    ) {
        // A degenerate state is reseeded into (0.1, 0.9) before mapping, so
        // the next value lies in [4 * 0.1 * 0.9, 1].
        let mut source = ChaoticSource::with_state(state, StdRng::seed_from_u64(seed));
        let v = source.draw();
        prop_assert!(v >= 0.36 && v <= 1.0);
    }

    // ==================== Bounds Properties ====================

    #[test]
    fn bounds_samples_stay_inside_the_box(
        seed in any::<u64>(),
        min in -100.0f64..100.0,
        width in 0.1f64..50.0,
    ) {
        let bounds = Bounds::new(min, min + width).unwrap();
        let mut source = UniformSource::seeded(seed);
        for _ in 0..100 {
            prop_assert!(bounds.contains(bounds.sample(&mut source)));
        }
    }

    // ==================== Hunt Properties ====================

    #[test]
    fn hunt_returns_the_configured_dimension(
        seed in any::<u64>(),
        vector_size in 1usize..6,
        pack_size in 3usize..8,
        iterations in 1usize..10,
    ) {
        let config = GwoConfig::new(iterations, pack_size, vector_size);
        let mut gwo =
            ConventionalGwo::seeded(config, Sphere::new(vector_size), seed).unwrap();
        let result = gwo.hunt().unwrap();

        prop_assert_eq!(result.best_position.len(), vector_size);
        prop_assert!(result.best_fitness.is_finite());
        prop_assert!(result.best_fitness >= 0.0);
    }

    #[test]
    fn best_fitness_never_worsens_across_iterations(
        seed in any::<u64>(),
        chaotic in any::<bool>(),
    ) {
        let config = GwoConfig::new(15, 6, 3);
        let mut reports: Vec<f64> = Vec::new();
        let result = if chaotic {
            ChaoticGwo::seeded(config, Sphere::new(3), seed)
                .unwrap()
                .hunt_with_progress(|p| reports.push(p.best_fitness))
                .unwrap()
        } else {
            ConventionalGwo::seeded(config, Sphere::new(3), seed)
                .unwrap()
                .hunt_with_progress(|p| reports.push(p.best_fitness))
                .unwrap()
        };

        for pair in reports.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
        prop_assert!(result.best_fitness <= *reports.last().unwrap());
    }

    #[test]
    fn seeded_hunts_are_reproducible(seed in any::<u64>()) {
        let config = GwoConfig::new(10, 5, 2);
        let mut first =
            ConventionalGwo::seeded(config.clone(), Sphere::new(2), seed).unwrap();
        let mut second = ConventionalGwo::seeded(config, Sphere::new(2), seed).unwrap();

        prop_assert_eq!(first.hunt().unwrap(), second.hunt().unwrap());
    }

    #[test]
    fn multimodal_hunts_stay_above_the_optimum(seed in any::<u64>()) {
        let config = GwoConfig::new(10, 6, 2).with_bounds(Bounds::symmetric(5.12).unwrap());
        let mut gwo = ConventionalGwo::seeded(config, Rastrigin::new(2), seed).unwrap();
        let result = gwo.hunt().unwrap();

        prop_assert!(result.best_fitness >= 0.0);
        prop_assert_eq!(result.best_position.len(), 2);
    }

    // ==================== Construction Properties ====================

    #[test]
    fn undersized_packs_are_rejected(pack_size in 0usize..3) {
        let config = GwoConfig::new(5, pack_size, 2);
        let result = ConventionalGwo::seeded(config, Sphere::new(2), 0);
        prop_assert!(matches!(
            result,
            Err(GwoError::Config(ConfigError::PackSize(_)))
        ));
    }

    #[test]
    fn inverted_bounds_are_rejected(min in -10.0f64..10.0, below in 0.1f64..5.0) {
        prop_assert!(Bounds::new(min, min - below).is_err());
    }
}
