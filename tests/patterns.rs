mod tests {
    use sign_pattern_engine::{LED_COUNT, PatternId, Rgb, SignEngine, Zone};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn engine_at(id: PatternId) -> SignEngine {
        let mut engine = SignEngine::default();
        while engine.pattern() != id {
            engine.update_pattern();
        }
        engine
    }

    #[test]
    fn test_startup_ramps_from_black() {
        let mut engine = SignEngine::default();
        // Step 0 paints level zero: still black.
        assert!(engine.render().iter().all(|led| *led == BLACK));
        // Step 1 paints one unit of every zone color.
        let frame: Vec<Rgb> = engine.render().to_vec();
        assert_eq!(frame[0], engine.palette().unit(Zone::Violet));
        assert_eq!(frame[LED_COUNT - 1], engine.palette().unit(Zone::Cyan));
    }

    #[test]
    fn test_startup_freezes_at_full_ramp() {
        let mut engine = SignEngine::default();
        for _ in 0..20 {
            engine.render();
        }
        let frozen: Vec<Rgb> = engine.frame().to_vec();
        let expected = engine.palette().scaled(Zone::Violet, 13);
        assert_eq!(frozen[0], expected);

        // Further ticks leave the frame untouched.
        engine.render();
        assert_eq!(engine.frame(), frozen.as_slice());
    }

    #[test]
    fn test_wave_phase_zero_lights_outer_rings() {
        let mut engine = engine_at(PatternId::Wave);
        let frame: Vec<Rgb> = engine.render().to_vec();

        let violet = engine.palette().scaled(Zone::Violet, engine.brightness());
        let beige = engine.palette().scaled(Zone::Beige, engine.brightness());
        let cyan = engine.palette().scaled(Zone::Cyan, engine.brightness());

        assert_eq!(frame[0], violet);
        assert_eq!(frame[10], violet);
        assert_eq!(frame[11], BLACK); // first phase stops before 11
        assert_eq!(frame[237], beige);
        assert_eq!(frame[529], cyan);
        assert_eq!(frame[LED_COUNT - 1], cyan);
    }

    #[test]
    fn test_wave_phase_advances_with_delay() {
        let mut engine = engine_at(PatternId::Wave);
        // Delay 16: ticks 0..=15 stay in phase 0, tick 16 enters phase 1.
        for _ in 0..16 {
            engine.render();
        }
        let frame: Vec<Rgb> = engine.render().to_vec();
        let violet = engine.palette().scaled(Zone::Violet, engine.brightness());
        assert_eq!(frame[11], violet); // phase 1 singleton
        assert_eq!(frame[0], BLACK); // phase 0 span is out
    }

    #[test]
    fn test_switch_first_permutation_is_identity() {
        let mut engine = engine_at(PatternId::Switch);
        let frame: Vec<Rgb> = engine.render().to_vec();
        let brightness = engine.brightness();

        assert_eq!(frame[0], engine.palette().scaled(Zone::Violet, brightness));
        assert_eq!(frame[170], engine.palette().scaled(Zone::Beige, brightness));
        assert_eq!(frame[253], engine.palette().scaled(Zone::Yellow, brightness));
        assert_eq!(frame[369], engine.palette().scaled(Zone::Cyan, brightness));
        // Every pixel is painted; no black gaps in this mode.
        assert!(frame.iter().all(|led| *led != BLACK));
    }

    #[test]
    fn test_breathe_paints_one_uniform_level() {
        let mut engine = engine_at(PatternId::Breathe);
        let frame: Vec<Rgb> = engine.render().to_vec();

        // First up-ramp tick is level 1: exactly the unit colors.
        assert_eq!(frame[0], engine.palette().unit(Zone::Violet));
        assert_eq!(frame[LED_COUNT - 1], engine.palette().unit(Zone::Cyan));
        let (from, to) = Zone::Yellow.range();
        let yellow = engine.palette().unit(Zone::Yellow);
        assert!(frame[from..to].iter().all(|led| *led == yellow));
    }

    #[test]
    fn test_sparkle_is_deterministic() {
        let mut a = engine_at(PatternId::Sparkle);
        let mut b = engine_at(PatternId::Sparkle);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_sparkle_refill_bounds() {
        let mut engine = engine_at(PatternId::Sparkle);
        let frame: Vec<Rgb> = engine.render().to_vec();
        let lit = frame.iter().filter(|led| **led != BLACK).count();

        // At most one pixel per zone per draw; collisions only shrink
        // the count.
        let draws = usize::from(engine.sparkle_count()) + 1;
        assert!(lit >= 1);
        assert!(lit <= 4 * draws);
    }

    #[test]
    fn test_sparkle_zero_seed_lands_on_known_quirk_pixels() {
        let mut engine = engine_at(PatternId::Sparkle);
        // Step 0 seeds the generator with zero, which is a fixed point
        // of the xorshift: all zones draw index zero.
        let frame: Vec<Rgb> = engine.render().to_vec();
        let brightness = engine.brightness();

        assert_eq!(frame[0], engine.palette().scaled(Zone::Violet, brightness));
        assert_eq!(frame[170], engine.palette().scaled(Zone::Beige, brightness));
        // Yellow's off-by-one base: its zero draw lands on the last
        // beige pixel, not the first yellow one.
        assert_eq!(frame[252], engine.palette().scaled(Zone::Yellow, brightness));
        assert_eq!(frame[369], engine.palette().scaled(Zone::Cyan, brightness));
        assert_eq!(frame.iter().filter(|led| **led != BLACK).count(), 4);
    }

    #[test]
    fn test_sparkle_reseed_chain_scatters_known_pixels() {
        let mut engine = engine_at(PatternId::Sparkle);
        // Ticks 0..=7 cover the first refill and its hold; tick 8 refills
        // again, this time with a non-trivial seed, so every draw in the
        // chain is reseeded by the previous draw's clamped cyan index.
        for _ in 0..8 {
            engine.render();
        }
        let frame: Vec<Rgb> = engine.render().to_vec();

        let lit: Vec<usize> = frame
            .iter()
            .enumerate()
            .filter(|(_, led)| **led != BLACK)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(
            lit,
            vec![
                0, 5, 27, 80, 84, 95, 155, 162, 185, 199, 200, 207, 208, 214, 232, 236,
                252, 255, 258, 260, 261, 269, 310, 314, 372, 375, 398, 417, 420, 422,
                470, 480, 522,
            ]
        );
    }

    #[test]
    fn test_sparkle_holds_frame_between_refills() {
        let mut engine = engine_at(PatternId::Sparkle);
        let first: Vec<Rgb> = engine.render().to_vec();
        // Delay is 8; ticks 1..=7 keep the same scatter on display.
        for _ in 0..6 {
            let frame: Vec<Rgb> = engine.render().to_vec();
            assert_eq!(frame, first);
        }
    }
}
