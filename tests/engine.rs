mod tests {
    use sign_pattern_engine::{
        Command, EngineConfig, PatternId, RaceDirection, Rgb, SignEngine,
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_startup_is_first_pattern() {
        let engine = SignEngine::default();
        assert_eq!(engine.pattern(), PatternId::Startup);
    }

    #[test]
    fn test_pattern_order_wraps_to_wave_not_startup() {
        let mut engine = SignEngine::default();
        let expected = [
            PatternId::Wave,
            PatternId::Switch,
            PatternId::Breathe,
            PatternId::Race(RaceDirection::Forward),
            PatternId::Race(RaceDirection::Reverse),
            PatternId::Sparkle,
            PatternId::Wave,
        ];
        for id in expected {
            engine.update_pattern();
            assert_eq!(engine.pattern(), id);
        }
    }

    #[test]
    fn test_update_pattern_blanks_frame_and_counters() {
        let mut engine = SignEngine::default();
        // Dirty the frame with a few startup ramp steps.
        for _ in 0..5 {
            engine.render();
        }
        assert!(engine.frame().iter().any(|led| *led != BLACK));

        engine.apply(Command::NextPattern);
        assert_eq!(engine.pattern(), PatternId::Wave);
        assert_eq!(engine.step(), 0);
        assert!(engine.frame().iter().all(|led| *led == BLACK));
        // Delay comes back to the new mode's nominal value.
        assert_eq!(engine.delay(), 16);
    }

    #[test]
    fn test_update_brightness_cycles_with_period_max() {
        let mut engine = SignEngine::default();
        assert_eq!(engine.brightness(), 4);

        let mut seen = Vec::new();
        for _ in 0..8 {
            engine.update_brightness();
            seen.push(engine.brightness());
        }
        assert_eq!(seen, vec![3, 2, 1, 4, 3, 2, 1, 4]);
    }

    #[test]
    fn test_update_speed_halves_and_wraps_at_floor() {
        let mut engine = SignEngine::default();
        engine.update_pattern(); // wave, nominal delay 16, max 64

        let mut seen = Vec::new();
        for _ in 0..7 {
            engine.update_speed();
            seen.push(engine.delay());
        }
        assert_eq!(seen, vec![8, 4, 2, 1, 64, 32, 16]);
    }

    #[test]
    fn test_update_speed_advances_phase_by_exactly_one() {
        let mut engine = SignEngine::default();
        engine.update_pattern(); // wave, delay 16
        for _ in 0..40 {
            engine.render();
        }
        assert_eq!(engine.step(), 40);
        let old_phase = u32::from(engine.step()) / u32::from(engine.delay());

        engine.update_speed();
        assert_eq!(engine.delay(), 8);
        // A naive 40 / 8 = 5 would skip two phases; the step is rewritten
        // so the displayed phase moves by one.
        assert_eq!(engine.step(), 24);
        let new_phase = u32::from(engine.step()) / u32::from(engine.delay());
        assert_eq!(new_phase, old_phase + 1);
    }

    #[test]
    fn test_update_speed_without_phase_jump_keeps_step() {
        let mut engine = SignEngine::default();
        engine.update_pattern();
        engine.update_speed();
        assert_eq!(engine.step(), 0);
        assert_eq!(engine.delay(), 8);
    }

    #[test]
    fn test_wave_auto_advances_after_cycles() {
        let mut config = EngineConfig::default();
        config.wave.auto_advance_after = 2;
        config.wave.delay.nominal = 1;
        let mut engine = SignEngine::new(config);
        engine.update_pattern(); // wave

        for _ in 0..50 {
            engine.render();
            if engine.pattern() != PatternId::Wave {
                break;
            }
        }
        assert_eq!(engine.pattern(), PatternId::Switch);
    }

    #[test]
    fn test_auto_advance_can_be_disabled() {
        let mut config = EngineConfig::default();
        config.wave.auto_advance_after = 2;
        config.wave.delay.nominal = 1;
        let mut engine = SignEngine::new(config);
        engine.update_pattern();
        engine.apply(Command::ToggleAutoAdvance);
        assert!(!engine.auto_advance());

        for _ in 0..100 {
            engine.render();
        }
        assert_eq!(engine.pattern(), PatternId::Wave);
    }

    #[test]
    fn test_startup_is_forced_over_after_epochs() {
        let mut config = EngineConfig::default();
        config.startup_epochs = 0;
        let mut engine = SignEngine::new(config);
        engine.render();
        assert_eq!(engine.pattern(), PatternId::Wave);
    }

    #[test]
    fn test_startup_holds_before_epochs_elapse() {
        let mut engine = SignEngine::default();
        for _ in 0..100 {
            engine.render();
        }
        assert_eq!(engine.pattern(), PatternId::Startup);
    }

    #[test]
    fn test_breathe_is_the_only_paced_mode() {
        let mut engine = SignEngine::default();
        engine.update_pattern(); // wave
        assert_eq!(engine.pacing().as_millis(), 0);

        engine.update_pattern(); // switch
        engine.update_pattern(); // breathe
        assert_eq!(engine.pattern(), PatternId::Breathe);
        assert_eq!(engine.pacing().as_millis(), 64);
    }

    #[test]
    fn test_race_width_is_clamped() {
        let mut engine = SignEngine::default();
        engine.apply(Command::SetRaceWidth(60));
        assert_eq!(engine.race_width(), 60);
        engine.apply(Command::SetRaceWidth(255));
        assert_eq!(engine.race_width(), 60);
        engine.apply(Command::SetRaceWidth(3));
        assert_eq!(engine.race_width(), 3);
    }
}
