mod tests {
    use embassy_time::Instant;
    use saber_blade_core::{
        BladeController, BladeControllerConfig, BladePalette, BladeState, ColorMode, CommandSlot,
        EffectId, EffectSink, HiltCommand,
        color::{CLASH_WHITE, wheel_color},
    };

    #[derive(Default)]
    struct RecordingSink {
        palettes: Vec<BladePalette>,
    }

    impl EffectSink for RecordingSink {
        fn apply(&mut self, _effect: EffectId) {}

        fn set_palette(&mut self, palette: BladePalette) {
            self.palettes.push(palette);
        }
    }

    fn controller(slot: &CommandSlot) -> BladeController<'_, RecordingSink> {
        BladeController::new(
            slot.receiver(),
            RecordingSink::default(),
            &BladeControllerConfig::default(),
        )
    }

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    fn command(
        blade: &mut BladeController<'_, RecordingSink>,
        slot: &CommandSlot,
        raw: u8,
        at: Instant,
    ) {
        slot.publish(HiltCommand::new(raw));
        blade.tick(at);
    }

    #[test]
    fn test_double_tap_cycles_color_modes() {
        let slot = CommandSlot::new();
        let mut blade = controller(&slot);
        blade.tick(ms(0));

        command(&mut blade, &slot, 0x20, ms(100));
        assert_eq!(blade.color_mode(), ColorMode::Stock);

        // Extinguish, then re-ignite inside the double-tap window.
        command(&mut blade, &slot, 0x40, ms(200));
        command(&mut blade, &slot, 0x30, ms(1000));
        assert_eq!(blade.color_mode(), ColorMode::WheelCycle);
        assert_eq!(
            blade.sink().palettes.last(),
            Some(&BladePalette {
                blade: wheel_color(0),
                clash: CLASH_WHITE,
            })
        );

        command(&mut blade, &slot, 0x40, ms(1100));
        command(&mut blade, &slot, 0x20, ms(1200));
        assert_eq!(blade.color_mode(), ColorMode::WheelHold);

        command(&mut blade, &slot, 0x40, ms(1300));
        command(&mut blade, &slot, 0x20, ms(1400));
        assert_eq!(blade.color_mode(), ColorMode::Stock);
    }

    #[test]
    fn test_slow_reignite_keeps_mode() {
        let slot = CommandSlot::new();
        let mut blade = controller(&slot);
        blade.tick(ms(0));

        command(&mut blade, &slot, 0x20, ms(100));
        command(&mut blade, &slot, 0x40, ms(200));

        // Exactly at the window boundary no longer counts as a double tap.
        command(&mut blade, &slot, 0x20, ms(1700));
        assert_eq!(blade.color_mode(), ColorMode::Stock);
    }

    #[test]
    fn test_first_ignite_never_advances_mode() {
        let slot = CommandSlot::new();
        let mut blade = controller(&slot);
        blade.tick(ms(0));

        command(&mut blade, &slot, 0x20, ms(5000));
        assert_eq!(blade.color_mode(), ColorMode::Stock);
    }

    #[test]
    fn test_wheel_cycle_steps_while_idle() {
        let slot = CommandSlot::new();
        let mut blade = controller(&slot);
        blade.tick(ms(0));

        // Double tap into wheel cycle mode.
        command(&mut blade, &slot, 0x20, ms(100));
        command(&mut blade, &slot, 0x40, ms(200));
        command(&mut blade, &slot, 0x20, ms(300));
        assert_eq!(blade.color_mode(), ColorMode::WheelCycle);

        // A flicker resolves into idle, which schedules the first wheel step.
        command(&mut blade, &slot, 0x60, ms(400));
        let result = blade.tick(ms(440));
        assert_eq!(result.state, BladeState::Idle);
        assert_eq!(result.next_step, Some(ms(2440)));

        let result = blade.tick(ms(2440));
        assert_eq!(result.next_step, Some(ms(4440)));
        assert_eq!(
            blade.sink().palettes.last(),
            Some(&BladePalette {
                blade: wheel_color(16),
                clash: CLASH_WHITE,
            })
        );

        let result = blade.tick(ms(4440));
        assert_eq!(result.next_step, Some(ms(6440)));
        assert_eq!(
            blade.sink().palettes.last().map(|palette| palette.blade),
            Some(wheel_color(32))
        );
    }

    #[test]
    fn test_refresh_keeps_pending_wheel_deadline() {
        let slot = CommandSlot::new();
        let mut blade = controller(&slot);
        blade.tick(ms(0));

        command(&mut blade, &slot, 0x20, ms(100));
        command(&mut blade, &slot, 0x40, ms(200));
        command(&mut blade, &slot, 0x20, ms(300));
        command(&mut blade, &slot, 0x60, ms(400));
        let result = blade.tick(ms(440));
        assert_eq!(result.next_step, Some(ms(2440)));

        // The periodic set-color keepalive must not push the wheel step back.
        slot.publish(HiltCommand::new(0xA0));
        let result = blade.tick(ms(1000));
        assert_eq!(result.state, BladeState::Idle);
        assert_eq!(result.next_step, Some(ms(2440)));
    }

    #[test]
    fn test_wheel_hold_does_not_step() {
        let slot = CommandSlot::new();
        let mut blade = controller(&slot);
        blade.tick(ms(0));

        // Two double taps land in wheel hold mode.
        command(&mut blade, &slot, 0x20, ms(100));
        command(&mut blade, &slot, 0x40, ms(200));
        command(&mut blade, &slot, 0x20, ms(300));
        command(&mut blade, &slot, 0x40, ms(400));
        command(&mut blade, &slot, 0x20, ms(500));
        assert_eq!(blade.color_mode(), ColorMode::WheelHold);

        command(&mut blade, &slot, 0x60, ms(600));
        let result = blade.tick(ms(640));
        assert_eq!(result.state, BladeState::Idle);
        // No wheel schedule outside of cycle mode.
        assert_eq!(result.next_step, None);
    }
}
