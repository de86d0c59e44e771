mod common;

mod tests {
    use myrtio_neopixel::animation::{DEFAULT_DIM, PALETTE};
    use myrtio_neopixel::{
        AnimationId, Animator, AnimatorConfig, ColorOrder, PixelStrip, PixelType, Rgb, Speed,
        StripConfig,
    };

    use super::common::{CountingDelay, NoDelay, RecordingCodec, StepClock};

    type TestStrip = PixelStrip<RecordingCodec, StepClock, 30>;

    fn strip() -> TestStrip {
        let config = StripConfig::new(10, PixelType::new(ColorOrder::GRB, Speed::Khz800));
        let mut strip = PixelStrip::new(config, RecordingCodec::default(), StepClock::new(0, 400))
            .expect("strip fits its buffer");
        strip.begin();
        strip
    }

    #[test]
    fn test_animation_id_from_raw() {
        for (raw, id) in AnimationId::ALL.into_iter().enumerate() {
            assert_eq!(AnimationId::from_raw(raw as u8), Some(id));
            assert_eq!(id as u8, raw as u8);
        }
        assert_eq!(AnimationId::from_raw(9), None);
    }

    #[test]
    fn test_animation_id_names() {
        assert_eq!(AnimationId::BottomUp.as_str(), "bottom_up");
        assert_eq!(
            AnimationId::TheaterChaseRainbow.as_str(),
            "theater_chase_rainbow"
        );
        for id in AnimationId::ALL {
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(AnimationId::parse_from_str("Heartbeat"), None);
        assert_eq!(AnimationId::parse_from_str(""), None);
    }

    #[test]
    fn test_uses_color() {
        assert!(AnimationId::Chase.uses_color());
        assert!(AnimationId::Bounce.uses_color());
        assert!(!AnimationId::Heartbeat.uses_color());
        assert!(!AnimationId::Rainbow.uses_color());
    }

    #[test]
    fn test_config_default() {
        let config = AnimatorConfig::default();
        assert_eq!(config.dim, DEFAULT_DIM);
        assert_eq!(config.color, PALETTE[0]);
    }

    #[test]
    fn test_every_animation_ends_dark() {
        for id in AnimationId::ALL {
            let mut strip = strip();
            let config = AnimatorConfig {
                dim: 255,
                color: PALETTE[4],
            };
            Animator::new(&mut strip, NoDelay, &config).run(id);

            let frames = &strip.codec().frames;
            assert!(frames.len() > 1, "{}: nothing shown", id.as_str());
            assert!(
                frames.iter().any(|frame| frame.iter().any(|&b| b != 0)),
                "{}: never lit",
                id.as_str()
            );
            assert!(
                strip.pixels().iter().all(|&b| b == 0),
                "{}: left pixels on",
                id.as_str()
            );
            assert_eq!(
                strip.codec().last_frame(),
                Some(&[0; 30][..]),
                "{}: last frame not dark",
                id.as_str()
            );
            assert_eq!(strip.brightness(), 255, "{}", id.as_str());
        }
    }

    #[test]
    fn test_chase_fades_the_tail() {
        let mut strip = strip();
        let config = AnimatorConfig {
            dim: 255,
            color: Rgb::new(255, 0, 0),
        };
        Animator::new(&mut strip, NoDelay, &config).run(AnimationId::Chase);

        let first = &strip.codec().frames[0];
        // Head at pixel 0, tail wrapping around to the far end
        assert_eq!(&first[0..3], &[0, 255, 0]);
        assert_eq!(&first[27..30], &[0, 153, 0]);
        assert_eq!(&first[24..27], &[0, 102, 0]);
        assert_eq!(&first[21..24], &[0, 51, 0]);
        assert_eq!(&first[18..21], &[0, 26, 0]);
        assert_eq!(&first[15..18], &[0, 0, 0]);
    }

    #[test]
    fn test_dim_scales_single_color_animations() {
        let mut strip = strip();
        let config = AnimatorConfig {
            dim: 127,
            color: Rgb::new(0, 0, 200),
        };
        Animator::new(&mut strip, NoDelay, &config).run(AnimationId::Chase);

        let brightest = strip
            .codec()
            .frames
            .iter()
            .flat_map(|frame| frame.iter().copied())
            .max();
        assert_eq!(brightest, Some(100));
    }

    #[test]
    fn test_heartbeat_switches_to_red() {
        let mut strip = strip();
        let mut animator = Animator::new(&mut strip, NoDelay, &AnimatorConfig::default());
        animator.run(AnimationId::Heartbeat);
        assert_eq!(animator.color(), Rgb::new(255, 0, 0));

        animator.set_color(PALETTE[2]);
        assert_eq!(animator.color(), PALETTE[2]);
    }

    #[test]
    fn test_wheel_animations_restore_brightness() {
        let mut strip = strip();
        strip.set_brightness(200);
        let config = AnimatorConfig {
            dim: 10,
            color: PALETTE[0],
        };
        Animator::new(&mut strip, NoDelay, &config).run(AnimationId::ColorWipe);
        assert_eq!(strip.brightness(), 200);

        // At dim 10 a full channel is stored as 255 * 11 / 256
        let brightest = strip
            .codec()
            .frames
            .iter()
            .flat_map(|frame| frame.iter().copied())
            .max();
        assert_eq!(brightest, Some(10));
    }

    #[test]
    fn test_animations_pace_themselves() {
        let mut strip = strip();
        let mut delay = CountingDelay::default();
        Animator::new(&mut strip, &mut delay, &AnimatorConfig::default())
            .run(AnimationId::ColorWipe);
        // Three colors wiped over 10 pixels, 50 ms per step
        assert_eq!(delay.total_ns, 30 * 50 * 1_000_000);
    }
}
