mod tests {
    use dotmatrix_toy::{
        AnimationId, AnimationMap, AnimationSpec, ButtonId, Duration, Frame, Rgb, SessionRng,
        SoundId,
        animation::{DEFAULT_ACTIVE, DEFAULT_HOLD},
        color::BLACK,
    };

    const ALL: [AnimationId; 6] = [
        AnimationId::Boot,
        AnimationId::Heart,
        AnimationId::Star,
        AnimationId::Moon,
        AnimationId::Flower,
        AnimationId::Butterfly,
    ];

    fn render(id: AnimationId, seed: u64, ms: u64) -> Frame {
        let slot = id.to_slot(&mut SessionRng::new(seed));
        let mut frame = Frame::new();
        slot.render(Duration::from_millis(ms), &mut frame);
        frame
    }

    fn render_hold(id: AnimationId, seed: u64) -> Frame {
        let slot = id.to_slot(&mut SessionRng::new(seed));
        let mut frame = Frame::new();
        slot.render_hold(&mut frame);
        frame
    }

    #[test]
    fn test_animation_id_names() {
        for id in ALL {
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
            assert_eq!(AnimationId::from_raw(id as u8), Some(id));
        }
        assert_eq!(AnimationId::parse_from_str("unicorn"), None);
        assert_eq!(AnimationId::from_raw(6), None);
    }

    #[test]
    fn test_slot_matches_id() {
        for id in ALL {
            assert_eq!(id.to_slot(&mut SessionRng::new(1)).id(), id);
        }
    }

    #[test]
    fn test_default_sounds() {
        assert_eq!(AnimationId::Boot.default_sound(), SoundId::Startup);
        assert_eq!(AnimationId::Heart.default_sound(), SoundId::Heartbeat);
        assert_eq!(AnimationId::Butterfly.default_sound(), SoundId::Heartbeat);
        assert_eq!(AnimationId::Moon.default_sound(), SoundId::Moon);
        assert_eq!(SoundId::Flower.path(), "sounds/flower.wav");
    }

    #[test]
    fn test_default_button_map() {
        let map = AnimationMap::default();
        let mapped = ButtonId::PRIORITY.map(|b| map.get(b).map(|spec| spec.animation));
        assert_eq!(
            mapped,
            [
                Some(AnimationId::Heart),
                Some(AnimationId::Star),
                Some(AnimationId::Moon),
                Some(AnimationId::Flower),
            ]
        );

        let heart = map.get(ButtonId::A).copied();
        assert_eq!(
            heart,
            Some(AnimationSpec {
                animation: AnimationId::Heart,
                sound: Some(SoundId::Heartbeat),
                active: DEFAULT_ACTIVE,
                hold: Some(DEFAULT_HOLD),
            })
        );
        assert_eq!(AnimationMap::empty().get(ButtonId::A), None);
    }

    #[test]
    fn test_boot_spec() {
        let boot = AnimationSpec::boot();
        assert_eq!(boot.active, Duration::from_millis(1_500));
        assert_eq!(boot.hold, None);
        assert_eq!(boot.sound, Some(SoundId::Startup));
    }

    #[test]
    fn test_every_animation_draws_something() {
        for id in ALL {
            for ms in [0, 1_200, 2_500, 4_900] {
                assert!(render(id, 5, ms).lit_count() > 0, "{} blank at {ms}", id.as_str());
            }
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        for id in ALL {
            assert_eq!(render(id, 99, 1_700), render(id, 99, 1_700));
            assert_eq!(render_hold(id, 99), render_hold(id, 99));
        }
    }

    #[test]
    fn test_boot_rings_start_at_center() {
        let frame = render(AnimationId::Boot, 0, 0);
        assert_ne!(frame.get(7, 7), Some(BLACK));
        assert_eq!(frame.get(0, 0), Some(BLACK));
        // Boot has no hold frame
        assert!(render_hold(AnimationId::Boot, 0).is_blank());
    }

    #[test]
    fn test_heart_hold_covers_center() {
        let frame = render_hold(AnimationId::Heart, 11);
        let center = frame.get(7, 8).unwrap_or(BLACK);
        assert!(center.r > 200, "heart should be pink, got {center:?}");
        assert_eq!(frame.get(0, 0), Some(BLACK));
    }

    #[test]
    fn test_star_hold_is_centered() {
        let frame = render_hold(AnimationId::Star, 3);
        assert_ne!(frame.get(7, 7), Some(BLACK));
        assert_eq!(frame.get(0, 15), Some(BLACK));
    }

    #[test]
    fn test_moon_rises_into_center() {
        let early = render(AnimationId::Moon, 4, 0);
        let hold = render_hold(AnimationId::Moon, 4);
        let sky = Rgb::new(5, 5, 20);

        assert_eq!(early.get(8, 8), Some(sky));
        let moon = hold.get(8, 8).unwrap_or(BLACK);
        assert!(moon.r >= 200 && moon.g >= 200);
        // The night sky fills the whole matrix
        assert_eq!(hold.lit_count(), 256);
    }

    #[test]
    fn test_flower_grows_from_stem() {
        let stem = Rgb::new(34, 139, 34);
        let seedling = render(AnimationId::Flower, 8, 0);
        assert_eq!(seedling.get(7, 15), Some(stem));
        assert_eq!(seedling.get(8, 15), Some(stem));
        assert_eq!(seedling.lit_count(), 2);

        let grown = render_hold(AnimationId::Flower, 8);
        assert_eq!(grown.get(7, 12), Some(stem));
        // Center of the bloom
        assert_eq!(grown.get(7, 5), Some(Rgb::new(255, 200, 50)));
    }

    #[test]
    fn test_butterfly_body() {
        let frame = render_hold(AnimationId::Butterfly, 2);
        assert_eq!(frame.get(8, 8), Some(Rgb::new(40, 20, 10)));
        assert_ne!(frame.get(6, 5), Some(BLACK));
    }
}
