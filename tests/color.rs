mod tests {
    use dotmatrix_toy::{
        Frame, Pixel, SessionRng,
        color::{BLACK, Rgb, WHITE, blend_colors, hue_degrees, shift_color},
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_shift_color_clamps() {
        assert_eq!(
            shift_color(Rgb::new(250, 10, 100), 20, -20, 5),
            Rgb::new(255, 0, 105)
        );
    }

    #[test]
    fn test_hue_degrees_wraps() {
        assert_eq!(hue_degrees(0.0), hue_degrees(360.0));
        assert_eq!(hue_degrees(-90.0), hue_degrees(270.0));
        assert_ne!(hue_degrees(120.0), BLACK);
    }

    #[test]
    fn test_frame_clips_out_of_range() {
        let mut frame = Frame::new();
        frame.set(-1, 0, RED);
        frame.set(16, 3, RED);
        frame.set(3, 16, RED);
        assert!(frame.is_blank());
        assert_eq!(frame.get(-1, 0), None);

        frame.set(15, 15, RED);
        assert_eq!(frame.get(15, 15), Some(RED));
        assert_eq!(frame.as_slice()[255], RED);
    }

    #[test]
    fn test_frame_lit_pixels() {
        let mut frame = Frame::new();
        frame.set(2, 1, BLUE);
        frame.set(0, 3, WHITE);

        let lit: Vec<Pixel> = frame.pixels().collect();
        assert_eq!(
            lit,
            vec![
                Pixel {
                    x: 2,
                    y: 1,
                    color: BLUE
                },
                Pixel {
                    x: 0,
                    y: 3,
                    color: WHITE
                },
            ]
        );
        assert_eq!(frame.lit_count(), 2);

        frame.clear();
        assert!(frame.is_blank());
        frame.fill(RED);
        assert_eq!(frame.lit_count(), 256);
    }

    #[test]
    fn test_rng_is_seeded() {
        let mut a = SessionRng::new(17);
        let mut b = SessionRng::new(17);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_rng_ranges() {
        let mut rng = SessionRng::new(3);
        for _ in 0..1_000 {
            let n = rng.range_i32(-15, 15);
            assert!((-15..=15).contains(&n));

            let f = rng.uniform(0.85, 1.15);
            assert!((0.85..=1.15).contains(&f));

            assert!([5, 6, 7].contains(&rng.choose(&[5, 6, 7])));
            assert!(matches!(rng.sign(), 1 | -1));
        }
        assert_eq!(rng.range_i32(4, 4), 4);
    }
}
