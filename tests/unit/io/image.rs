//! Tests for fill and mosaic rendering and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use rand::{SeedableRng, rngs::StdRng};
    use subdivart::AlgorithmError;
    use subdivart::algorithm::{Orientation, SplitRecord, replay};
    use subdivart::io::configuration::{MAX_IMAGE_DIMENSION, OUTLINE_COLOR};
    use subdivart::io::image::{
        RenderMode, RenderOptions, export_png, image_dimensions, render, render_fill,
        render_mosaic,
    };
    use subdivart::spatial::Tiling;
    use tempfile::TempDir;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    // Lower half red, upper half blue on a 4x4 canvas
    fn stacked() -> Tiling {
        let records = [SplitRecord {
            index: 0,
            orientation: Orientation::Vertical,
            break_point: 2,
        }];
        replay(4, 4, &records)
            .and_then(|t| t.assign_colors(vec![RED, BLUE]))
            .unwrap()
    }

    // Tests canvas Y is flipped so the lower rectangle fills the bottom rows
    // Verified by mapping canvas rows directly to image rows
    #[test]
    fn test_fill_flips_y_axis() {
        let img = render_fill(&stacked(), 1, false).unwrap();

        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(*img.get_pixel(0, 0), Rgba(BLUE));
        assert_eq!(*img.get_pixel(3, 1), Rgba(BLUE));
        assert_eq!(*img.get_pixel(0, 2), Rgba(RED));
        assert_eq!(*img.get_pixel(3, 3), Rgba(RED));
    }

    // Tests scaling multiplies the image size and outlines cover rectangle edges
    #[test]
    fn test_fill_scaled_with_outline() {
        let img = render_fill(&stacked(), 3, true).unwrap();

        assert_eq!(img.dimensions(), (12, 12));
        assert_eq!(*img.get_pixel(0, 0), Rgba(OUTLINE_COLOR));
        assert_eq!(*img.get_pixel(5, 5), Rgba(OUTLINE_COLOR));
        assert_eq!(*img.get_pixel(5, 2), Rgba(BLUE));
        assert_eq!(*img.get_pixel(5, 8), Rgba(RED));
    }

    // Tests uncolored tilings cannot be rendered
    #[test]
    fn test_render_requires_colors() {
        let tiling = Tiling::canvas(3, 3).unwrap();

        assert!(matches!(
            render_fill(&tiling, 1, false),
            Err(AlgorithmError::InvalidParameter {
                parameter: "color",
                ..
            })
        ));
    }

    // Tests mosaic cells stay within the noise bound of their rectangle color
    // Verified by drawing noise without clamping the offset range
    #[test]
    fn test_mosaic_noise_bounded() {
        let mut rng = StdRng::seed_from_u64(6);
        let img = render_mosaic(&stacked(), 2, 10, &mut rng).unwrap();

        assert_eq!(img.dimensions(), (8, 8));
        for (_, y, pixel) in img.enumerate_pixels() {
            let base = if y < 4 { BLUE } else { RED };
            for channel in 0..3 {
                let diff = i16::from(pixel.0[channel]) - i16::from(base[channel]);
                assert!(diff.abs() <= 10);
            }
            assert_eq!(pixel.0[3], 255);
        }
    }

    // Tests each scaled mosaic cell is a single flat color
    #[test]
    fn test_mosaic_cells_are_uniform() {
        let mut rng = StdRng::seed_from_u64(8);
        let img = render_mosaic(&stacked(), 2, 40, &mut rng).unwrap();

        for cell_y in 0..4 {
            for cell_x in 0..4 {
                let corner = *img.get_pixel(cell_x * 2, cell_y * 2);
                assert_eq!(*img.get_pixel(cell_x * 2 + 1, cell_y * 2 + 1), corner);
            }
        }
    }

    #[test]
    fn test_render_dispatches_on_mode() {
        let options = RenderOptions {
            mode: RenderMode::Mosaic,
            scale: 1,
            mosaic_noise: 0,
            outline: true,
        };
        let mut rng = StdRng::seed_from_u64(0);

        // Zero noise mosaic matches an unoutlined fill
        let mosaic = render(&stacked(), &options, &mut rng).unwrap();
        assert_eq!(mosaic, render_fill(&stacked(), 1, false).unwrap());
    }

    // Tests zero and oversized scales are rejected
    #[test]
    fn test_image_dimensions_limits() {
        let tiling = Tiling::canvas(100, 50).unwrap();

        assert_eq!(image_dimensions(&tiling, 2).ok(), Some((200, 100)));
        assert!(image_dimensions(&tiling, 0).is_err());

        let oversized = (MAX_IMAGE_DIMENSION / 100 + 1) as u32;
        assert!(matches!(
            image_dimensions(&tiling, oversized),
            Err(AlgorithmError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
    }

    #[test]
    fn test_export_png_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("stacked.png");
        let img = render_fill(&stacked(), 1, false).unwrap();

        export_png(&img, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, img);
    }
}
