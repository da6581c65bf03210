//! Tests for command-line interface parsing and artwork processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use subdivart::AlgorithmError;
    use subdivart::io::cli::{ArtProcessor, Cli, PaletteKind};
    use subdivart::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_WIDTH,
    };
    use subdivart::io::image::RenderMode;
    use subdivart::io::palette::Colormap;
    use tempfile::TempDir;

    fn quiet_cli(output: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "subdivart".to_string(),
            "--quiet".to_string(),
            "--output".to_string(),
            output.to_string_lossy().into_owned(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["subdivart"]);

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.iterations, DEFAULT_ITERATIONS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.palette, PaletteKind::Gradient);
        assert_eq!(cli.colormap, Colormap::Viridis);
        assert_eq!(cli.render, RenderMode::Fill);
        assert!(!cli.quiet);
        assert!(!cli.visualize);
        assert_eq!(cli.verbose, 0);
    }

    // Tests short flags and enum values
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "subdivart", "-w", "300", "-H", "200", "-i", "12", "-s", "5", "-p", "noisy", "-c",
            "magma", "-r", "mosaic", "-vv",
        ]);

        assert_eq!(cli.width, 300);
        assert_eq!(cli.height, 200);
        assert_eq!(cli.iterations, 12);
        assert_eq!(cli.seed, 5);
        assert_eq!(cli.palette, PaletteKind::Noisy);
        assert_eq!(cli.colormap, Colormap::Magma);
        assert_eq!(cli.render, RenderMode::Mosaic);
        assert_eq!(cli.verbose, 2);
    }

    // Tests negative values reach validation instead of failing to parse
    #[test]
    fn test_cli_accepts_negative_numbers() {
        let cli = Cli::parse_from(["subdivart", "--width", "-10", "--iterations", "-1"]);

        assert_eq!(cli.width, -10);
        assert_eq!(cli.iterations, -1);
    }

    #[test]
    fn test_should_show_progress() {
        assert!(Cli::parse_from(["subdivart"]).should_show_progress());
        assert!(!Cli::parse_from(["subdivart", "-q"]).should_show_progress());
    }

    // Tests the outline flag is inverted into render options
    #[test]
    fn test_render_options_outline() {
        let options = Cli::parse_from(["subdivart", "--no-outline", "--scale", "3"]).render_options();

        assert!(!options.outline);
        assert_eq!(options.scale, 3);
    }

    // Tests a full run writes a PNG of the canvas size
    // Verified by skipping the export step
    #[test]
    fn test_process_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("art.png");
        let cli = quiet_cli(&output, &["-w", "40", "-H", "30", "-i", "15"]);

        let written = ArtProcessor::new(cli).process().unwrap();

        assert_eq!(written, output);
        let img = image::open(&output).unwrap();
        assert_eq!((img.width(), img.height()), (40, 30));
    }

    // Tests the visualization GIF is written beside the PNG
    #[test]
    fn test_process_writes_visualization() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("art.png");
        let cli = quiet_cli(
            &output,
            &["-w", "20", "-H", "20", "-i", "5", "--visualize", "-p", "noisy"],
        );

        ArtProcessor::new(cli).process().unwrap();

        assert!(output.exists());
        assert!(temp_dir.path().join("art_visualization.gif").exists());
    }

    // Tests invalid input fails without writing output
    // Verified by clamping negative dimensions
    #[test]
    fn test_process_rejects_invalid_canvas() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("art.png");
        let cli = quiet_cli(&output, &["-w", "-5"]);

        let result = ArtProcessor::new(cli).process();

        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidDimension {
                parameter: "width",
                value: -5
            })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_process_rejects_too_many_iterations() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("art.png");
        let cli = quiet_cli(&output, &["-w", "2", "-H", "2", "-i", "4"]);

        assert!(matches!(
            ArtProcessor::new(cli).process(),
            Err(AlgorithmError::InvalidIterationCount { value: 4, .. })
        ));
        assert!(!output.exists());
    }

    // Tests visualization path generation from the output stem
    // Verified by changing the suffix format
    #[test]
    fn test_get_visualization_path() {
        assert_eq!(
            ArtProcessor::get_visualization_path(Path::new("out/art.png")),
            PathBuf::from("out/art_visualization.gif")
        );
        assert_eq!(
            ArtProcessor::get_visualization_path(Path::new("art.png")),
            PathBuf::from("art_visualization.gif")
        );
    }
}
