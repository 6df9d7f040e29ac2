use std::path::PathBuf;

use coinsort_core::detection::HoughParams;
use coinsort_core::error::CoinError;
use coinsort_core::pipeline::config::PipelineConfig;
use coinsort_core::quality::BackgroundRule;
use coinsort_core::sampling::SamplingConfig;

#[test]
fn test_default_config() {
    let config = PipelineConfig::default();
    assert_eq!(config.output_dir, PathBuf::from("results"));
    assert!(!config.write_unannotated);
    assert_eq!(config.detection, HoughParams::default());
    assert_eq!(config.sampling, SamplingConfig::default());
    assert_eq!(config.sampling.background, BackgroundRule::Mask);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_roundtrip() {
    let mut config = PipelineConfig::default();
    config.detection.acc_threshold = 42;
    config.sampling.background = BackgroundRule::MaskAndBlack;
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: PipelineConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let text = r#"
        output_dir = "out"

        [detection]
        min_radius = 40
        max_radius = 80
    "#;
    let config: PipelineConfig = toml::from_str(text).unwrap();
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!((config.detection.min_radius, config.detection.max_radius), (40, 80));
    assert_eq!(config.detection.dp, 1.1);
    assert_eq!(config.detection.vote_sigma, 3.0);
    assert_eq!(config.sampling, SamplingConfig::default());
}

#[test]
fn test_validate_rejects_bad_values() {
    let bad_dp = PipelineConfig {
        detection: HoughParams {
            dp: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(bad_dp.validate(), Err(CoinError::InvalidConfig(_))));

    let bad_radii = PipelineConfig {
        detection: HoughParams {
            min_radius: 150,
            max_radius: 100,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(bad_radii.validate(), Err(CoinError::InvalidConfig(_))));

    let bad_fraction = PipelineConfig {
        sampling: SamplingConfig {
            center_fraction: 1.5,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(bad_fraction.validate(), Err(CoinError::InvalidConfig(_))));
}
