//! Integration tests for the command-line session.

use clap::Parser;
use steamstats_app::{Args, OutputFormat, Session};
use steamstats_common::test_utils::csv_fixtures::sample_csv;
use steamstats_common::test_utils::{create_temp_dir, init_test_logging, write_temp_file};
use steamstats_common::ChartView;
use steamstats_config::{Config, ConfigLoader};
use steamstats_i18n::Locale;

fn config_for(data_path: &std::path::Path) -> Config {
    let mut config = Config::default();
    let args = Args::parse_from([
        "steamstats",
        "--data",
        data_path.to_str().unwrap(),
        "--game",
        "Dota 2",
    ]);
    args.apply_to(&mut config);
    config
}

#[tokio::test]
async fn test_session_json_output() {
    init_test_logging();
    let data = write_temp_file(&sample_csv());
    let session = Session::start(&config_for(data.path())).await;

    let mut out = Vec::new();
    let paths = session.output(OutputFormat::Json, &mut out).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert!(paths.is_empty());
    assert_eq!(json["status"]["rows"], 7);
    assert_eq!(json["line"]["points"][0]["label"], "January 2021");
    assert_eq!(json["line"]["points"][0]["value"], 500_000.0);
    assert_eq!(json["line"]["points"][1]["value"], 400_000.0);
    assert_eq!(json["bar"]["series"][0]["alias"], "CSGO");
}

#[tokio::test]
async fn test_session_survives_missing_dataset() {
    let dir = create_temp_dir();
    let session = Session::start(&config_for(&dir.path().join("missing.csv"))).await;

    assert!(!session.status().is_loaded());

    let mut out = Vec::new();
    session.output(OutputFormat::Text, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("missing.csv"));
    assert!(text.contains("Average players for Dota 2 in 2021"));
}

#[tokio::test]
async fn test_localised_text_output() {
    let data = write_temp_file(&sample_csv());
    let mut config = config_for(data.path());
    config.dashboard.language = "cn".to_string();
    config.dashboard.view = ChartView::Line;

    let session = Session::start(&config).await;
    assert_eq!(session.selection().locale, Locale::Chinese);

    let mut out = Vec::new();
    session.write_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Steam 玩家统计数据"));
    assert!(text.contains("一月"));
    assert!(!text.contains("前三名"));
}

#[test]
fn test_config_file_then_flags() {
    let yaml = "dashboard:\n  default_year: \"2020\"\n  language: fr\noutput:\n  dir: out\n";
    let file = write_temp_file(yaml);

    let mut config = ConfigLoader::load_config(file.path()).unwrap();
    Args::parse_from(["steamstats", "--output-dir", "elsewhere"]).apply_to(&mut config);

    assert_eq!(config.dashboard.default_year, "2020");
    assert_eq!(config.dashboard.language, "fr");
    assert_eq!(config.output.dir, "elsewhere");
}

#[tokio::test]
#[ignore = "requires a system sans-serif font"]
async fn test_png_output() {
    let data = write_temp_file(&sample_csv());
    let out_dir = create_temp_dir();
    let mut config = config_for(data.path());
    config.output.dir = out_dir.path().display().to_string();

    let session = Session::start(&config).await;
    let mut out = Vec::new();
    let paths = session.output(OutputFormat::Png, &mut out).await.unwrap();

    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|path| path.exists()));
}
