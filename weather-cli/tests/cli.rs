//! End-to-end tests for the `weather` binary against a mock OpenWeather server.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &Path, base_url: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let toml = format!("[openweather]\napi_key = \"TEST_KEY\"\nbase_url = \"{base_url}\"\n");
    std::fs::write(&path, toml).unwrap();
    path
}

fn weather_cmd(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("weather").unwrap();
    cmd.env_remove("OPENWEATHER_API_KEY")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn missing_api_key_exits_with_hint() {
    let dir = tempfile::tempdir().unwrap();

    weather_cmd(&dir.path().join("absent.toml"))
        .arg("London")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No OpenWeather API key configured"));
}

#[test]
fn no_city_is_a_usage_error() {
    Command::cargo_bin("weather")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn prints_summary_line() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Buenos Aires"))
        .and(query_param("units", "imperial"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{ "id": 802, "description": "scattered clouds" }],
            "main": { "temp": 71.6 },
            "name": "Buenos Aires"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server.uri());

    weather_cmd(&config)
        .args(["--no-color", "-i", "Buenos", "Aires"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buenos Aires"))
        .stdout(predicate::str::contains("🌥"))
        .stdout(predicate::str::contains("Scattered clouds"))
        .stdout(predicate::str::contains("(71.6°F)"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unknown_city_reports_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server.uri());

    weather_cmd(&config)
        .arg("Atlantis")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Can't find weather data for this city."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bad_key_reports_access_denied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server.uri());

    weather_cmd(&config)
        .arg("Paris")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Access denied. Check your API key."));
}
