use fivedraw_cli::config::{ENV_ANTE, ENV_CONFIG, ENV_OPPONENTS, ENV_SEED};
use fivedraw_cli::run;
use serial_test::serial;
use std::io::Write as _;

fn clear_env() {
    for key in [ENV_CONFIG, ENV_SEED, ENV_ANTE, ENV_OPPONENTS] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn cfg_json() -> (i32, serde_json::Value, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["fivedraw", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(serde_json::Value::Null);
    (code, json, String::from_utf8_lossy(&err).into_owned())
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["ante"]["value"], 10);
    assert_eq!(json["ante"]["source"], "default");
    assert_eq!(json["raise_increment"]["value"], 25);
    assert_eq!(json["starting_balance"]["value"], 1000);
    assert_eq!(json["seed"]["value"], serde_json::Value::Null);
    assert_eq!(json["draw_style"]["value"], "stand-pat");
}

#[test]
#[serial]
fn cfg_reports_file_and_env_sources() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ante = 20\nstarting_balance = 500\nseed = 3").unwrap();
    unsafe {
        std::env::set_var(ENV_CONFIG, file.path());
        std::env::set_var(ENV_SEED, "77");
    }
    let (code, json, _) = cfg_json();
    clear_env();

    assert_eq!(code, 0);
    assert_eq!(json["ante"]["value"], 20);
    assert_eq!(json["ante"]["source"], "file");
    assert_eq!(json["starting_balance"]["source"], "file");
    assert_eq!(json["seed"]["value"], 77);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["opponents"]["source"], "default");
}

#[test]
#[serial]
fn cfg_invalid_env_exits_2() {
    clear_env();
    unsafe {
        std::env::set_var(ENV_OPPONENTS, "0");
    }
    let (code, _, err) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("opponents must be 1-7"));
}

#[test]
#[serial]
fn play_uses_configured_ante() {
    clear_env();
    unsafe {
        std::env::set_var(ENV_ANTE, "40");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = std::io::Cursor::new(b"f\n".to_vec());
    let code = fivedraw_cli::run_with_input(
        ["fivedraw", "play", "--opponents", "1", "--rounds", "1", "--seed", "5"],
        &mut out,
        &mut err,
        &mut stdin,
    );
    clear_env();
    assert_eq!(code, 0);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Ante: 40"));
    assert!(out.contains("balance=960"));
}
