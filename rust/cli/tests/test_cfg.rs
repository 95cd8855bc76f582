use headsup_cli::config::{
    CONFIG_ENV, OPPONENT_DELAY_ENV, OPPONENT_ENV, SEED_ENV, STARTING_STACK_ENV,
};
use headsup_cli::{run, run_with_input};
use serde_json::Value;
use serial_test::serial;
use std::io::{Cursor, Write};

fn clear_env() {
    for var in [
        CONFIG_ENV,
        SEED_ENV,
        STARTING_STACK_ENV,
        OPPONENT_ENV,
        OPPONENT_DELAY_ENV,
    ] {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn cfg_json() -> (i32, Value) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["headsup", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json)
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, json) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(1000));
    assert_eq!(json["opponent"]["value"].as_str(), Some("reference"));
    assert_eq!(json["opponent"]["source"].as_str(), Some("default"));
    assert_eq!(json["opponent_delay_ms"]["value"].as_u64(), Some(1000));
}

#[test]
#[serial]
fn precedence_flag_over_env_over_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "seed = 456\nstarting_stack = 300\nopponent = \"passive\"\nopponent_delay_ms = 0"
    )
    .unwrap();
    unsafe {
        std::env::set_var(CONFIG_ENV, file.path());
    }

    let (code, json) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(300));

    unsafe {
        std::env::set_var(SEED_ENV, "789");
    }
    let (_, json) = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));

    // play picks up file and env values unless a flag overrides them
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(b"q\n".to_vec());
    let code = run_with_input(
        ["headsup", "play", "--stack", "50"],
        &mut out,
        &mut err,
        &mut stdin,
    );
    clear_env();

    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("play: opponent=passive stack=50 seed=789"));
}

#[test]
#[serial]
fn invalid_env_value_fails_cfg_and_play() {
    clear_env();
    unsafe {
        std::env::set_var(OPPONENT_DELAY_ENV, "soon");
    }
    let (code, _) = cfg_json();
    assert_eq!(code, 2);

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(Vec::new());
    let code = run_with_input(["headsup", "play"], &mut out, &mut err, &mut stdin);
    clear_env();

    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("Invalid opponent delay: soon"));
}
