mod common;
use common::*;

#[test]
fn test_config_file_host_section() {
    let config = temp_file_with("[host]\nnamespace = Str\ngame_version = 1.10.163\n");
    let path = config.path().to_str().unwrap();

    let (stdout, stderr, exit_code) = run_strutil(&[
        "--config-file",
        path,
        "-e",
        "Str::GameVersion()",
    ]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "1.10.163\n");
}

#[test]
fn test_config_file_equals_form() {
    let config = temp_file_with("[host]\ngame_version = 1.10.163\n");
    let flag = format!("--config-file={}", config.path().to_str().unwrap());

    let (stdout, stderr, exit_code) = run_strutil(&[&flag, "-e", "GameVersion()"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "1.10.163\n");
}

#[test]
fn test_cli_flags_override_config_file() {
    let config = temp_file_with("[host]\ngame_version = 1.10.163\nruntime_version = 0.1\n");
    let path = config.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_strutil(&[
        "--config-file",
        path,
        "--game-version",
        "1.10.984",
        "-e",
        "GameVersion() + \"/\" + RuntimeVersion()",
    ]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "1.10.984/0.1\n");
}

#[test]
fn test_defaults_are_prepended() {
    let config = temp_file_with("defaults = -F json\n");
    let path = config.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) =
        run_strutil(&["--config-file", path, "-e", r#"Echo("quoted")"#]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\"quoted\"\n");
}

#[test]
fn test_alias_expansion() {
    let config = temp_file_with(
        "[aliases]\ntitle = --lines -e 'ToTitleCase(line)'\nshout = -a title -F json\n",
    );
    let path = config.path().to_str().unwrap();

    let (stdout, stderr, exit_code) =
        run_strutil_with_input(&["--config-file", path, "-a", "shout"], "ab cd\n");
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "\"Ab Cd\"\n");
}

#[test]
fn test_unknown_alias_fails() {
    let config = temp_file_with("[aliases]\nknown = -e 1\n");
    let path = config.path().to_str().unwrap();

    let (_stdout, stderr, exit_code) = run_strutil(&["--config-file", path, "-a", "missing"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unknown alias: missing"));
}

#[test]
fn test_ignore_config_skips_file() {
    let config = temp_file_with("[host]\ngame_version = 1.10.163\n");
    let path = config.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) = run_strutil(&[
        "--ignore-config",
        "--config-file",
        path,
        "-e",
        "GameVersion()",
    ]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "unknown\n");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let (_stdout, stderr, exit_code) = run_strutil(&[
        "--config-file",
        "/nonexistent/strutil.ini",
        "-e",
        "1",
    ]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Config file error"));
}

#[test]
fn test_show_config() {
    let (stdout, _stderr, exit_code) = run_strutil(&["--show-config"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Configuration precedence"));
    assert!(stdout.contains("config.ini"));
}
