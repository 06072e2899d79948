//! Binary-level tests: each run gets an isolated HOME via TestWorld.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use shist_testing::TestWorld;

const PLAIN: &[&str] = &["--utc", "--no-color"];

fn args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    PLAIN.iter().copied().chain(extra.iter().copied()).collect()
}

#[test]
fn test_zsh_default_path_with_count_window() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("zsh_history", ".zsh_history");

    let result = world.run(&args(&["--shell", "zsh", "-n", "2", "--format", "%i %c"]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout().trim_end(), @r"
    4 ls -la
    5 docker compose up -d
    ");
    Ok(())
}

#[test]
fn test_negative_count_shows_everything() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("zsh_history", ".zsh_history");

    let result = world.run(&args(&["-s", "zsh", "-n", "-1", "--format", "%i"]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "1\n2\n3\n4\n5\n");
    Ok(())
}

#[test]
fn test_fish_commands_that_look_like_yaml() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_sample("fish_history_shell_syntax", ".local/share/fish/fish_history");

    let result = world.run(&args(&["-s", "fish", "--max-index", "3", "--format", "%c"]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout().trim_end(), @r#"
    git commit -m "fix: handle empty input"
    [ -f Cargo.toml ] && cargo check
    : noop
    "#);
    Ok(())
}

#[test]
fn test_default_template_without_color() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("zsh_history", ".zsh_history");

    let result = world.run(&args(&["-s", "zsh", "--max-index", "2"]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout().trim_end(), @r"
    2024-04-01 19:33 | 1 | git status
    2024-04-01 19:33 | 2 | cargo build --release --locked
    ");
    assert!(!result.stdout().contains('\x1b'));
    Ok(())
}

#[test]
fn test_dialect_inferred_from_file_name() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("bash_history", "logs/my_bash_history");
    let file = world
        .home()
        .join("logs/my_bash_history")
        .to_string_lossy()
        .into_owned();

    let result = world.run(&args(&[
        "-f",
        file.as_str(),
        "--min-index",
        "3",
        "--date-format",
        "%H:%M:%S",
        "--format",
        "%d|%c",
    ]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout().trim_end(), @r#"
    19:33:20|git pull
    19:33:50|ssh deploy@host "systemctl restart app"
    19:34:50|exit
    "#);
    Ok(())
}

#[test]
fn test_fish_detected_from_shell_env() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_sample("fish_history", ".local/share/fish/fish_history")
        .with_env("SHELL", "/usr/local/bin/fish");

    let result = world.run(&args(&["--grep", "^c", "--format", "%i %t %c"]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout().trim_end(), @r"
    2 1712000010 cd ~/src/shist
    3 1712000020 cargo test --workspace
    ");
    Ok(())
}

#[test]
fn test_histfile_overrides_default_path() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("zsh_history", "custom/history.txt");
    let histfile = world.home().join("custom/history.txt");
    let world = world.with_env("HISTFILE", histfile.to_string_lossy());

    let result = world.run(&args(&["-s", "zsh", "-n", "1", "--format", "%c"]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "docker compose up -d\n");
    Ok(())
}

#[test]
fn test_multiline_keeps_original_lines() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("zsh_history", ".zsh_history");

    let result = world.run(&args(&[
        "-s",
        "zsh",
        "--min-index",
        "2",
        "--max-index",
        "2",
        "--multiline",
        "--format",
        "[%e] %c",
    ]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "[2] cargo build \\\n  --release \\\n  --locked\n"
    );
    Ok(())
}

#[test]
fn test_json_lines_output() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("bash_history", ".bash_history");

    let result = world.run(&["-s", "bash", "--output", "json", "-n", "2"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let rows = result.json_lines()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["index"], 4);
    assert_eq!(rows[0]["timestamp"], 1712000030);
    assert_eq!(rows[0]["lines"].as_array().map(Vec::len), Some(2));
    assert_eq!(rows[1]["command"], "exit");
    Ok(())
}

#[test]
fn test_config_file_supplies_defaults() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_sample("fish_history", ".local/share/fish/fish_history")
        .with_config("shell = \"fish\"\nformat = \"%i:%c\"\nutc = true\nno_color = true\n");

    let result = world.run(&["-n", "1"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "4:history merge\n");

    let result = world.run(&["-n", "1", "--format", "%c"])?;
    assert_eq!(result.stdout(), "history merge\n");
    Ok(())
}

#[test]
fn test_explicit_config_flag() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("zsh_history", ".zsh_history");
    let config = world
        .write_file("elsewhere.toml", "shell = \"zsh\"\nformat = \"<%c>\"\n")
        .to_string_lossy()
        .into_owned();

    let result = world.run(&["--config", config.as_str(), "-n", "1"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "<docker compose up -d>\n");
    Ok(())
}

#[test]
fn test_bad_filter_input_exits_with_two() -> anyhow::Result<()> {
    // No history file exists; input errors must win over read errors
    let world = TestWorld::new();

    let result = world.run(&["-s", "zsh", "--min-date", "next week"])?;
    assert_eq!(result.code(), Some(2));
    assert!(result.stderr().contains("Error:"));
    assert!(result.stderr().contains("next week"));

    let result = world.run(&["-s", "zsh", "--grep", "(unclosed"])?;
    assert_eq!(result.code(), Some(2));

    let result = world.run(&["-s", "zsh", "--date-format", "%Q"])?;
    assert_eq!(result.code(), Some(2));
    Ok(())
}

#[test]
fn test_invalid_config_exits_with_two() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config("shell = \"tcsh\"\n");

    let result = world.run(&[])?;
    assert_eq!(result.code(), Some(2));
    assert!(result.stderr().contains("invalid config file"));
    Ok(())
}

#[test]
fn test_missing_history_file_fails() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["-s", "bash"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("failed to read bash history"));
    Ok(())
}

#[test]
fn test_malformed_fish_history_fails() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("fish_history_malformed", "fish_history");
    let file = world.home().join("fish_history").to_string_lossy().into_owned();

    let result = world.run(&["-f", file.as_str()])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stdout().is_empty());
    Ok(())
}

#[test]
fn test_date_window() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample("zsh_history", ".zsh_history");

    let result = world.run(&args(&[
        "-s",
        "zsh",
        "--min-date",
        "1712000005",
        "--max-date",
        "2024-04-01 19:35",
        "--format",
        "%i",
    ]))?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "2\n4\n");
    Ok(())
}

#[test]
fn test_help_lists_examples() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("shist");
    world.configure_command(&mut cmd).arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("%C(<color>)"));
}

#[test]
fn test_unknown_shell_flag_is_usage_error() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("shist");
    world.configure_command(&mut cmd).args(["--shell", "tcsh"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("tcsh"));
}
