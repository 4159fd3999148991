use assert_cmd::Command;
use predicates::prelude::*;
use title_box::str_width;

fn title_box() -> Command {
    Command::cargo_bin("title-box").unwrap()
}

fn run_ok(args: &[&str]) -> Vec<String> {
    let output = title_box().args(args).assert().success().get_output().clone();
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn no_arguments_prints_help() {
    title_box()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn help_flag_exits_zero() {
    title_box()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--border-style"));
}

#[test]
fn embeds_title_in_top_border() {
    let lines = run_ok(&["Test Title", "--width", "30"]);
    assert!(lines.len() > 3);
    assert!(lines[0].starts_with('╭'));
    assert!(lines[0].ends_with('╮'));
    assert!(lines[0].contains("Test Title"));
    assert!(lines.iter().all(|line| line.chars().count() == 30));
}

#[test]
fn border_styles_pick_corners() {
    for (style, left, right) in [
        ("single", '┌', '┐'),
        ("double", '╔', '╗'),
        ("round", '╭', '╮'),
        ("bold", '┏', '┓'),
        ("ascii", '+', '+'),
    ] {
        let title = format!("{style} Test");
        let lines = run_ok(&[&title, "--border-style", style, "--width", "25"]);
        let first: Vec<char> = lines[0].chars().collect();
        assert_eq!(first[0], left);
        assert_eq!(first[24], right);
    }
}

#[test]
fn wide_glyph_titles_fill_exact_columns() {
    for title in ["こんにちは", "你好世界", "Hello世界"] {
        let lines = run_ok(&[title, "--width", "25"]);
        assert!(lines[0].contains(title));
        assert!(lines.iter().all(|line| str_width(line) == 25));
    }
}

#[test]
fn truncates_long_titles() {
    let long = "This is a very long title that should be truncated";
    let lines = run_ok(&[long, "--width", "20", "--truncate"]);
    let text = lines.join("\n");
    assert!(!text.contains(long));
    assert!(text.contains('…'));
    assert!(lines.iter().all(|line| str_width(line) == 20));

    let lines = run_ok(&["非常に長い日本語のタイトルです", "-w", "15", "--truncate"]);
    assert!(lines[0].contains('…'));
    assert_eq!(str_width(&lines[0]), 15);
}

#[test]
fn padding_adds_blank_rows() {
    let lines = run_ok(&["Padded", "--padding", "2", "--width", "30"]);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], format!("│{}│", " ".repeat(28)));
}

#[test]
fn bottom_title_on_last_line() {
    let lines = run_ok(&["BottomWide", "--title-position", "bottom", "--width", "100"]);
    let last = lines.last().unwrap();
    assert!(last.starts_with('╰'));
    assert!(last.contains("BottomWide"));
    assert_eq!(last.chars().count(), 100);
}

#[test]
fn widths_beyond_a_typical_terminal_are_kept() {
    for width in ["150", "200"] {
        let lines = run_ok(&["Wide", "--width", width]);
        let expected: usize = width.parse().unwrap();
        assert!(lines.iter().all(|line| line.chars().count() == expected));
    }
}

#[test]
fn empty_title_draws_plain_border() {
    let lines = run_ok(&["", "--width", "25"]);
    assert_eq!(lines[0], format!("╭{}╮", "─".repeat(23)));
}

#[test]
fn space_between_titles_list() {
    let lines = run_ok(&[
        "--titles",
        "Left,Right",
        "--title-align",
        "space-between",
        "-w",
        "50",
    ]);
    assert!(lines[0].starts_with("╭Left─"));
    assert!(lines[0].ends_with("─Right╮"));
}

#[test]
fn body_lines_and_hidden_borders() {
    let lines = run_ok(&[
        "Notes",
        "-w",
        "20",
        "-p",
        "0",
        "-l",
        "first",
        "-l",
        "second",
        "--no-border-bottom",
    ]);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "│first             │");
    assert_eq!(lines[3], " ".repeat(20));
}

#[test]
fn repeated_runs_are_identical() {
    let first = run_ok(&["Consistent", "--width", "25"]);
    for _ in 0..3 {
        assert_eq!(run_ok(&["Consistent", "--width", "25"]), first);
    }
}

#[test]
fn json_output_is_structured() {
    let output = title_box()
        .args(["Json", "-w", "30", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["box"]["width"], 30);
    assert_eq!(value["box"]["lines"].as_array().unwrap().len(), 4);
    assert_eq!(value["digest"].as_str().unwrap().len(), 64);
}

#[test]
fn invalid_input_exits_with_one() {
    for args in [
        &["T", "--width", "201"][..],
        &["T", "--width", "abc"],
        &["T", "--padding", "11"],
        &["T", "--border-style", "dotted"],
        &["T", "--title-align", "justify"],
        &["T", "--width"],
        &["T", "--unknown-flag"],
        &["T", "--width", "1"],
    ] {
        title_box()
            .args(args)
            .assert()
            .code(1)
            .stderr(predicate::str::is_empty().not());
    }
}

#[test]
fn log_file_records_render_events() {
    let path = std::env::temp_dir().join(format!("title_box_cli_{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let path_arg = path.to_string_lossy().to_string();
    run_ok(&[
        "A title that is too long",
        "-w",
        "12",
        "--full-width-safe",
        "--log-file",
        &path_arg,
    ]);

    let log = std::fs::read_to_string(&path).unwrap();
    let messages: Vec<String> = log
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .map(|event| event["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages.first().map(String::as_str), Some("render_started"));
    assert!(messages.contains(&"full_width_safe_ignored".to_string()));
    assert!(messages.contains(&"title_overflow".to_string()));
    assert!(messages.contains(&"bypass_selected".to_string()));
    assert_eq!(messages.last().map(String::as_str), Some("render_completed"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn control_characters_in_input_keep_lines_exact() {
    let output = title_box()
        .args(["A\nB", "-w", "20", "-l", "x\ty\r", "-l", "\u{1b}[2J"])
        .assert()
        .success()
        .get_output()
        .clone();
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.trim_end_matches('\n').split('\n').collect();
    assert_eq!(lines.len(), 6);
    for line in &lines {
        assert!(!line.chars().any(char::is_control), "{line:?}");
        assert_eq!(str_width(line), 20, "{line:?}");
    }
    assert!(lines[0].contains(" A B "));
}
