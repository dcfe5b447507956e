//! Parser tests for console command line parsing

use rust_morse_input::console::parser::{parse_line, MAX_ARGS};

#[test]
fn test_parse_simple_command() {
    let cmd = parse_line("help");
    assert_eq!(cmd.command, "help");
    assert_eq!(cmd.args[0], None);
    assert_eq!(cmd.arg_count(), 0);
}

#[test]
fn test_parse_command_with_one_arg() {
    let cmd = parse_line("show beep");
    assert_eq!(cmd.command, "show");
    assert_eq!(cmd.args[0], Some("beep"));
    assert_eq!(cmd.args[1], None);
}

#[test]
fn test_parse_command_with_two_args() {
    let cmd = parse_line("set language russian");
    assert_eq!(cmd.command, "set");
    assert_eq!(cmd.arg(0), Some("language"));
    assert_eq!(cmd.arg(1), Some("russian"));
    assert_eq!(cmd.arg_count(), 2);
}

#[test]
fn test_parse_trims_whitespace() {
    let cmd = parse_line("  set\tbeep    on  ");
    assert_eq!(cmd.command, "set");
    assert_eq!(cmd.args[0], Some("beep"));
    assert_eq!(cmd.args[1], Some("on"));
}

#[test]
fn test_parse_empty_line() {
    let cmd = parse_line("");
    assert_eq!(cmd.command, "");
    assert!(cmd.is_empty());

    assert!(parse_line("   ").is_empty());
}

#[test]
fn test_parse_max_args() {
    let cmd = parse_line("set beep on extra ignored");
    assert_eq!(cmd.command, "set");
    assert_eq!(cmd.args, [Some("beep"), Some("on")]);
    assert_eq!(cmd.arg_count(), MAX_ARGS);
    // "extra" and "ignored" are dropped (max 2 args)
    assert_eq!(cmd.arg(2), None);
}
