//! Exit codes: 0 for success (including a player quitting), 2 for errors.
//! Errors go to stderr, never stdout.

use pig_cli::run_with_input;
use std::io::Cursor;

fn code_of(args: &[&str]) -> (i32, Vec<u8>, Vec<u8>) {
    let mut stdin = Cursor::new(Vec::new());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut stdin, &mut out, &mut err);
    (code, out, err)
}

#[test]
fn rolls_returns_zero() {
    let (code, out, err) = code_of(&["pig", "rolls", "--seed", "1", "--count", "6"]);
    assert_eq!(code, 0);
    assert!(!out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn version_returns_zero() {
    let (code, out, _) = code_of(&["pig", "--version"]);
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("pig"));
}

#[test]
fn single_player_table_returns_two() {
    let (code, out, err) = code_of(&["pig", "play", "--players", "1"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(!err.is_empty());
}

#[test]
fn zero_rolls_returns_two() {
    let (code, _, err) = code_of(&["pig", "rolls", "--count", "0"]);
    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("Commands:"));
}

#[test]
fn missing_subcommand_returns_two() {
    let (code, out, _) = code_of(&["pig"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
}
