//! Stdin prompt helpers for the interactive loop

use std::io::{self, Write};

pub fn get_input(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    input.trim().to_string()
}

pub fn get_input_with_default(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    let input = input.trim();
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}

/// Prompt for an integer, re-asking until one parses. An empty answer takes
/// the default.
pub fn get_i64(prompt: &str, default: i64) -> i64 {
    loop {
        let raw = get_input_with_default(prompt, &default.to_string());
        match raw.parse() {
            Ok(value) => return value,
            Err(_) => println!("❌ Enter a whole number"),
        }
    }
}

/// Prompt for a number, re-asking until one parses.
pub fn get_f64(prompt: &str, default: f64) -> f64 {
    loop {
        let raw = get_input_with_default(prompt, &default.to_string());
        match raw.parse() {
            Ok(value) => return value,
            Err(_) => println!("❌ Enter a number"),
        }
    }
}

/// Prompt for a yes/no answer.
pub fn get_bool(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        let raw = get_input(&format!("{} [{}]: ", prompt, hint));
        match raw.to_lowercase().as_str() {
            "" => return default,
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("❌ Answer y or n"),
        }
    }
}

/// Prompt for multi-line text, terminated by a single `.` line.
pub fn get_lines(prompt: &str) -> String {
    println!("{} (finish with a single '.' line):", prompt);
    let mut lines = Vec::new();
    loop {
        let line = get_input("");
        if line == "." {
            break;
        }
        lines.push(line);
    }
    lines.join("\n")
}
