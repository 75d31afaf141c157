#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;

/// A cursor over source text.
///
/// Tracks the char offset plus the 0-based line and column used for
/// diagnostics. The file name and the source text itself are shared,
/// so cloning a Position to freeze an error span is cheap.
#[derive(Debug, Clone)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub col: usize,
    pub file: Rc<String>,
    pub text: Rc<String>,
}

impl Position {
    pub fn start(file: Rc<String>, text: Rc<String>) -> Self {
        Position {
            index: 0,
            line: 0,
            col: 0,
            file,
            text,
        }
    }

    /// Consumes one character. `current_char` must be the character at
    /// `index`, since it decides whether a new line starts.
    pub fn advance(&mut self, current_char: char) {
        self.index += 1;
        self.col += 1;

        if current_char == '\n' {
            self.line += 1;
            self.col = 0;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the char offset `index` in `text`.
///
/// Returns the 1-based line number, the line's text and the offset of
/// `index` within that line.
pub fn get_line_at_position(text: &str, index: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;

    for line in text.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&index) {
            let line_pos = index - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Position exceeds source length");
}


pub fn display_error(error: &Error) {
    /*
        Error: name (tip)
        -> final.arith
           |
        20 | 1 + #
           | ----^
    */

    let position = &error.get_span().start;
    let (line, line_text, line_pos) = get_line_at_position(&position.text, position.index);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos - removed_whitespace + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
