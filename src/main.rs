use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::exit,
    time::Instant,
};

use arith::{display_error, lexer::lexer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_shell(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: arith [file]");
            exit(2);
        }
    }
}

fn run_file(file_path: &str) {
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    match tokens {
        Ok(tokens) => {
            println!("Tokenized in {:?}", start.elapsed());

            for token in &tokens {
                println!("{}", token);
            }
        }
        Err(error) => {
            display_error(&error);
            exit(1);
        }
    }
}

fn run_shell() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("arith > ");
        io::stdout().flush().unwrap();

        let line = match lines.next() {
            Some(line) => line.expect("Failed to read from stdin!"),
            None => break,
        };

        match tokenize(line, None) {
            Ok(tokens) => {
                let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
                println!("[{}]", rendered.join(", "));
            }
            Err(error) => display_error(&error),
        }
    }
}
