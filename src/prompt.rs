use std::{
    io::{self, Write},
    str::FromStr,
};

use color_eyre::eyre::{eyre, Result};
use crossterm::style::Stylize;

/// Ask `question` until the answer parses as `T` and passes `validate`.
/// Parse failures print `parse_error`, validation failures print their own
/// message; both re-prompt.
pub fn prompt<T, F>(question: &str, parse_error: &str, validate: F) -> Result<T>
where
    T: FromStr,
    F: Fn(&T) -> Result<(), String>,
{
    loop {
        let line = read_answer(question)?;
        match line.parse::<T>() {
            Ok(value) => match validate(&value) {
                Ok(()) => return Ok(value),
                Err(message) => println!("{}", message.red()),
            },
            Err(_) => println!("{}", parse_error.red()),
        }
    }
}

/// Ask a free-form question with a default used for empty answers.
pub fn ask(question: &str, default: &str) -> Result<String> {
    let line = read_answer(&format!("{question} [{default}]"))?;
    if line.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(line)
    }
}

fn read_answer(question: &str) -> Result<String> {
    print!("{} ", question.green());
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(eyre!("input stream closed"));
    }
    Ok(line.trim().to_string())
}
