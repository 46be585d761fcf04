use std::path::Path;

use color_eyre::eyre::Result;
use crossterm::style::Stylize;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::{
    prompt::prompt,
    style::{panel, seasonal},
};

const MINIMUM_QUESTIONS: usize = 5;
const MAXIMUM_QUESTIONS: usize = 100;

/// Question file looked for beside the binary; missing or unreadable files
/// fall back to the embedded set.
const DATA_FILE: &str = "data.json";
const EMBEDDED_QUESTIONS: &str = include_str!("../../data/trivia.json");

#[derive(Debug, Clone, Deserialize)]
pub struct TriviaQuestion {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: Vec<usize>,
    #[serde(default)]
    pub explanation: Option<String>,
}

pub fn run() -> Result<()> {
    println!("🎄 {} 🎄", seasonal("Christmas Trivia!"));
    println!();

    let questions = load_questions()?;
    let maximum = questions.len().min(MAXIMUM_QUESTIONS);
    let requested: usize = prompt(
        "How many questions would you like to answer?",
        "Please enter a number.",
        |n| {
            if (MINIMUM_QUESTIONS..=maximum).contains(n) {
                Ok(())
            } else {
                Err(format!(
                    "Anything less than {MINIMUM_QUESTIONS} questions disappoints Santa and we only have {maximum} questions total."
                ))
            }
        },
    )?;

    println!("Great! You will be answering {requested} questions.");
    println!("{}", format!("{} questions loaded! Selecting {requested} for you!", questions.len()).green());
    println!();

    let mut pool = questions;
    pool.shuffle(&mut rand::thread_rng());
    let selected = &pool[..requested.min(pool.len())];

    let mut correct = 0;
    for question in selected {
        if ask_question(question)? {
            correct += 1;
        }
    }

    println!(
        "{}",
        panel(&format!(
            "You answered {} out of {} correctly!\nKeep spreading the cheer!",
            correct.to_string().green(),
            requested.to_string().yellow()
        ))
    );
    Ok(())
}

fn ask_question(question: &TriviaQuestion) -> Result<bool> {
    println!("{}", question.question.as_str().bold());
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {option}", (i + 1).to_string().yellow());
    }

    let options = question.options.len();
    let selection: usize = prompt("Select an option:", "Invalid input. Please enter a number.", |n| {
        if (1..=options).contains(n) {
            Ok(())
        } else {
            Err(format!("Please pick an option between 1 and {options}."))
        }
    })?;

    let correct = question.answer.contains(&(selection - 1));
    if correct {
        println!("{}", "Correct!".green().bold());
    } else {
        let right = question
            .answer
            .first()
            .and_then(|&i| question.options.get(i))
            .map(String::as_str)
            .unwrap_or("Unknown");
        println!("{} The right answer is {}.", "Incorrect.".red().bold(), right.green());
    }
    if let Some(explanation) = question.explanation.as_deref().filter(|e| !e.trim().is_empty()) {
        println!("{}", explanation.italic());
    }
    println!();
    Ok(correct)
}

fn load_questions() -> Result<Vec<TriviaQuestion>> {
    let content = match std::fs::read_to_string(Path::new(DATA_FILE)) {
        Ok(content) => content,
        Err(_) => EMBEDDED_QUESTIONS.to_string(),
    };
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_embedded_questions_parse() {
        let questions: Vec<TriviaQuestion> = serde_json::from_str(EMBEDDED_QUESTIONS).unwrap();
        assert!(questions.len() >= MINIMUM_QUESTIONS);
        for q in &questions {
            assert!(!q.options.is_empty(), "{} has no options", q.question);
            assert!(
                q.answer.iter().all(|&i| i < q.options.len()),
                "{} has an out-of-range answer",
                q.question
            );
        }
    }

    #[test]
    fn test_question_fields_are_optional() {
        let q: TriviaQuestion =
            serde_json::from_str(r#"{"question": "Eggnog: yes or no?"}"#).unwrap();
        assert_eq!(q.kind, None);
        assert!(q.options.is_empty());
        assert!(q.answer.is_empty());
        assert_eq!(q.explanation, None);
    }
}
