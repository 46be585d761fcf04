use color_eyre::eyre::Result;
use crossterm::style::Stylize;

use crate::{prompt::prompt, style};

const LOWER_INTENSITY: u32 = 55;
const UPPER_INTENSITY: u32 = 95;
const INTENSITY_STEP: u32 = 5;

pub fn run() -> Result<()> {
    println!();
    println!("{}", "Karvonen Heart Rate".green());
    println!();

    let age: i32 = prompt("How old are you?", "That's not a valid age", |age| match age {
        ..=16 => Err("You must at least be 16 years old.".to_string()),
        101.. => Err("You must be younger than 100.".to_string()),
        _ => Ok(()),
    })?;

    let resting: i32 =
        prompt("What is your resting heart rate?", "That's not a valid heart rate", |rate| match rate {
            ..=20 => Err("Your resting heart rate should be greater than 20.".to_string()),
            101.. => Err("Your resting heart rate should NOT be greater than 100.".to_string()),
            _ => Ok(()),
        })?;

    println!();
    println!("Your maximum heart rate: {}", 220 - age);
    println!();

    let rows: Vec<Vec<String>> = (LOWER_INTENSITY..=UPPER_INTENSITY)
        .step_by(INTENSITY_STEP as usize)
        .map(|percent| {
            let target = target_rate(age, resting, percent as f64 / 100.0);
            vec![format!("{percent} %"), format!("{target} bpm")]
        })
        .collect();
    println!("{}", style::table(&["Intensity", "Rate"], &rows));

    Ok(())
}

/// Karvonen formula: `((220 - age - resting) * intensity) + resting`,
/// truncated to a whole beat.
fn target_rate(age: i32, resting: i32, intensity: f64) -> i32 {
    ((220 - age - resting) as f64 * intensity + resting as f64) as i32
}
