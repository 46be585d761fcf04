use color_eyre::eyre::Result;
use crossterm::style::Stylize;

use crate::prompt::prompt;

pub fn run() -> Result<()> {
    println!();
    println!("{} {} {} {}", "Credit".red(), "Card".green(), "Payoff".red(), "Calculator!".green());
    println!();

    let apr: f64 = prompt("What is the APR on the card (as a percent)?", "That's not a valid rate", |apr| {
        if *apr < 0.0 {
            Err("The APR must be greater than or equal to zero.".to_string())
        } else if *apr > 100.0 {
            Err("The APR cannot be greater than 100.".to_string())
        } else {
            Ok(())
        }
    })?;

    let balance: f64 = prompt("What is the balance on the card?", "That's not a valid balance", |balance| {
        if *balance <= 0.0 {
            Err("The balance must be greater than zero.".to_string())
        } else {
            Ok(())
        }
    })?;

    let payment: f64 = prompt("How much do you pay each month?", "That's not a valid amount.", |payment| {
        if *payment <= 0.0 {
            Err("The amount must be greater than zero.".to_string())
        } else {
            Ok(())
        }
    })?;

    println!();
    match months_until_payoff(balance, payment, apr) {
        Some(months) => println!(
            "It will take you {months} months to pay off ${balance:.2} if you only pay ${payment:.2} per month."
        ),
        None => println!(
            "{}",
            format!("${payment:.2} per month does not even cover the interest; the balance will never be paid off.")
                .red()
        ),
    }
    println!();

    Ok(())
}

/// Months to clear `balance` paying `payment` per month at `apr` percent:
/// `n = -(1/30) * ln(1 + b/p * (1 - (1+i)^30)) / ln(1+i)` with daily rate
/// `i = apr / 365 / 100`, rounded up. Zero APR degenerates to `b/p`; a
/// payment that cannot keep up with interest returns `None`.
pub fn months_until_payoff(balance: f64, payment: f64, apr: f64) -> Option<f64> {
    if apr == 0.0 {
        return Some((balance / payment).ceil());
    }
    let daily_rate = apr / 365.0 / 100.0;
    let inner = 1.0 + balance / payment * (1.0 - (1.0 + daily_rate).powi(30));
    if inner <= 0.0 {
        return None;
    }
    Some((-(1.0 / 30.0) * inner.ln() / (1.0 + daily_rate).ln()).ceil())
}
