//! The one-shot holiday programs: prompt, compute, print.

pub mod astros;
pub mod heart_rate;
pub mod madlib;
pub mod payoff;
pub mod trivia;
pub mod twelve_days;
