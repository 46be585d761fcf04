use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::style;

const ASTROS_URL: &str = "http://api.open-notify.org/astros.json";

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    message: String,
    number: u32,
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct Person {
    name: String,
    craft: String,
}

pub async fn run() -> Result<()> {
    log::info!("fetching {ASTROS_URL}");
    let payload: Payload = reqwest::get(ASTROS_URL).await?.error_for_status()?.json().await?;
    log::debug!("astros response message: {}", payload.message);

    println!("People in Space!");
    let rows: Vec<Vec<String>> =
        payload.people.iter().map(|p| vec![p.name.clone(), p.craft.clone()]).collect();
    println!("{}", style::table(&["Person", "Craft"], &rows));
    println!("There are currently {} people in space!", payload.number);

    Ok(())
}
