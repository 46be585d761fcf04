use color_eyre::eyre::Result;

use crate::{
    prompt::ask,
    style::{highlight, panel, seasonal},
};

pub fn run() -> Result<()> {
    println!();
    println!("🎄 {} 🎄", seasonal("A Christmas Tale, MadLib Style!"));
    println!();

    let village_cover = ask("Enter a noun:", "Snow")?;
    let elf = ask("Enter a name:", "Elf")?;
    let elves_make = ask("Enter a plural noun:", "toys")?;
    let children = ask("Enter an adjective:", "good")?;
    let workshop = ask("Enter a place in a house:", "workshop")?;
    let greeting = ask("Enter a greeting:", "Ho, ho, ho!")?;
    let gift_target = ask("Enter a noun:", "child")?;
    let child = ask("Enter a name:", "Timmy")?;
    let feeling = ask("Enter an adjective:", "excited")?;
    let how_worked = ask("Enter an adverb:", "immediately")?;
    let material_one = ask("Enter a noun:", "wood")?;
    let material_two = ask("Enter a noun:", "paint")?;
    let material_three = ask("Enter a noun:", "glitter")?;
    let tool = ask("Enter a noun:", "hammer")?;
    let toy_look = ask("Enter an adjective:", "shiny")?;
    let toy = ask("Enter a noun:", "train")?;
    let vehicle = ask("Enter a vehicle:", "sleigh")?;
    let destination = ask("Enter a place:", "the night sky")?;
    let christmas_was = ask("Enter an adjective:", "magical")?;
    let catchphrase = ask("Enter a phrase:", "Merry Christmas!")?;

    println!();
    let story = format!(
        "Once upon a time, in a small village covered in {}, there was a little\n\
         elf named {}. {} was very excited because Christmas was just around\n\
         the corner. Every year, {} and the other elves worked hard to make\n\
         {} for all the {} children around the world.\n\
         \n\
         One day, Santa Claus called {} to his {}. \"{}, {}! I need your help\n\
         with a special task,\" Santa said. \"We need to make a special toy\n\
         for a {} named {}.\"\n\
         \n\
         {} was {} and {} got to work, gathering {}, {} and {}, and putting\n\
         everything together with a {}. It was hard work, but it was for a\n\
         very special child.\n\
         \n\
         Finally, the toy was ready: a {} {}. \"Thank you, {}! This is\n\
         perfect,\" Santa said. \"Now, let's get ready for Christmas Eve!\"\n\
         \n\
         On Christmas Eve, the elves loaded the {} with all the toys. Santa\n\
         climbed in and waved goodbye. \"{}\" he shouted as the {} took off\n\
         into {}.\n\
         \n\
         It had been a {} Christmas, and {} couldn't wait to do it all again\n\
         next year.\n\
         \n\
         The End.",
        highlight(&village_cover),
        highlight(&elf),
        highlight(&elf),
        highlight(&elf),
        highlight(&elves_make),
        highlight(&children),
        highlight(&elf),
        highlight(&workshop),
        highlight(&greeting),
        highlight(&elf),
        highlight(&gift_target),
        highlight(&child),
        highlight(&elf),
        highlight(&feeling),
        highlight(&how_worked),
        highlight(&material_one),
        highlight(&material_two),
        highlight(&material_three),
        highlight(&tool),
        highlight(&toy_look),
        highlight(&toy),
        highlight(&elf),
        highlight(&vehicle),
        highlight(&catchphrase),
        highlight(&vehicle),
        highlight(&destination),
        highlight(&christmas_was),
        highlight(&elf),
    );

    println!("{}", panel(&story));
    println!();
    println!("🎄 {} 🎄", seasonal("Merry Christmas!"));

    Ok(())
}
