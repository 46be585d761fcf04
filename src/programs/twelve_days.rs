use color_eyre::eyre::{eyre, Result};

const VERSE_DATA: &str = include_str!("../../data/twelve_days.csv");

pub fn run() -> Result<()> {
    println!("The 12 Days of Christmas");
    println!();
    for verse in verses(VERSE_DATA)? {
        println!("{verse}");
    }
    Ok(())
}

/// Build the cumulative verses. Each verse carries the gift lines of every
/// previous day, with day one's line rewritten as "And a partridge ..." from
/// day two onward.
fn verses(csv: &str) -> Result<Vec<String>> {
    let mut verses = Vec::new();
    let mut previous_gifts = String::new();

    for (day, line) in csv.lines().skip(1).filter(|l| !l.trim().is_empty()).enumerate() {
        let day = day + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 6 {
            return Err(eyre!("malformed verse row: {line}"));
        }

        let ordinal = fields[1];
        let gift = if day > 1 { pluralize(fields[2]) } else { fields[2].to_string() };
        let doing = field(fields[3]);
        let adjective = field(fields[4]);
        let location = field(fields[5]);

        let opening = format!("On the {ordinal} day of Christmas my true love gave to me");
        let gift_line = [number_word(day), adjective, &gift, doing, location]
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");

        let gifts = format!("{gift_line}\n{previous_gifts}");
        verses.push(format!("{opening}\n{gifts}"));

        previous_gifts = if day == 1 { format!("And {}", gifts.replace('A', "a")) } else { gifts };
    }

    Ok(verses)
}

fn field(raw: &str) -> &str {
    if raw == "NA" {
        ""
    } else {
        raw
    }
}

fn number_word(day: usize) -> &'static str {
    match day {
        1 => "A",
        2 => "two",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        10 => "ten",
        11 => "eleven",
        12 => "twelve",
        _ => "??",
    }
}

fn pluralize(word: &str) -> String {
    if word == "goose" {
        return "geese".to_string();
    }

    // -s, -x, -sh, -ch, -ss or -z
    if ["s", "x", "sh", "ch", "ss", "z"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('y') {
        // lady -> ladies, but day -> days
        match stem.chars().last() {
            Some(c) if !"aeiou".contains(c) => return format!("{stem}ies"),
            _ => return format!("{word}s"),
        }
    }

    format!("{word}s")
}
