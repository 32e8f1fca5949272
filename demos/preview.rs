use std::env;
use std::fs;

use vocab_rs::parser::{format_word_list, WordListParser};

const SAMPLE: &str = "\
1. design: (v) thiết kế
2. buy - bought - bought: (v) mua

rainforest: (n) rừng mưa nhiệt đới /ˈreɪnfɒrɪst/
climate change: biến đổi khí hậu /ˈklaɪmət tʃeɪndʒ/
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let parser = WordListParser::new();
    let entries = parser.parse_text(&text);
    println!("Parsed {} entries\n", entries.len());
    println!("{}", format_word_list(&entries));

    Ok(())
}
