use std::env;

use vocab_rs::lookup::IpaDict;
use vocab_rs::parser::{format_word_list, WordListParser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Directory holding open-dict-data files (en_UK.txt, en_US.txt).
    let data_dir = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let mut dict = IpaDict::new(&data_dir);
    dict.load_variety("en_UK")?;
    dict.load_variety("en_US")?;
    println!(
        "Loaded {} words across varieties {:?}",
        dict.word_count(),
        dict.varieties()
    );

    let parser = WordListParser::with_lookup(dict);
    let entries = parser.parse_text(
        "1. design: (v) thiết kế\n\
         2. buy - bought - bought: (v) mua\n\
         rainforest: (n) rừng mưa nhiệt đới",
    );

    println!("{}", format_word_list(&entries));
    Ok(())
}
