//! Quordle Daily CLI
//!
//! Prints the day's four secret words as a JSON array on stdout. A single
//! optional integer argument shifts the date by that many days, so
//! `quordle-daily -1` reprints yesterday's words and `quordle-daily 1`
//! previews tomorrow's. An argument that is not an integer is ignored,
//! matching the forgiving argument handling of the web engine.

use std::env;

use chrono::Local;
use quordle_daily::{daily, excluded_words, load_word_list, QuartetDrawer};

fn main() {
    let offset = daily::parse_offset(env::args().nth(1).as_deref());
    let date = daily::offset_date(Local::now().date_naive(), offset);

    let drawer = match QuartetDrawer::new(load_word_list(), excluded_words()) {
        Ok(drawer) => drawer,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match daily::quartet_for_date(date, &drawer) {
        Ok(quartet) => {
            let json = serde_json::to_string(&quartet).expect("four strings always serialize");
            println!("{json}");
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
