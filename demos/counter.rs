use argz::{parse, About, Arg, Ids};
use std::path::PathBuf;

fn main() {
    let mut count: i32 = 3;
    let mut verbose: bool = false;
    let mut label: Option<String> = None;
    let mut output: Option<PathBuf> = None;
    let mut about = About::new("Count things, out loud if asked.", "0.3.0");

    let mut options = vec![
        Arg::new(Ids::new("count").alias('c'), &mut count, "how many to count"),
        Arg::new(Ids::new("verbose"), &mut verbose, "print every step"),
        Arg::new(Ids::new("label").alias('l'), &mut label, "what to call each step"),
        Arg::new(Ids::new("output").alias('o'), &mut output, "where to write the tally"),
    ];
    parse(&mut about, &mut options);
    drop(options);

    if about.printed_help() || about.printed_version() {
        return;
    }

    let label = label.unwrap_or_else(|| "step".to_string());

    for i in 1..=count {
        if verbose {
            println!("{label} {i} of {count}");
        } else {
            println!("{label} {i}");
        }
    }

    if let Some(path) = output {
        if let Err(e) = std::fs::write(&path, format!("{count}\n")) {
            eprintln!("Cannot write '{}': {e}", path.display());
            std::process::exit(1);
        }
    }
}
