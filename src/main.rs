use prj_reader::PrjReader;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path-to-project-file> [--keyword <NAME>]",
            args[0]
        );
        std::process::exit(1);
    }

    let path = &args[1];
    let mut keyword: Option<&str> = None;
    // Parse --keyword argument
    if let Some(keyword_idx) = args.iter().position(|arg| arg == "--keyword") {
        if let Some(name) = args.get(keyword_idx + 1) {
            keyword = Some(name);
        } else {
            eprintln!("ERROR: --keyword flag requires an argument.");
            std::process::exit(1);
        }
    }

    println!("Reading project file: {}", path);
    println!("{}", "=".repeat(60));

    match PrjReader::open(path) {
        Ok(reader) => {
            println!("Text lines retained: {}", reader.line_count());

            let document = match keyword {
                Some(name) => {
                    println!("Extracting keyword: {}", name);
                    reader.keyword(name)
                }
                None => reader.document(),
            };
            println!("Top-level sections: {}", document.len());
            println!("{}", "=".repeat(60));

            match serde_json::to_string_pretty(&document) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("ERROR: Failed to render document as JSON");
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read project file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
