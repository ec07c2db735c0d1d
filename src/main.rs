use log::{debug, warn};
use name_abbrev::{
    abbreviate_business_name, abbreviate_name, format_name, FormatOptions, NameRecord,
    PersonName, Rendering,
};
use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

#[cfg_attr(rustfmt, rustfmt_skip)]
const USAGE: &str = "
Usage:
    name_abbrev abbreviate <locale> <given> <family>
    name_abbrev format <locale> <given> <family> [--full]
    name_abbrev business <name>...
    name_abbrev render <locale> -

With `abbreviate`, prints the abbreviation of the name, or its short form in
<locale> if it can't be abbreviated. With `format`, prints the name as shown
in <locale>, in full if `--full` is given. Pass an empty string for a missing
part.

With `business`, prints the abbreviation of the business name, or the name
itself if it can't be abbreviated.

With `render`, reads newline-separated JSON objects with optional `givenName`
and `familyName` fields from stdin, and prints every display form of each as
JSON, one per line. Lines which can't be read print as empty lines.

Set RUST_LOG=trace to see why names aren't abbreviated.
";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    debug!("arguments: {:?}", args.get(1..));

    match args.get(1).map(String::as_str) {
        Some("abbreviate") if args.len() == 5 => {
            let name = person_name(&args[3], &args[4]);
            println!("{}", abbreviate_name(&name, &args[2], None));
        }
        Some("format") if args.len() == 5 || (args.len() == 6 && args[5] == "--full") => {
            let name = person_name(&args[3], &args[4]);
            let options = FormatOptions {
                full: args.len() == 6,
            };
            println!("{}", format_name(&name, &args[2], options));
        }
        Some("business") if args.len() > 2 => {
            let name = args[2..].join(" ");
            println!("{}", abbreviate_business_name(Some(&name), None));
        }
        Some("render") if args.len() == 4 && args[3] == "-" => {
            render_mode(&args[2]);
        }
        _ => {
            writeln!(&mut io::stderr(), "{}", USAGE).ok();
            process::exit(64);
        }
    }
}

fn person_name<'a>(given: &'a str, family: &'a str) -> PersonName<'a> {
    let part = |s: &'a str| if s.is_empty() { None } else { Some(s) };
    PersonName::new(part(given), part(family))
}

fn render_mode(locale: &str) {
    let reader = BufReader::new(io::stdin());
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stopped reading input: {}", e);
                break;
            }
        };

        let output = match NameRecord::from_json(&line) {
            Ok(record) => Rendering::new(&record.as_person_name(), locale, None).to_json(),
            Err(e) => {
                debug!("skipping unreadable line: {}", e);
                String::new()
            }
        };

        if writeln!(&mut io::stdout(), "{}", output).is_err() {
            break;
        }
    }
}
