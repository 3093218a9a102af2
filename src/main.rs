use chrono::NaiveDateTime;
use kijitsu::{Context, resolve_with};
use std::io::{self, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context { reference_time: config.reference_time };
    match resolve_with(&config.input, &ctx) {
        Some(resolved) => println!("{}\t{}", resolved.format(), resolved.stage),
        None => {
            let fallback = kijitsu::fallback_due(config.reference_time);
            println!("{}\t(unresolved; reference + 7 days)", fallback.format("%Y-%m-%dT%H:%M"));
        }
    }
}

struct CliConfig {
    input: String,
    reference_time: NaiveDateTime,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_time = chrono::Local::now().naive_local();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("kijitsu {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = parse_reference(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_time = parse_reference(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_time })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "kijitsu {version}

Japanese due-date expression resolver CLI.

Usage:
  kijitsu [OPTIONS] [--] <input...>
  kijitsu [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to resolve. If omitted, reads remaining
                             args or stdin when no args are provided.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS.
                             Default: the current local time.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Output:
  One line: the resolved timestamp (YYYY-MM-DDTHH:MM) and the stage that
  matched, tab separated. Unresolved input prints the reference + 7 days
  fallback at 12:00.

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
