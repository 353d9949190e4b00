use ramsey_exhaustive::search::{ram_with, LogObserver, SearchConfig, SearchOutcome};
use std::io::{self, BufRead, Write};

fn main() {
    let mut cfg = SearchConfig::default();
    let mut trace = false;
    let mut progress = false;
    let mut validate_only = false;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-log" | "--log" => {
                trace = true;
                i += 1;
            }
            "-pro" | "--progress" => {
                progress = true;
                i += 1;
            }
            "--limit" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.safety_limit = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--test" | "--validate" => {
                validate_only = true;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let level = if trace {
        "trace"
    } else if progress {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if validate_only {
        match ramsey_exhaustive::validate::validate_known_witnesses() {
            Ok(()) => {
                println!("Validation OK: bundled witness graphs are correct.");
                return;
            }
            Err(e) => {
                eprintln!("Validation FAILED: {e}");
                std::process::exit(1);
            }
        }
    }

    println!("Ram calculator.");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let a = prompt(&mut input, "Enter value for a (clique minimum): ");
    let b = prompt(&mut input, "Enter value for b (coclique minimum): ");

    match ram_with(a, b, &cfg, &mut LogObserver) {
        Ok(SearchOutcome::Found(n)) => println!("Ram({a}, {b}) = {n}."),
        Ok(SearchOutcome::SafetyLimitReached { limit }) => {
            println!("No order up to the safety limit of {limit} works: Ram({a}, {b}) > {limit}.");
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> i64 {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => {
            eprintln!("error: unexpected end of input");
            std::process::exit(2);
        }
        Ok(_) => {}
    }
    line.trim().parse().unwrap_or_else(|_| {
        eprintln!("error: {:?} is not an integer", line.trim());
        std::process::exit(2)
    })
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  ramsey-exhaustive [-log] [-pro] [--limit N]\n  ramsey-exhaustive --validate\n\nReads a and b from standard input and prints R(a, b).\n\nOptions:\n  -log                     Trace every enumerated graph state\n  -pro                     Report progress once per graph order\n  --limit N                Largest order to try (default: 30)\n  --validate               Validate bundled witness graphs (fast, deterministic)\n\nRUST_LOG overrides the log level chosen by -log/-pro.\n"
    );
    std::process::exit(code)
}
