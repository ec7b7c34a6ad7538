use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: fretwise <session.yaml> [output]");
        eprintln!("       fretwise --yaml <session.yaml> [output]");
        process::exit(1);
    }

    let mut as_yaml = false;
    let mut input_path = &args[1];
    let mut output_path: Option<&String> = args.get(2);

    // Parse flags
    if args[1] == "--yaml" {
        as_yaml = true;
        if args.len() < 3 {
            eprintln!("Usage: fretwise --yaml <session.yaml> [output]");
            process::exit(1);
        }
        input_path = &args[2];
        output_path = args.get(3);
    }

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    // Transpose
    let (input, result) = match fretwise::transpose_session(&source) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Transposition error: {}", e);
            process::exit(1);
        }
    };

    let skipped = input.positions.len() - result.original_notes.len();
    if skipped > 0 {
        eprintln!("Skipped {} invalid position(s)", skipped);
    }

    let title = input.title.as_deref();
    let output = if as_yaml {
        match fretwise::render_yaml(title, &result) {
            Ok(yaml) => yaml,
            Err(e) => {
                eprintln!("Error rendering YAML: {}", e);
                process::exit(1);
            }
        }
    } else {
        fretwise::render_report(title, &result)
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote report to {}", path);
        }
        None => {
            print!("{}", output);
        }
    }
}
