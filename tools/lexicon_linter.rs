/// Lexicon Linter: validates lexicon files and flags suspicious entries.
///
/// Usage: lexicon_linter <lexicon_dir|file.ron> [--strict]
use narrative_syntax::core::lexicon::Lexicon;
use narrative_syntax::core::morphology::form_root;
use narrative_syntax::schema::verb::Verb;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: lexicon_linter <lexicon_dir|file.ron> [--strict]");
        process::exit(0);
    }

    let lexicon_path = Path::new(&args[1]);
    let strict = args[2..].iter().any(|a| a == "--strict");

    let files = if lexicon_path.is_file() {
        vec![lexicon_path.to_path_buf()]
    } else if lexicon_path.is_dir() {
        let mut files = Vec::new();
        collect_ron_files(lexicon_path, &mut files);
        files.sort();
        files
    } else {
        eprintln!("ERROR: Path '{}' does not exist", lexicon_path.display());
        process::exit(1);
    };

    let mut errors = Vec::new();
    let mut loaded = Vec::new();
    for path in &files {
        match Lexicon::load_from_ron(path) {
            Ok(lexicon) => {
                println!("  Loaded: {}", path.display());
                loaded.push((path.clone(), lexicon));
            }
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    let (warnings, notes) = lint_lexicons(&loaded);

    println!("\n=== Lexicon Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for note in &notes {
        println!("NOTE: {}", note);
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} files, {} errors, {} warnings, {} notes",
        files.len(),
        errors.len(),
        warnings.len(),
        notes.len()
    );

    if !errors.is_empty() || (strict && !warnings.is_empty()) {
        process::exit(1);
    }
}

fn collect_ron_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_ron_files(&path, files);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                files.push(path);
            }
        }
    }
}

fn lint_lexicons(loaded: &[(PathBuf, Lexicon)]) -> (Vec<String>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut notes = Vec::new();

    // Headwords defined in more than one file
    let mut seen: HashMap<String, &Path> = HashMap::new();
    for (path, lexicon) in loaded {
        let headwords = lexicon
            .nouns()
            .iter()
            .map(|n| ("noun", n.singular().to_string()))
            .chain(
                lexicon
                    .proper_nouns()
                    .iter()
                    .map(|p| ("proper noun", p.name.to_string())),
            )
            .chain(lexicon.verbs().iter().map(|v| ("verb", v.base().to_string())));

        for (kind, headword) in headwords {
            let key = format!("{}:{}", kind, headword);
            if let Some(first) = seen.get(&key) {
                warnings.push(format!(
                    "{} '{}' defined in {} and again in {}",
                    kind,
                    headword,
                    first.display(),
                    path.display()
                ));
            } else {
                seen.insert(key, path);
            }
        }

        if lexicon.is_empty() {
            warnings.push(format!("{} defines no entries", path.display()));
        }
    }

    // Regular verbs whose root differs from the base beyond dropping a
    // final e: doubled consonants and y to i.
    for (path, lexicon) in loaded {
        for verb in lexicon.regular_verbs() {
            if let Some(note) = root_note(verb) {
                notes.push(format!("{}: {}", path.display(), note));
            }
        }
    }

    (warnings, notes)
}

fn root_note(verb: &Verb) -> Option<String> {
    let base = verb.base().as_str();
    let root = form_root(verb.base());
    let root = root.as_str();

    if root.len() > base.len() {
        let kind = if base.ends_with("ic") {
            "k inserted"
        } else {
            "final consonant doubled"
        };
        Some(format!(
            "regular verb '{}' forms '{}' and '{}' ({})",
            base,
            verb.gerund(),
            verb.simple_past(),
            kind
        ))
    } else if base.ends_with('y') && root.ends_with('i') {
        Some(format!(
            "regular verb '{}' forms '{}' (y to i)",
            base,
            verb.simple_past()
        ))
    } else {
        None
    }
}
