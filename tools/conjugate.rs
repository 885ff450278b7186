/// Conjugate: prints every form of each verb in a lexicon.
///
/// Usage: conjugate [--lexicon <file.ron>] [--no-builtin] [verb...]
use narrative_syntax::core::lexicon::Lexicon;
use narrative_syntax::schema::verb::Verb;
use narrative_syntax::schema::word::Word;
use std::env;
use std::process;

const USAGE: &str = "Usage: conjugate [--lexicon <file.ron>] [--no-builtin] [verb...]";

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut lexicon_files = Vec::new();
    let mut builtin = true;
    let mut requested = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lexicon" => {
                i += 1;
                match args.get(i) {
                    Some(path) => lexicon_files.push(path.clone()),
                    None => {
                        eprintln!("Error: --lexicon needs a path");
                        process::exit(1);
                    }
                }
            }
            "--no-builtin" => builtin = false,
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
            other => requested.push(other.to_string()),
        }
        i += 1;
    }

    let mut builder = Lexicon::builder();
    if builtin {
        builder = builder.builtin();
    }
    for path in &lexicon_files {
        builder = builder.lexicon_file(path);
    }
    let lexicon = match builder.build() {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Error: failed to load lexicon: {}", e);
            process::exit(1);
        }
    };

    // Verbs missing from the lexicon are conjugated as regular verbs.
    let verbs: Vec<Verb> = if requested.is_empty() {
        lexicon.verbs().to_vec()
    } else {
        let mut verbs = Vec::with_capacity(requested.len());
        for base in &requested {
            match lexicon.verb(base) {
                Some(verb) => verbs.push(verb.clone()),
                None => match Word::new(base.as_str()) {
                    Ok(word) => verbs.push(Verb::regular(word)),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                },
            }
        }
        verbs
    };

    if verbs.is_empty() {
        println!("No verbs to conjugate.");
        return;
    }

    println!(
        "{:<12} {:<14} {:<12} {:<12} {:<12} {}",
        "base", "infinitive", "gerund", "past", "participle", "kind"
    );
    for verb in &verbs {
        let c = verb.conjugation();
        println!(
            "{:<12} {:<14} {:<12} {:<12} {:<12} {}",
            c.base,
            c.infinitive,
            c.gerund,
            c.simple_past,
            c.past_participle,
            if c.irregular { "irregular" } else { "regular" }
        );
    }
}
