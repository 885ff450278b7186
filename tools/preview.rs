/// Preview: interactive shell for conjugating verbs and rendering sentences.
///
/// Usage: preview [--lexicon <path>] [--no-builtin] [--seed <n>]
///
/// Commands:
///   verb <base>                                show every form of a verb
///   say <subject> <tense> <verb> [object]      render a simple sentence
///   sample <n>                                 render n random sentences
///   seed <n>                                   reseed the sampler
///   help                                       list commands
///   quit                                       exit
use narrative_syntax::core::lexicon::Lexicon;
use narrative_syntax::core::phrase::{NounPhrase, NounTag, VerbPhrase, VerbTag};
use narrative_syntax::core::render::Render;
use narrative_syntax::core::sampler::SentenceSampler;
use narrative_syntax::core::sentence::Sentence;
use narrative_syntax::schema::noun::{PersonalPronoun, ProperNoun};
use narrative_syntax::schema::verb::Verb;
use narrative_syntax::schema::word::Word;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    let mut lexicon_paths = Vec::new();
    let mut builtin = true;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lexicon" if i + 1 < args.len() => {
                i += 1;
                lexicon_paths.push(args[i].clone());
            }
            "--no-builtin" => builtin = false,
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut builder = Lexicon::builder();
    if builtin {
        builder = builder.builtin();
    }
    for path in &lexicon_paths {
        builder = if Path::new(path).is_dir() {
            builder.lexicon_dir(path)
        } else {
            builder.lexicon_file(path)
        };
    }
    let lexicon = match builder.build() {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} nouns, {} proper nouns, {} verbs",
        lexicon.nouns().len(),
        lexicon.proper_nouns().len(),
        lexicon.verbs().len()
    );
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let mut current_seed = seed;
    let mut sampler = SentenceSampler::new(&lexicon, current_seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "verb" => {
                if parts.len() < 2 {
                    println!("Usage: verb <base>");
                    continue;
                }
                match lookup_verb(&lexicon, parts[1]) {
                    Ok(verb) => print_conjugation(&verb),
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "say" => {
                if parts.len() < 4 {
                    println!("Usage: say <subject> <tense> <verb> [object]");
                    println!("  subject/object: i, he, she, it, they, a proper noun, or a noun");
                    println!("  tense: past, present, plural, gerund, participle");
                    continue;
                }
                match build_sentence(&lexicon, &parts[1..]) {
                    Ok(sentence) => match sentence.render() {
                        Ok(text) => println!("{}", text),
                        Err(e) => println!("ERROR: {}", e),
                    },
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "sample" => {
                let count: usize = match parts.get(1).map(|s| s.parse()) {
                    None => 1,
                    Some(Ok(n)) if n > 0 => n,
                    Some(_) => {
                        println!("Invalid count: {}", parts[1]);
                        continue;
                    }
                };
                let sentences = sampler.sample_many(count);
                if sentences.is_empty() {
                    println!("Lexicon needs at least one noun and one verb to sample.");
                    continue;
                }
                for sentence in &sentences {
                    match sentence.render() {
                        Ok(text) => println!("  {}", text),
                        Err(e) => println!("  ERROR: {}", e),
                    }
                }
            }
            "seed" => {
                if parts.len() < 2 {
                    println!("Current seed: {}", current_seed);
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(s) => {
                        current_seed = s;
                        sampler = SentenceSampler::new(&lexicon, current_seed);
                        println!("Seed set to {}", current_seed);
                    }
                    Err(_) => {
                        println!("Invalid seed: {}", parts[1]);
                    }
                }
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", cmd);
            }
        }
    }
}

fn lookup_verb(lexicon: &Lexicon, base: &str) -> Result<Verb, String> {
    match lexicon.verb(base) {
        Some(verb) => Ok(verb.clone()),
        None => Word::new(base)
            .map(Verb::regular)
            .map_err(|e| e.to_string()),
    }
}

fn print_conjugation(verb: &Verb) {
    let c = verb.conjugation();
    println!("  base:               {}", c.base);
    println!("  infinitive:         {}", c.infinitive);
    println!("  gerund:             {}", c.gerund);
    println!("  present participle: {}", c.present_participle);
    println!("  simple past:        {}", c.simple_past);
    println!("  past participle:    {}", c.past_participle);
    println!(
        "  kind:               {}",
        if c.irregular { "irregular" } else { "regular" }
    );
}

fn build_sentence(lexicon: &Lexicon, parts: &[&str]) -> Result<Sentence, String> {
    let subject = parse_noun_phrase(lexicon, parts[0], true)?;
    let verb = lookup_verb(lexicon, parts[2])?;
    let tag = match parts[1] {
        "past" => VerbTag::Past(verb),
        "present" => VerbTag::Present(verb),
        "plural" => VerbTag::PresentThirdPersonPlural(verb),
        "gerund" => VerbTag::PresentParticiple(verb),
        "participle" => VerbTag::PastParticiple(verb),
        other => return Err(format!("unknown tense '{}'", other)),
    };
    let object = match parts.get(3) {
        Some(raw) => Some(parse_noun_phrase(lexicon, raw, false)?),
        None => None,
    };
    Ok(Sentence::simple(subject, VerbPhrase::Base(tag), object))
}

/// Pronoun words become personal pronoun subjects. A proper noun renders
/// as its pronoun in subject position and its name elsewhere. Common
/// nouns take the definite article.
fn parse_noun_phrase(lexicon: &Lexicon, raw: &str, as_subject: bool) -> Result<NounPhrase, String> {
    let pronoun = match raw.to_lowercase().as_str() {
        "i" => Some(PersonalPronoun::I),
        "he" => Some(PersonalPronoun::He),
        "she" => Some(PersonalPronoun::She),
        "it" => Some(PersonalPronoun::It),
        "they" => Some(PersonalPronoun::They),
        _ => None,
    };
    if let Some(pronoun) = pronoun {
        let name = Word::new(raw).map_err(|e| e.to_string())?;
        return Ok(NounPhrase::personal(ProperNoun::new(name, pronoun)));
    }

    if let Some(proper) = lexicon.proper_noun(raw) {
        return Ok(if as_subject {
            NounPhrase::personal(proper.clone())
        } else {
            NounPhrase::Base(NounTag::ProperNoun(proper.clone()))
        });
    }

    match lexicon.noun(raw) {
        Some(noun) => Ok(NounPhrase::definite(NounTag::SingularNoun(noun.clone()))),
        None => Err(format!("'{}' is not a pronoun or a noun in the lexicon", raw)),
    }
}

fn print_usage() {
    println!("Usage: preview [--lexicon <path>] [--no-builtin] [--seed <n>]");
}

fn print_help() {
    println!("Commands:");
    println!("  verb <base>                            show every form of a verb");
    println!("  say <subject> <tense> <verb> [object]  render a simple sentence");
    println!("  sample <n>                             render n random sentences");
    println!("  seed <n>                               reseed the sampler");
    println!("  help                                   list commands");
    println!("  quit                                   exit");
}
