/// Morphology engine: derives verb forms from a base word.
///
/// Every function here is pure and total: it inspects only the base word
/// and always returns a `Word`. Irregular verbs still go through
/// `form_gerund`/`form_present`; only their past forms come from the
/// lexicon.

use crate::schema::word::Word;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// The stem that productive suffixes (`-ing`, `-ed`) attach to.
///
/// Looks at the final three letters and applies the first matching rule:
///
/// 1. ends in `ic` → append `k` (panic → panick)
/// 2. ends in `e` → drop it (come → com)
/// 3. consonant + `y` → `y` becomes `i` (copy → copi)
/// 4. consonant-vowel-consonant → double the final consonant (chop → chopp)
///
/// Words shorter than three letters are returned unchanged.
pub fn form_root(base: &Word) -> Word {
    let letters: Vec<char> = base.as_str().chars().collect();
    let len = letters.len();
    if len < 3 {
        return base.clone();
    }

    let stem = &letters[..len - 3];
    let (first, middle, last) = (letters[len - 3], letters[len - 2], letters[len - 1]);

    if middle == 'i' && last == 'c' {
        return base.suffixed("k");
    }

    if last == 'e' {
        return Word::from_letters(letters[..len - 1].iter().copied());
    }

    if !is_vowel(middle) && last == 'y' {
        return Word::from_letters(stem.iter().copied().chain([first, middle, 'i']));
    }

    if !is_vowel(first) && is_vowel(middle) && !is_vowel(last) {
        return base.suffixed(&last.to_string());
    }

    base.clone()
}

/// Gerund: root + `ing`, except a root ending in `i` keeps the base
/// (copy → copying, never copiing).
pub fn form_gerund(base: &Word) -> Word {
    let root = form_root(base);
    if root.as_str().ends_with('i') {
        return base.suffixed("ing");
    }
    root.suffixed("ing")
}

/// Present participle; spelled the same as the gerund.
pub fn form_present(base: &Word) -> Word {
    form_gerund(base)
}

/// Regular simple past and past participle: root + `ed`.
pub fn form_past(base: &Word) -> Word {
    form_root(base).suffixed("ed")
}
