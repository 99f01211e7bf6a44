use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of letters (General_Category L: Lu, Ll, Lt, Lm, Lo).
static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").expect("valid pattern"));

/// A single letter, anchored.
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}$").expect("valid pattern"));

/// Returns true if `ch` belongs to one of the Unicode letter categories.
///
/// Letter numbers (`Ⅻ`), enclosed symbols (`Ⓐ`) and combining marks
/// (`ा`) are not letters, even though some of them are `char::is_alphabetic`.
#[inline]
pub fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    LETTER.is_match(ch.encode_utf8(&mut [0u8; 4]))
}

/// Letter-only, lowercase text normalizer.
///
/// Performs the following operations:
/// - Drops every character that is not a letter (whitespace, punctuation,
///   digits, symbols, letter numbers, combining marks)
/// - Converts the remaining letters to lowercase
/// - Keeps the original relative order
///
/// A letter is a char in General_Category L (see [`is_letter`]). The rule
/// depends only on Unicode data and never on the process locale.
///
/// # Performance
///
/// Letter runs are located with one regex scan. Inside a run, ASCII
/// characters take the `to_ascii_lowercase` fast path; everything else goes
/// through `char::to_lowercase`.
///
/// # Examples
///
/// ```
/// use triplets_core::analyzer::LetterNormalizer;
///
/// let normalizer = LetterNormalizer::default();
/// assert_eq!(normalizer.normalize("Ab, ab!"), "abab");
/// assert_eq!(normalizer.normalize("Привет, МИР"), "приветмир");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LetterNormalizer;

impl LetterNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        for run in LETTER_RUN.find_iter(input) {
            for ch in run.as_str().chars() {
                if ch.is_ascii() {
                    out.push(ch.to_ascii_lowercase());
                    continue;
                }

                // Some lowercase mappings expand to several chars (e.g. 'İ' gains a
                // combining dot); only the letters among them are kept.
                for lowered in ch.to_lowercase() {
                    if is_letter(lowered) {
                        out.push(lowered);
                    }
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
