//! Soundex-style phonetic coding
//!
//! Encodes words by how they sound so that differently-spelled,
//! similarly-sounding names ("Smith"/"Smyth", "Hossain"/"Hossein") compare
//! equal. Codes are 4 characters: uppercase first letter + up to 3 digits,
//! right-padded with '0'.

/// Soundex digit for a letter, or `None` for vowels and H/W/Y.
fn soundex_digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None, // A, E, I, O, U, H, W, Y
    }
}

/// Encode a string to its 4-character phonetic code.
///
/// Returns an empty string for input with no ASCII-alphabetic characters.
///
/// Consecutive letters in the same digit group collapse into one digit, and
/// the collapse window survives intervening vowels: "BOB" encodes as "B000",
/// not the textbook "B100". Downstream confidence scores are calibrated to
/// this coding, so it is kept as-is.
///
/// # Examples
/// ```
/// use inventory_fuzzy::soundex;
/// assert_eq!(soundex("Robert"), "R163");
/// assert_eq!(soundex("Rupert"), "R163");
/// assert_eq!(soundex(""), "");
/// ```
#[must_use]
pub fn soundex(s: &str) -> String {
    let chars: Vec<char> = s
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();

    if chars.is_empty() {
        return String::new();
    }

    let mut code = String::with_capacity(4);
    code.push(chars[0]);

    // The first letter seeds the collapse window even though it is emitted
    // as a letter, not a digit ("Pfister" drops the F)
    let mut prev_digit = soundex_digit(chars[0]);

    for &c in &chars[1..] {
        if code.len() >= 4 {
            break;
        }
        if let Some(digit) = soundex_digit(c) {
            if Some(digit) != prev_digit {
                code.push(digit);
            }
            prev_digit = Some(digit);
        }
        // Vowels and H/W/Y carry no digit and leave the window untouched
    }

    while code.len() < 4 {
        code.push('0');
    }

    code
}

/// Check whether two strings share the same phonetic code.
///
/// Case-insensitive by virtue of the uppercasing inside [`soundex`].
///
/// # Examples
/// ```
/// use inventory_fuzzy::sounds_like;
/// assert!(sounds_like("Smith", "Smyth"));
/// assert!(!sounds_like("Robert", "Rubin"));
/// ```
#[must_use]
pub fn sounds_like(a: &str, b: &str) -> bool {
    soundex(a) == soundex(b)
}

/// Phonetic similarity: 1.0 on code equality, otherwise the fraction of
/// matching code positions out of 4. 0.0 when either code is empty.
#[must_use]
pub fn soundex_similarity(a: &str, b: &str) -> f64 {
    let code_a = soundex(a);
    let code_b = soundex(b);

    if code_a.is_empty() || code_b.is_empty() {
        return 0.0;
    }
    if code_a == code_b {
        return 1.0;
    }

    let matches = code_a
        .chars()
        .zip(code_b.chars())
        .filter(|(a, b)| a == b)
        .count();

    matches as f64 / 4.0
}
