//! Character classification shared by the cutters

/// Coarse class of a character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Whitespace, never part of a token
    Whitespace,
    /// Latin letter, including full-width forms
    Letter,
    /// Decimal digit, including full-width forms
    Digit,
    /// CJK unified ideograph
    Ideograph,
    /// Letters and digits of other scripts (kana, hangul, ...)
    Other,
    /// Punctuation and symbols
    Punctuation,
}

impl CharClass {
    /// Classify a character
    pub fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            CharClass::Whitespace
        } else if is_digit(ch) {
            CharClass::Digit
        } else if is_ideograph(ch) {
            CharClass::Ideograph
        } else if is_letter(ch) {
            CharClass::Letter
        } else if ch.is_alphanumeric() {
            CharClass::Other
        } else {
            CharClass::Punctuation
        }
    }
}

/// Latin letter: ASCII, Latin-1, Latin Extended and full-width forms
#[inline]
pub fn is_letter(ch: char) -> bool {
    match ch {
        'a'..='z' | 'A'..='Z' => true,
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' => true,
        '\u{00C0}'..='\u{024F}' => ch.is_alphabetic(),
        _ => false,
    }
}

/// ASCII or full-width decimal digit
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit() || ('０'..='９').contains(&ch)
}

/// Separator allowed between two digit runs of one number
#[inline]
pub fn is_decimal_separator(ch: char) -> bool {
    ch == '.' || ch == '．'
}

/// CJK unified ideograph, extension A/B or compatibility ideograph
#[inline]
pub fn is_ideograph(ch: char) -> bool {
    matches!(
        ch,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{3007}'
    )
}
