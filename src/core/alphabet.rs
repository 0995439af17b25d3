//! Belarusian letter classes and Cyrillic <-> Łacinka letter tables
//!
//! The alphabet is a closed enumeration: every table below is an exhaustive
//! `match`, so adding a letter without mapping it is a compile error.

/// Letter class used by the transliteration state machines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    /// а о у э ы і
    PlainVowel,
    /// я е ё ю
    IotatedVowel,
    /// ц н з л с (dedicated diacritic letter before ь)
    PalatalizableConsonant,
    PlainConsonant,
    /// soft sign, apostrophe, hyphen
    Other,
}

/// Cyrillic vowel letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    O,
    U,
    E,
    Y,
    I,
    Ya,
    Ye,
    Yo,
    Yu,
}

impl Vowel {
    pub const ALL: [Vowel; 10] = [
        Vowel::A,
        Vowel::O,
        Vowel::U,
        Vowel::E,
        Vowel::Y,
        Vowel::I,
        Vowel::Ya,
        Vowel::Ye,
        Vowel::Yo,
        Vowel::Yu,
    ];

    pub fn from_cyrillic(c: char) -> Option<Self> {
        match c {
            'а' => Some(Vowel::A),
            'о' => Some(Vowel::O),
            'у' => Some(Vowel::U),
            'э' => Some(Vowel::E),
            'ы' => Some(Vowel::Y),
            'і' => Some(Vowel::I),
            'я' => Some(Vowel::Ya),
            'е' => Some(Vowel::Ye),
            'ё' => Some(Vowel::Yo),
            'ю' => Some(Vowel::Yu),
            _ => None,
        }
    }

    pub fn to_cyrillic(self) -> char {
        match self {
            Vowel::A => 'а',
            Vowel::O => 'о',
            Vowel::U => 'у',
            Vowel::E => 'э',
            Vowel::Y => 'ы',
            Vowel::I => 'і',
            Vowel::Ya => 'я',
            Vowel::Ye => 'е',
            Vowel::Yo => 'ё',
            Vowel::Yu => 'ю',
        }
    }

    /// я е ё ю
    pub fn is_iotated(self) -> bool {
        matches!(self, Vowel::Ya | Vowel::Ye | Vowel::Yo | Vowel::Yu)
    }

    /// Base Latin vowel (iotated vowels drop their glide: я -> a, ё -> o)
    pub fn base_latin(self) -> char {
        match self {
            Vowel::A | Vowel::Ya => 'a',
            Vowel::O | Vowel::Yo => 'o',
            Vowel::U | Vowel::Yu => 'u',
            Vowel::E | Vowel::Ye => 'e',
            Vowel::Y => 'y',
            Vowel::I => 'i',
        }
    }

    /// Inverse of `base_latin` restricted to plain vowels
    pub fn plain_from_latin(c: char) -> Option<Self> {
        match c {
            'a' => Some(Vowel::A),
            'o' => Some(Vowel::O),
            'u' => Some(Vowel::U),
            'e' => Some(Vowel::E),
            'y' => Some(Vowel::Y),
            'i' => Some(Vowel::I),
            _ => None,
        }
    }

    /// Inverse of `base_latin` restricted to iotated vowels
    pub fn iotated_from_latin(c: char) -> Option<Self> {
        match c {
            'a' => Some(Vowel::Ya),
            'o' => Some(Vowel::Yo),
            'u' => Some(Vowel::Yu),
            'e' => Some(Vowel::Ye),
            _ => None,
        }
    }
}

/// Cyrillic consonant letters (ў included: it is spelled as a consonant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    Be,
    Ve,
    He,
    De,
    Zhe,
    Ze,
    ShortI,
    Ka,
    El,
    Em,
    En,
    Pe,
    Er,
    Es,
    Te,
    ShortU,
    Ef,
    Kha,
    Tse,
    Che,
    Sha,
}

impl Consonant {
    pub const ALL: [Consonant; 21] = [
        Consonant::Be,
        Consonant::Ve,
        Consonant::He,
        Consonant::De,
        Consonant::Zhe,
        Consonant::Ze,
        Consonant::ShortI,
        Consonant::Ka,
        Consonant::El,
        Consonant::Em,
        Consonant::En,
        Consonant::Pe,
        Consonant::Er,
        Consonant::Es,
        Consonant::Te,
        Consonant::ShortU,
        Consonant::Ef,
        Consonant::Kha,
        Consonant::Tse,
        Consonant::Che,
        Consonant::Sha,
    ];

    pub fn from_cyrillic(c: char) -> Option<Self> {
        match c {
            'б' => Some(Consonant::Be),
            'в' => Some(Consonant::Ve),
            'г' => Some(Consonant::He),
            'д' => Some(Consonant::De),
            'ж' => Some(Consonant::Zhe),
            'з' => Some(Consonant::Ze),
            'й' => Some(Consonant::ShortI),
            'к' => Some(Consonant::Ka),
            'л' => Some(Consonant::El),
            'м' => Some(Consonant::Em),
            'н' => Some(Consonant::En),
            'п' => Some(Consonant::Pe),
            'р' => Some(Consonant::Er),
            'с' => Some(Consonant::Es),
            'т' => Some(Consonant::Te),
            'ў' => Some(Consonant::ShortU),
            'ф' => Some(Consonant::Ef),
            'х' => Some(Consonant::Kha),
            'ц' => Some(Consonant::Tse),
            'ч' => Some(Consonant::Che),
            'ш' => Some(Consonant::Sha),
            _ => None,
        }
    }

    pub fn to_cyrillic(self) -> char {
        match self {
            Consonant::Be => 'б',
            Consonant::Ve => 'в',
            Consonant::He => 'г',
            Consonant::De => 'д',
            Consonant::Zhe => 'ж',
            Consonant::Ze => 'з',
            Consonant::ShortI => 'й',
            Consonant::Ka => 'к',
            Consonant::El => 'л',
            Consonant::Em => 'м',
            Consonant::En => 'н',
            Consonant::Pe => 'п',
            Consonant::Er => 'р',
            Consonant::Es => 'с',
            Consonant::Te => 'т',
            Consonant::ShortU => 'ў',
            Consonant::Ef => 'ф',
            Consonant::Kha => 'х',
            Consonant::Tse => 'ц',
            Consonant::Che => 'ч',
            Consonant::Sha => 'ш',
        }
    }

    /// Plain Latin spelling (х is the only digraph)
    pub fn latin(self) -> &'static str {
        match self {
            Consonant::Be => "b",
            Consonant::Ve => "v",
            Consonant::He => "h",
            Consonant::De => "d",
            Consonant::Zhe => "ž",
            Consonant::Ze => "z",
            Consonant::ShortI => "j",
            Consonant::Ka => "k",
            Consonant::El => "l",
            Consonant::Em => "m",
            Consonant::En => "n",
            Consonant::Pe => "p",
            Consonant::Er => "r",
            Consonant::Es => "s",
            Consonant::Te => "t",
            Consonant::ShortU => "ŭ",
            Consonant::Ef => "f",
            Consonant::Kha => "ch",
            Consonant::Tse => "c",
            Consonant::Che => "č",
            Consonant::Sha => "š",
        }
    }

    /// Inverse of `latin` for single-letter spellings. `c` alone is ц; the
    /// `ch` digraph has to be recognised by the caller before this lookup.
    pub fn from_latin(c: char) -> Option<Self> {
        match c {
            'b' => Some(Consonant::Be),
            'v' => Some(Consonant::Ve),
            'h' => Some(Consonant::He),
            'd' => Some(Consonant::De),
            'ž' => Some(Consonant::Zhe),
            'z' => Some(Consonant::Ze),
            'j' => Some(Consonant::ShortI),
            'k' => Some(Consonant::Ka),
            'l' => Some(Consonant::El),
            'm' => Some(Consonant::Em),
            'n' => Some(Consonant::En),
            'p' => Some(Consonant::Pe),
            'r' => Some(Consonant::Er),
            's' => Some(Consonant::Es),
            't' => Some(Consonant::Te),
            'ŭ' => Some(Consonant::ShortU),
            'f' => Some(Consonant::Ef),
            'c' => Some(Consonant::Tse),
            'č' => Some(Consonant::Che),
            'š' => Some(Consonant::Sha),
            _ => None,
        }
    }

    /// Dedicated Latin letter for consonant + ь, only for ц н з л с
    pub fn palatalized(self) -> Option<char> {
        match self {
            Consonant::Tse => Some('ć'),
            Consonant::En => Some('ń'),
            Consonant::Ze => Some('ź'),
            Consonant::El => Some('ĺ'),
            Consonant::Es => Some('ś'),
            _ => None,
        }
    }

    pub fn from_palatalized(c: char) -> Option<Self> {
        match c {
            'ć' => Some(Consonant::Tse),
            'ń' => Some(Consonant::En),
            'ź' => Some(Consonant::Ze),
            'ĺ' => Some(Consonant::El),
            'ś' => Some(Consonant::Es),
            _ => None,
        }
    }

    pub fn is_palatalizable(self) -> bool {
        self.palatalized().is_some()
    }
}

/// One symbol of a pre-filtered corpus word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Vowel(Vowel),
    Consonant(Consonant),
    SoftSign,
    Apostrophe,
    Hyphen,
}

impl Letter {
    pub fn from_cyrillic(c: char) -> Option<Self> {
        if let Some(v) = Vowel::from_cyrillic(c) {
            return Some(Letter::Vowel(v));
        }
        if let Some(cons) = Consonant::from_cyrillic(c) {
            return Some(Letter::Consonant(cons));
        }
        match c {
            'ь' => Some(Letter::SoftSign),
            '\'' => Some(Letter::Apostrophe),
            '-' => Some(Letter::Hyphen),
            _ => None,
        }
    }

    pub fn to_cyrillic(self) -> char {
        match self {
            Letter::Vowel(v) => v.to_cyrillic(),
            Letter::Consonant(c) => c.to_cyrillic(),
            Letter::SoftSign => 'ь',
            Letter::Apostrophe => '\'',
            Letter::Hyphen => '-',
        }
    }

    pub fn class(self) -> LetterClass {
        match self {
            Letter::Vowel(v) if v.is_iotated() => LetterClass::IotatedVowel,
            Letter::Vowel(_) => LetterClass::PlainVowel,
            Letter::Consonant(c) if c.is_palatalizable() => LetterClass::PalatalizableConsonant,
            Letter::Consonant(_) => LetterClass::PlainConsonant,
            Letter::SoftSign | Letter::Apostrophe | Letter::Hyphen => LetterClass::Other,
        }
    }
}
