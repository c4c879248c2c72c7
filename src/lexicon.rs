//! Static lookup tables. These are data, not logic: the extractors
//! iterate them as-is and the grammar derives coarse morphological tags
//! from them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masc,
    Fem,
    /// Suffixes shared by masculine and feminine surnames (-ко, -ук, ...).
    Any,
}

impl Gender {
    pub fn agrees(self, other: Gender) -> bool {
        matches!(self, Gender::Any) || matches!(other, Gender::Any) || self == other
    }
}

/// Cities checked by the place extractor, in priority order: the first
/// list entry found in the text wins, regardless of text position.
pub const CITIES: &[&str] = &[
    "Москва",
    "Санкт-Петербург",
    "Казань",
    "Минск",
    "Генуя",
    "Париж",
    "Лондон",
    "Киев",
    "Симферополь",
    "Нью-Йорк",
    "Рим",
    "Варшава",
    "Берлин",
];

/// Common Russian given names, nominative, with grammatical gender.
/// Used by the grammar tagger and by the person heuristic.
pub const GIVEN_NAMES: &[(&str, Gender)] = &[
    ("Александр", Gender::Masc),
    ("Алексей", Gender::Masc),
    ("Андрей", Gender::Masc),
    ("Антон", Gender::Masc),
    ("Артём", Gender::Masc),
    ("Борис", Gender::Masc),
    ("Вадим", Gender::Masc),
    ("Валентин", Gender::Masc),
    ("Василий", Gender::Masc),
    ("Виктор", Gender::Masc),
    ("Владимир", Gender::Masc),
    ("Владислав", Gender::Masc),
    ("Геннадий", Gender::Masc),
    ("Георгий", Gender::Masc),
    ("Даниил", Gender::Masc),
    ("Денис", Gender::Masc),
    ("Дмитрий", Gender::Masc),
    ("Евгений", Gender::Masc),
    ("Иван", Gender::Masc),
    ("Игорь", Gender::Masc),
    ("Илья", Gender::Masc),
    ("Кирилл", Gender::Masc),
    ("Константин", Gender::Masc),
    ("Леонид", Gender::Masc),
    ("Максим", Gender::Masc),
    ("Михаил", Gender::Masc),
    ("Никита", Gender::Masc),
    ("Николай", Gender::Masc),
    ("Олег", Gender::Masc),
    ("Павел", Gender::Masc),
    ("Пётр", Gender::Masc),
    ("Роман", Gender::Masc),
    ("Сергей", Gender::Masc),
    ("Станислав", Gender::Masc),
    ("Степан", Gender::Masc),
    ("Тимур", Gender::Masc),
    ("Фёдор", Gender::Masc),
    ("Юрий", Gender::Masc),
    ("Ярослав", Gender::Masc),
    ("Анна", Gender::Fem),
    ("Валентина", Gender::Fem),
    ("Вера", Gender::Fem),
    ("Виктория", Gender::Fem),
    ("Галина", Gender::Fem),
    ("Дарья", Gender::Fem),
    ("Екатерина", Gender::Fem),
    ("Елена", Gender::Fem),
    ("Зоя", Gender::Fem),
    ("Ирина", Gender::Fem),
    ("Ксения", Gender::Fem),
    ("Лариса", Gender::Fem),
    ("Людмила", Gender::Fem),
    ("Маргарита", Gender::Fem),
    ("Мария", Gender::Fem),
    ("Наталья", Gender::Fem),
    ("Оксана", Gender::Fem),
    ("Ольга", Gender::Fem),
    ("Светлана", Gender::Fem),
    ("Софья", Gender::Fem),
    ("Татьяна", Gender::Fem),
    ("Юлия", Gender::Fem),
    ("Яна", Gender::Fem),
];

/// Nominative surname endings with the gender they imply.
/// Feminine forms come first: "-ова" must win before "-ов" is tried.
pub const SURNAME_SUFFIXES: &[(&str, Gender)] = &[
    ("ская", Gender::Fem),
    ("цкая", Gender::Fem),
    ("ский", Gender::Masc),
    ("цкий", Gender::Masc),
    ("ова", Gender::Fem),
    ("ева", Gender::Fem),
    ("ёва", Gender::Fem),
    ("ина", Gender::Fem),
    ("ына", Gender::Fem),
    ("ов", Gender::Masc),
    ("ев", Gender::Masc),
    ("ёв", Gender::Masc),
    ("ин", Gender::Masc),
    ("ын", Gender::Masc),
    ("ич", Gender::Masc),
    ("енко", Gender::Any),
    ("ко", Gender::Any),
    ("ук", Gender::Any),
    ("юк", Gender::Any),
    ("ых", Gender::Any),
    ("их", Gender::Any),
];

pub fn given_name_gender(token: &str) -> Option<Gender> {
    GIVEN_NAMES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, gender)| *gender)
}

pub fn is_given_name(token: &str) -> bool {
    given_name_gender(token).is_some()
}

pub fn surname_gender(token: &str) -> Option<Gender> {
    SURNAME_SUFFIXES
        .iter()
        .find(|(suffix, _)| token.ends_with(suffix))
        .map(|(_, gender)| *gender)
}
