use chrono::{Datelike, NaiveDate};

/// Western sun sign for a birth date
///
/// Boundary dates follow the tropical zodiac: a sign starts on the dates
/// listed here and runs up to the day before the next sign starts.
pub fn zodiac_sign(birth_date: NaiveDate) -> &'static str {
    match (birth_date.month(), birth_date.day()) {
        (3, 21..=31) | (4, 1..=19) => "Aries",
        (4, 20..=30) | (5, 1..=20) => "Taurus",
        (5, 21..=31) | (6, 1..=20) => "Gemini",
        (6, 21..=30) | (7, 1..=22) => "Cancer",
        (7, 23..=31) | (8, 1..=22) => "Leo",
        (8, 23..=31) | (9, 1..=22) => "Virgo",
        (9, 23..=30) | (10, 1..=22) => "Libra",
        (10, 23..=31) | (11, 1..=21) => "Scorpio",
        (11, 22..=30) | (12, 1..=21) => "Sagittarius",
        (12, 22..=31) | (1, 1..=19) => "Capricorn",
        (1, 20..=31) | (2, 1..=18) => "Aquarius",
        _ => "Pisces",
    }
}
