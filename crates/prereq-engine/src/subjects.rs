//! Valid university subject codes
//!
//! The table is closed: a `DEPT NUMBER` mention whose department is not listed
//! here is never emitted as a course candidate. Order matters for subject
//! inference, which picks the first listed code that appears in a sentence.
//!
//! Sentence-level inference matches subjects case-insensitively, so a code
//! that spells an English word fires on ordinary prose. Six such codes whose
//! words are frequent in catalog text or unrelated to their subject (IS, SEE,
//! PUB, FAN, PLAN, PORT) are left out. The rest stay (DATA, ARCH, HUM, KIN,
//! CA, SA): "data 300" infers DATA 300, an accepted inference false positive.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Subject codes, alphabetical
pub const SUBJECTS: &[&str] = &[
    "ACMA", "ALS", "ANTH", "APMA", "ARAB", "ARCH", "ASC", "ASTR", "BIOL", "BISC", "BPK", "BUEC",
    "BUS", "CA", "CHEM", "CHIN", "CMNS", "CMPT", "COGS", "CRIM", "DATA", "DIAL", "DMED", "EASC",
    "ECO", "ECON", "EDPR", "EDUC", "ENGL", "ENSC", "ENV", "EVSC", "FASS", "FNST", "FPA", "FREN",
    "GA", "GEOG", "GERM", "GERO", "GREK", "GSWS", "HIST", "HSCI", "HUM", "IAT", "INDG", "INLG",
    "ITAL", "JAPN", "KIN", "LATN", "LBRL", "LBST", "LING", "MACM", "MATH", "MBB", "MSE", "MTEC",
    "NEUR", "NUSC", "ONC", "PHIL", "PHYS", "PLCY", "POL", "PSYC", "PUNJ", "REM", "SA", "SCD", "SCI",
    "SD", "SOCI", "SPAN", "STAT", "TEKX", "URB", "WL",
];

lazy_static! {
    static ref SUBJECT_CODES: HashSet<&'static str> =
        SUBJECTS.iter().copied().collect();
}

/// Exact, case-sensitive membership test against the subject table
pub fn is_valid_subject(code: &str) -> bool {
    SUBJECT_CODES.contains(code)
}

/// The first subject, in table order, that occurs in `text` as a whole word
/// (case-insensitive). Table order, not text order, decides ties.
pub fn first_subject_in(text: &str) -> Option<&'static str> {
    let words: HashSet<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_uppercase())
        .collect();

    if words.is_empty() {
        return None;
    }

    SUBJECTS.iter().copied().find(|code| words.contains(*code))
}
