use chrono::NaiveDate;
use serde::Serialize;

/// Default palette labels, assigned in order and wrapping around.
pub const NATO: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

/// A labelled pallet of packages handled on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub id: i64,
    pub date: NaiveDate,
    pub label: String,
    pub packages: u32,
    pub created_at: String,
}

/// Label for the palette that would be added after `existing` ones.
pub fn default_label(existing: usize) -> &'static str {
    NATO[existing % NATO.len()]
}

/// Sum of packages over a day's palettes.
pub fn total_packages(palettes: &[Palette]) -> u32 {
    palettes
        .iter()
        .fold(0u32, |acc, p| acc.saturating_add(p.packages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_wrap_around_the_alphabet() {
        assert_eq!(default_label(0), "Alfa");
        assert_eq!(default_label(25), "Zulu");
        assert_eq!(default_label(26), "Alfa");
    }

    #[test]
    fn totals_sum_packages() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let p = |id, packages| Palette {
            id,
            date: d,
            label: String::new(),
            packages,
            created_at: String::new(),
        };
        assert_eq!(total_packages(&[p(1, 120), p(2, 80)]), 200);
        assert_eq!(total_packages(&[]), 0);
    }
}
