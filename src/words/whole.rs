use super::group::format_group;
use crate::model::MAX_DOLLARS_EXCLUSIVE;

// Short scale, indexed by base-1000 position.
const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

/// Renders whole dollars as word tokens, most significant group first.
///
/// Zero groups are skipped entirely, so 1,000,000,005 has no "thousand".
pub fn format_whole(dollars: u64) -> Vec<String> {
    debug_assert!(dollars < MAX_DOLLARS_EXCLUSIVE, "dollars out of range: {dollars}");

    if dollars == 0 {
        return vec!["zero".to_string()];
    }

    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut remaining = dollars;
    let mut power = 0;
    while remaining > 0 {
        let group = (remaining % 1000) as u16;
        if group > 0 {
            let mut words = format_group(group);
            if power > 0 {
                words.push(SCALES[power].to_string());
            }
            groups.push(words);
        }
        remaining /= 1000;
        power += 1;
    }

    groups.into_iter().rev().flatten().collect()
}
