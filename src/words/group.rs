const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Renders a single base-1000 group (0-999) as word tokens.
///
/// Compound tens are hyphenated into one token ("twenty-three"). A zero
/// group renders as nothing.
pub fn format_group(group: u16) -> Vec<String> {
    debug_assert!(group < 1000, "group out of range: {group}");

    let mut words = Vec::with_capacity(3);
    let hundreds = usize::from(group / 100);
    let rest = usize::from(group % 100);

    if hundreds > 0 {
        words.push(ONES[hundreds].to_string());
        words.push("hundred".to_string());
    }

    match rest {
        0 => {}
        1..=19 => words.push(ONES[rest].to_string()),
        _ => {
            let tens = TENS[rest / 10];
            match rest % 10 {
                0 => words.push(tens.to_string()),
                ones => words.push(format!("{tens}-{}", ONES[ones])),
            }
        }
    }

    words
}
