use std::collections::HashMap;

/// Counts the letters of `a` that can be matched one-to-one against letters of `b`.
///
/// Each letter of `b` is consumed at most once, so `("AAB", "AB")` scores 2.
pub fn letter_overlap(a: &str, b: &str) -> usize {
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in b.chars() {
        *available.entry(c).or_default() += 1;
    }

    a.chars()
        .filter(|c| match available.get_mut(c) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
        .count()
}
