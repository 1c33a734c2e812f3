//! Formatting helpers for presenting dataset numbers.

/// Millions of servings with thousands grouping, e.g. `45,070 M`.
pub fn format_servings(value: f64) -> String {
    format!("{} M", group_thousands(value.round() as i64))
}

/// Compact population: `1.43 B`, `51.8 M`, `412 K`.
pub fn format_population(value: u64) -> String {
    let value = value as f64;
    if value >= 1e9 {
        format!("{:.2} B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1} M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.0} K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Per-capita servings per person, two decimals.
pub fn format_per_capita(value: f64) -> String {
    format!("{value:.2}")
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servings_are_grouped() {
        assert_eq!(format_servings(45070.0), "45,070 M");
        assert_eq!(format_servings(846.0), "846 M");
        assert_eq!(format_servings(0.4), "0 M");
    }

    #[test]
    fn population_is_compacted() {
        assert_eq!(format_population(1_425_887_337), "1.43 B");
        assert_eq!(format_population(51_815_810), "51.8 M");
        assert_eq!(format_population(5_185_288), "5.2 M");
        assert_eq!(format_population(1_200), "1 K");
        assert_eq!(format_population(42), "42");
    }

    #[test]
    fn per_capita_keeps_two_decimals() {
        assert_eq!(format_per_capita(0.0992), "0.10");
        assert_eq!(format_per_capita(86.3333), "86.33");
    }
}
