use crate::core::dataset::Year;

/// One color per survey year, oldest first.
const YEAR_COLORS: [&str; 5] = ["#94a3b8", "#60a5fa", "#34d399", "#fbbf24", "#f87171"];

/// Continent palette, cycled for values beyond the known set.
const CONTINENT_COLORS: [&str; 6] = [
    "#60a5fa", "#f87171", "#34d399", "#fbbf24", "#c084fc", "#f472b6",
];

pub(crate) fn year_color(year: Year) -> &'static str {
    let index = Year::ALL.iter().position(|&y| y == year).unwrap_or(0);
    YEAR_COLORS[index]
}

pub(crate) fn continent_color(continent: &str) -> &'static str {
    match continent {
        "Asia" => CONTINENT_COLORS[0],
        "Americas" => CONTINENT_COLORS[1],
        "Africa" => CONTINENT_COLORS[2],
        "Europe" => CONTINENT_COLORS[3],
        "Oceania" => CONTINENT_COLORS[4],
        other => {
            let hash: usize = other.bytes().map(usize::from).sum();
            CONTINENT_COLORS[hash % CONTINENT_COLORS.len()]
        }
    }
}

/// Card meta line, e.g. `Asia · 2022`.
pub(crate) fn selection_meta(continent: &str, year: Year) -> String {
    format!("{continent} · {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_continents_have_stable_colors() {
        assert_eq!(continent_color("Asia"), "#60a5fa");
        assert_eq!(continent_color("Oceania"), "#c084fc");
        // Unknown values still land in the palette.
        let color = continent_color("Antarctica");
        assert!(CONTINENT_COLORS.contains(&color));
    }

    #[test]
    fn each_year_gets_a_distinct_color() {
        let mut seen: Vec<&str> = Year::ALL.iter().map(|&y| year_color(y)).collect();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn meta_line_interpolates_selection() {
        assert_eq!(selection_meta("Asia", Year::Y2020), "Asia · 2020");
    }
}
