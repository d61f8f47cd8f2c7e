//! League and country lookup tables used for display and hints.

/// Short conference label; unknown names pass through unchanged.
pub fn conference_abbr(conference: &str) -> &str {
    match conference {
        "Eastern Conference" => "East",
        "Western Conference" => "West",
        other => other,
    }
}

/// Short division label; unknown names pass through unchanged.
pub fn division_abbr(division: &str) -> &str {
    match division {
        "Northwest Division" => "NW",
        "Pacific Division" => "Pac",
        "Southwest Division" => "SW",
        "Atlantic Division" => "Atl",
        "Central Division" => "Cen",
        "Southeast Division" => "SE",
        other => other,
    }
}

/// Full country name for a birth country code, or the code uppercased.
pub fn country_name(code: &str) -> String {
    let code = code.trim().to_lowercase();
    let name = match code.as_str() {
        "us" => "United States",
        "ca" => "Canada",
        "it" => "Italy",
        "fr" => "France",
        "es" => "Spain",
        "au" => "Australia",
        "de" => "Germany",
        "br" => "Brazil",
        "cn" => "China",
        "ch" => "Switzerland",
        "gb" => "United Kingdom",
        "nl" => "Netherlands",
        "gr" => "Greece",
        "za" => "South Africa",
        "jp" => "Japan",
        "kr" => "South Korea",
        "mx" => "Mexico",
        "ar" => "Argentina",
        "cl" => "Chile",
        _ => return code.to_uppercase(),
    };
    name.to_string()
}

/// 20px-wide flag image from FlagCDN.
pub fn flag_url(code: &str) -> String {
    format!("https://flagcdn.com/w20/{}.png", code.trim().to_lowercase())
}
