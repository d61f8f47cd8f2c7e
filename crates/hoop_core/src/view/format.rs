//! Display formatting for player attributes.

use crate::models::Experience;

/// Inches as `feet-inches`, e.g. 81 → `6-9`.
pub fn format_height(inches: Option<u32>) -> String {
    match inches {
        Some(inches) => format!("{}-{}", inches / 12, inches % 12),
        None => "N/A".to_string(),
    }
}

pub fn format_experience(experience: Experience) -> String {
    match experience {
        Experience::Rookie => "Rookie".to_string(),
        Experience::Years(1) => "1 year in the NBA".to_string(),
        Experience::Years(n) => format!("{n} years in the NBA"),
        Experience::Unknown => "N/A".to_string(),
    }
}

/// Whole dollars with thousands separators: 12405000 → `12,405,000`.
pub fn format_salary(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Last path segment of an image reference.
pub fn image_file_name(image: &str) -> &str {
    image.rsplit('/').next().unwrap_or(image)
}

pub fn format_optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}
