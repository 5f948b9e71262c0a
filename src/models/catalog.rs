//! Static option lists shared by the store (theme defaulting) and the CLI.

use crate::errors::{AppError, AppResult};

pub const THEMES: &[&str] = &[
    "1. AI-Driven Multilingual Content Localization & Accessible Digital Outreach through Integrated Multichannel Platforms",
    "2. AI-Based Crop Health Detection App and WhatsApp Bot",
    "3. Tele-Consultation Platform Enhancements – Advancing AI-integrated, multilingual, voice-enabled helpline and advisory services",
    "4. Development of Animal Digital Information System",
    "5. FPO Management App – Development and Refinement",
    "6. 24/7 Weather-Based Marine Fisheries Advisories (Machli App)",
    "7. Domain-Specific Data Management Tools (Web Scraping + GIS/ML)",
    "8. Livelihood Advisory Podcasts via Internet Radio",
    "9. RF Livelihood Video Learning App",
    "10. Rural Yellow Pages App – Development & Scale",
    "11. Digital Farm Management System (DFMS)",
    "12. RF Super App – Integrated Delivery",
    "13. E-Learning & Knowledge Dissemination",
    "14. Cloud Migration & Infrastructure Enhancements",
    "15. Early Warning & Disaster Resilience",
    "16. Tech for Social Good",
    "17. Data-Driven Impact Measurement",
    "18. WebKMS + Multilingual AI",
    "19. Geo-Spatial Vulnerability Mapping",
    "20. Water Harvesting Structure Mapping",
    "21. NDVI-Based Crop Yield",
    "22. Multi-Hazard Risk Mapping",
    "23. AGB Estimation",
    "24. Change Detection Monitoring",
    "25. Climate Modeling & Forecasting",
    "26. GIS-Based M&E",
    "27. Spatial Decision Support",
    "28. IT Documentation & Support",
];

pub const EMPLOYEES: &[&str] = &[
    "Somnath Pati",
    "Abhrajit Das",
    "Bablu Prasad",
    "Rajak Manjothi",
    "Kushal Kuantia",
    "Priyanka Sharma",
    "Shivam Periwal",
    "Selvaraj",
    "Other",
];

pub const DEPARTMENTS: &[&str] = &["Dissemination", "KMS", "GIS", "Platform", "Other"];

/// Sentinel accepted by every filter to mean "do not filter".
pub const ALL: &str = "All";

pub fn first_theme() -> &'static str {
    THEMES[0]
}

/// Resolve user input into a canonical theme.
///
/// - blank → `Ok(None)` (the store applies the default theme)
/// - `"7"` → the 7th theme
/// - `"7."` prefix or the exact name → that theme
pub fn resolve_theme(input: &str) -> AppResult<Option<&'static str>> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(None);
    }

    if let Ok(n) = s.parse::<usize>() {
        return match n {
            n if (1..=THEMES.len()).contains(&n) => Ok(Some(THEMES[n - 1])),
            _ => Err(AppError::InvalidTheme(s.to_string())),
        };
    }

    if let Some(t) = THEMES.iter().find(|t| **t == s) {
        return Ok(Some(*t));
    }

    // "7. Domain-Specific..." typed with a different tail: match on the number
    if let Some((num, _)) = s.split_once('.')
        && let Ok(n) = num.trim().parse::<usize>()
        && (1..=THEMES.len()).contains(&n)
    {
        return Ok(Some(THEMES[n - 1]));
    }

    Err(AppError::InvalidTheme(s.to_string()))
}

/// Canonical department spelling, or `None` when the value is free text
/// (the "Other" fallback).
pub fn canonical_department(input: &str) -> Option<&'static str> {
    let s = input.trim();
    DEPARTMENTS
        .iter()
        .find(|d| d.eq_ignore_ascii_case(s))
        .copied()
}

pub fn is_known_employee(name: &str) -> bool {
    EMPLOYEES.iter().any(|e| *e != "Other" && *e == name.trim())
}

pub fn is_all(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(ALL)
}
