use serde::Serialize;

/// A mentor listed in the public directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mentor {
    pub id: u32,
    pub name: &'static str,
    pub college: &'static str,
    pub course: &'static str,
    pub year: &'static str,
    pub rating: f64,
    pub sessions: u32,
    pub languages: &'static [&'static str],
    pub specialties: &'static [&'static str],
    pub location: &'static str,
    /// Per-session price in rupees.
    pub price: u32,
    pub verified: bool,
    pub bio: &'static str,
}
