use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::mentor::Mentor;

pub static MENTORS: [Mentor; 6] = [
    Mentor {
        id: 1,
        name: "Vyom Padalia",
        college: "IIT Delhi",
        course: "Computer Science & Engineering",
        year: "3rd Year",
        rating: 4.9,
        sessions: 45,
        languages: &["Hindi", "English"],
        specialties: &["Engineering", "Coding", "Campus Life", "Placements"],
        location: "Delhi",
        price: 100,
        verified: true,
        bio: "Passionate about helping juniors navigate their engineering journey with practical insights.",
    },
    Mentor {
        id: 2,
        name: "Sneha Patel",
        college: "AIIMS Delhi",
        course: "MBBS",
        year: "4th Year",
        rating: 4.8,
        sessions: 32,
        languages: &["English", "Gujarati"],
        specialties: &["Medical", "NEET", "Study Tips", "Research"],
        location: "Delhi",
        price: 100,
        verified: true,
        bio: "Medical student passionate about guiding aspiring doctors through their journey.",
    },
    Mentor {
        id: 3,
        name: "Rohit Sharma",
        college: "SRCC Delhi",
        course: "Economics (Hons)",
        year: "2nd Year",
        rating: 4.7,
        sessions: 28,
        languages: &["Hindi", "English"],
        specialties: &["Commerce", "Economics", "DU Life", "Finance"],
        location: "Delhi",
        price: 100,
        verified: true,
        bio: "Economics enthusiast helping students understand commerce and finance better.",
    },
    Mentor {
        id: 4,
        name: "Priya Singh",
        college: "NIT Trichy",
        course: "Mechanical Engineering",
        year: "3rd Year",
        rating: 4.9,
        sessions: 38,
        languages: &["English", "Tamil"],
        specialties: &["Engineering", "NIT Life", "Placements", "Research"],
        location: "Tamil Nadu",
        price: 100,
        verified: true,
        bio: "Mechanical engineering student with expertise in placements and research opportunities.",
    },
    Mentor {
        id: 5,
        name: "Karan Mehta",
        college: "IIM Ahmedabad",
        course: "MBA",
        year: "1st Year",
        rating: 4.6,
        sessions: 22,
        languages: &["English", "Hindi"],
        specialties: &["MBA", "CAT Prep", "Business", "Consulting"],
        location: "Gujarat",
        price: 100,
        verified: true,
        bio: "MBA student helping aspirants crack CAT and understand business school life.",
    },
    Mentor {
        id: 6,
        name: "Ananya Reddy",
        college: "BITS Pilani",
        course: "Electronics & Communication",
        year: "4th Year",
        rating: 4.8,
        sessions: 41,
        languages: &["English", "Telugu"],
        specialties: &["Engineering", "BITS Life", "Research", "Internships"],
        location: "Rajasthan",
        price: 100,
        verified: true,
        bio: "Final year student with extensive experience in research and internships.",
    },
];

/// Directory filters. Missing or `"all"` means no restriction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorFilter {
    pub search: Option<String>,
    pub college: Option<String>,
    pub stream: Option<String>,
}

impl MentorFilter {
    pub fn matches(&self, mentor: &Mentor) -> bool {
        let search = self
            .search
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let matches_search = [mentor.name, mentor.college, mentor.course]
            .iter()
            .any(|field| field.to_lowercase().contains(&search));

        let matches_college = match active(&self.college) {
            None => true,
            Some(college) => mentor.college.contains(college),
        };

        let matches_stream = match active(&self.stream) {
            None => true,
            Some(stream) => {
                let stream = stream.to_lowercase();
                mentor
                    .specialties
                    .iter()
                    .any(|s| s.to_lowercase().contains(&stream))
            }
        };

        matches_search && matches_college && matches_stream
    }
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|f| *f != "all")
}

pub fn list(filter: &MentorFilter) -> Vec<&'static Mentor> {
    MENTORS.iter().filter(|m| filter.matches(m)).collect()
}

pub fn find(id: u32) -> AppResult<&'static Mentor> {
    MENTORS
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound("Mentor not found".to_string()))
}
