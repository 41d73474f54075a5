use chrono::{DateTime, TimeZone, Utc};

use crate::models::{ApplicantRecord, ApplicantStatus, SalaryType};

pub const SEED_IDS: [i64; 5] = [231, 232, 233, 234, 235];

fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The collection written to an empty store on first access.
pub fn default_applicants() -> Vec<ApplicantRecord> {
    vec![
        ApplicantRecord {
            id: 231,
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 234 567 890".into(),
            current_organization: "Tech Solutions Inc.".into(),
            skills: tags(&["React", "Node.js", "TypeScript", "GraphQL"]),
            available_from: "2023-08-01".into(),
            current_salary: "$95,000".into(),
            notice_period: "1 Month".into(),
            full_address: "123 Tech Street, Silicon Valley, CA 94001".into(),
            resume: "john_doe_resume.pdf".into(),
            total_experience: "8 Years".into(),
            summary: "A highly motivated Senior Software Engineer with a passion for building scalable web applications and leading technical teams.".into(),
            current_employment_status: "Full-time".into(),
            date_of_birth: "1990-05-15".into(),
            relevant_experience: "6 Years".into(),
            salary_expectation: "$110,000".into(),
            status: ApplicantStatus::InReview,
            salary_type: SalaryType::Annual,
            language_skills: tags(&["English (Native)", "Spanish (Conversational)"]),
            last_modified: stamp(2023, 7, 14, 16, 4),
        },
        ApplicantRecord {
            id: 232,
            name: "Jane Smith".into(),
            email: "jane.smith@example.com".into(),
            phone: "+44 123 456 789".into(),
            current_organization: "Innovate Ltd.".into(),
            skills: tags(&["Vue.js", "Python", "Django", "AWS"]),
            available_from: "2023-09-15".into(),
            current_salary: "£70,000".into(),
            notice_period: "2 Months".into(),
            full_address: "456 Innovation Ave, London, UK SW1A 0AA".into(),
            resume: "jane_smith_cv.pdf".into(),
            total_experience: "6 Years".into(),
            summary: "Creative and detail-oriented Frontend Developer with extensive experience in cloud infrastructure and backend development.".into(),
            current_employment_status: "Full-time".into(),
            date_of_birth: "1992-11-20".into(),
            relevant_experience: "5 Years".into(),
            salary_expectation: "£80,000".into(),
            status: ApplicantStatus::Shortlisted,
            salary_type: SalaryType::Annual,
            language_skills: tags(&["English (Native)", "French (Basic)"]),
            last_modified: stamp(2023, 7, 12, 11, 30),
        },
        ApplicantRecord {
            id: 233,
            name: "Mike Brown".into(),
            email: "mike.brown@example.com".into(),
            phone: "+91 987 654 3210".into(),
            current_organization: "Data Corp".into(),
            skills: tags(&["Python", "Machine Learning", "TensorFlow", "Pandas"]),
            available_from: "2023-07-20".into(),
            current_salary: "₹1,800,000".into(),
            notice_period: "45 Days".into(),
            full_address: "789 Data Park, Bangalore, India 560001".into(),
            resume: "mike_brown_bio.pdf".into(),
            total_experience: "7 Years".into(),
            summary: "Data Scientist with a proven track record of developing models that drive business decisions and improve user experience.".into(),
            current_employment_status: "Full-time".into(),
            date_of_birth: "1991-02-10".into(),
            relevant_experience: "7 Years".into(),
            salary_expectation: "₹2,200,000".into(),
            status: ApplicantStatus::InterviewScheduled,
            salary_type: SalaryType::Annual,
            language_skills: tags(&["English (Fluent)", "Hindi (Native)"]),
            last_modified: stamp(2023, 7, 10, 9, 0),
        },
        ApplicantRecord {
            id: 234,
            name: "Emily White".into(),
            email: "emily.white@example.com".into(),
            phone: "+1 345 678 9012".into(),
            current_organization: "Creative Minds Agency".into(),
            skills: tags(&["UI/UX Design", "Figma", "Adobe XD", "User Research"]),
            available_from: "Immediate".into(),
            current_salary: "$80,000".into(),
            notice_period: "N/A".into(),
            full_address: "101 Creative Blvd, New York, NY 10001".into(),
            resume: "emily_white_portfolio.pdf".into(),
            total_experience: "5 Years".into(),
            summary: "A user-centric UI/UX designer focused on creating intuitive and beautiful digital experiences. Freelance and looking for a full-time role.".into(),
            current_employment_status: "Freelance".into(),
            date_of_birth: "1994-08-25".into(),
            relevant_experience: "5 Years".into(),
            salary_expectation: "$90,000".into(),
            status: ApplicantStatus::New,
            salary_type: SalaryType::Annual,
            language_skills: tags(&["English (Native)"]),
            last_modified: stamp(2023, 7, 15, 14, 20),
        },
        ApplicantRecord {
            id: 235,
            name: "Carlos Garcia".into(),
            email: "carlos.garcia@example.com".into(),
            phone: "+34 612 345 678".into(),
            current_organization: "Global Connect".into(),
            skills: tags(&["Project Management", "Agile", "Scrum", "JIRA"]),
            available_from: "2023-08-15".into(),
            current_salary: "€65,000".into(),
            notice_period: "30 Days".into(),
            full_address: "222 Global Plaza, Madrid, Spain 28001".into(),
            resume: "carlos_garcia_cv.pdf".into(),
            total_experience: "10 Years".into(),
            summary: "Experienced Project Manager with a history of successfully delivering complex projects on time and within budget.".into(),
            current_employment_status: "Full-time".into(),
            date_of_birth: "1988-12-01".into(),
            relevant_experience: "10 Years".into(),
            salary_expectation: "€75,000".into(),
            status: ApplicantStatus::Rejected,
            salary_type: SalaryType::Annual,
            language_skills: tags(&[
                "Spanish (Native)",
                "English (Fluent)",
                "Portuguese (Conversational)",
            ]),
            last_modified: stamp(2023, 7, 11, 18, 45),
        },
    ]
}
