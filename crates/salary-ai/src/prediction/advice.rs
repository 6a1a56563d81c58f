use super::domain::JobTitle;

/// Fixed career guidance lines per job title. Total over the enum, so every
/// predicted profile gets advice without a fallback branch.
pub fn advice_for(job_title: JobTitle) -> &'static [&'static str] {
    match job_title {
        JobTitle::Clerk => &[
            "Learn spreadsheet tools like Excel and automation basics.",
            "Improve time management and digital record handling.",
        ],
        JobTitle::CustomerSupport => &[
            "Master CRM tools like Salesforce.",
            "Sharpen your empathy and conflict resolution skills.",
        ],
        JobTitle::DataAnalyst => &[
            "Master SQL, Python, and Tableau/Power BI.",
            "Turn raw data into actionable business insights.",
        ],
        JobTitle::DataScientist => &[
            "Practice machine learning and deep learning.",
            "Participate in Kaggle, learn PyTorch and Big Data tools.",
        ],
        JobTitle::Director => &[
            "Lead with strategic thinking and vision.",
            "Learn stakeholder management and business transformation.",
        ],
        JobTitle::HrManager => &[
            "Strengthen HR analytics and labor law knowledge.",
            "Upskill in employee engagement and DEI practices.",
        ],
        JobTitle::ProductManager => &[
            "Learn agile, SCRUM, and user-centric design.",
            "Blend business acumen with data-driven decisions.",
        ],
        JobTitle::SoftwareEngineer => &[
            "Sharpen coding, DSA, and system design.",
            "Master DevOps, scalable systems, and cloud tech.",
        ],
        JobTitle::Technician => &[
            "Learn diagnostics and automation tools.",
            "Certify in hardware, networking, or cloud services.",
        ],
    }
}
