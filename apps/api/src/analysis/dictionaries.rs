// Skill vocabularies. Entries are lower-case; multi-word entries use single spaces
// so they line up with cleaned text.

pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php", "swift", "kotlin",
    "go", "rust", "scala", "r", "matlab", "perl", "shell", "bash", "powershell", "sql",
    // Web
    "html", "css", "react", "angular", "vue", "nodejs", "express", "django", "flask", "fastapi",
    "spring", "asp.net", "laravel", "rails", "jquery", "bootstrap", "tailwind", "sass", "webpack",
    // Databases
    "mysql", "postgresql", "mongodb", "redis", "oracle", "sql server", "sqlite", "cassandra",
    "dynamodb", "elasticsearch", "firebase", "mariadb", "neo4j",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "gitlab", "github", "ci/cd",
    "terraform", "ansible", "chef", "puppet", "circleci", "travis ci",
    // AI/ML
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "opencv", "nlp",
    "machine learning", "deep learning", "neural networks", "computer vision", "data science",
    // Tools & platforms
    "git", "linux", "unix", "windows", "macos", "jira", "confluence", "slack", "notion",
    "figma", "adobe", "photoshop", "illustrator", "sketch", "invision",
    // Methodologies
    "agile", "scrum", "kanban", "devops", "microservices", "rest api", "graphql", "soap",
    "tdd", "bdd", "oauth", "jwt", "websocket", "grpc",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "critical thinking",
    "time management", "adaptability", "creativity", "collaboration", "analytical",
    "decision making", "interpersonal", "presentation", "negotiation", "conflict resolution",
    "emotional intelligence", "mentoring", "coaching", "strategic thinking", "innovation",
    "customer service", "attention to detail", "multitasking", "organization", "self-motivated",
];

pub const TOOLS: &[&str] = &[
    "vscode", "visual studio", "intellij", "pycharm", "eclipse", "sublime", "atom",
    "postman", "insomnia", "swagger", "tableau", "power bi", "excel", "word", "powerpoint",
    "trello", "asana", "monday", "salesforce", "hubspot", "google analytics", "mixpanel",
    "amplitude", "segment", "datadog", "new relic", "splunk", "grafana", "prometheus",
];

/// Verbs that make resume bullets read as accomplishments.
pub const ACTION_VERBS: &[&str] = &[
    "achieved", "improved", "developed", "created", "designed", "implemented", "managed",
    "led", "coordinated", "executed", "launched", "established", "initiated", "built",
    "streamlined", "optimized", "increased", "reduced", "enhanced", "transformed",
    "delivered", "spearheaded", "pioneered", "orchestrated", "facilitated", "generated",
    "resolved", "accelerated", "maximized", "strengthened", "collaborated", "conducted",
    "analyzed", "evaluated", "strategized", "formulated", "demonstrated", "exceeded",
];

/// Section headings an ATS expects to find.
pub const RESUME_SECTIONS: &[&str] = &[
    "experience", "education", "skills", "projects", "certifications",
    "summary", "objective", "achievements", "work history",
];

/// Verbs signalling hands-on experience; matched as plain substrings.
pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "developed", "managed", "led", "implemented", "designed",
    "created", "improved", "increased", "reduced", "achieved",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entries_are_lowercase() {
        for term in TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS).chain(TOOLS) {
            assert_eq!(*term, term.to_lowercase(), "{term} is not lower-case");
        }
    }

    #[test]
    fn test_action_verb_list_has_38_unique_verbs() {
        let unique: HashSet<_> = ACTION_VERBS.iter().collect();
        assert_eq!(unique.len(), 38);
    }
}
