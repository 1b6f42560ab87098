//! Static lookup tables backing the taxonomy.

use super::{RoundType, SkillCategory};
use SkillCategory::*;

/// Normalized skill keyword → categories it counts toward.
pub static SKILL_CATEGORIES: &[(&str, &[SkillCategory])] = &[
    // Languages
    ("python", &[Programming, DataAnalytics, MachineLearning]),
    ("java", &[Programming, Backend]),
    ("javascript", &[Programming, Frontend]),
    ("typescript", &[Programming, Frontend]),
    ("c++", &[Programming, DataStructuresAlgorithms]),
    ("c#", &[Programming, Backend]),
    ("c", &[Programming]),
    ("go", &[Programming, Backend]),
    ("golang", &[Programming, Backend]),
    ("rust", &[Programming, Backend]),
    ("kotlin", &[Programming, Backend]),
    ("swift", &[Programming, Frontend]),
    ("ruby", &[Programming, Backend]),
    ("php", &[Programming, Backend]),
    ("scala", &[Programming, Backend, DataAnalytics]),
    ("r", &[Programming, DataAnalytics]),
    ("sql", &[Databases, DataAnalytics]),
    // CS fundamentals
    ("algorithms", &[DataStructuresAlgorithms, ProblemSolving]),
    ("data structures", &[DataStructuresAlgorithms, Programming]),
    ("dynamic programming", &[DataStructuresAlgorithms]),
    ("graph algorithms", &[DataStructuresAlgorithms]),
    ("competitive programming", &[DataStructuresAlgorithms, ProblemSolving]),
    ("object oriented programming", &[Programming]),
    ("oop", &[Programming]),
    ("concurrency", &[Programming, SystemDesign]),
    // Architecture
    ("system design", &[SystemDesign]),
    ("distributed systems", &[SystemDesign, Backend]),
    ("microservices", &[SystemDesign, Backend]),
    ("scalability", &[SystemDesign]),
    ("api design", &[SystemDesign, Backend]),
    ("rest", &[Backend]),
    ("graphql", &[Backend, Frontend]),
    ("caching", &[SystemDesign, Backend]),
    ("message queues", &[SystemDesign, Backend]),
    ("kafka", &[SystemDesign, Backend]),
    // Frontend
    ("react", &[Frontend]),
    ("angular", &[Frontend]),
    ("vue", &[Frontend]),
    ("next.js", &[Frontend]),
    ("html", &[Frontend]),
    ("css", &[Frontend]),
    ("redux", &[Frontend]),
    ("react native", &[Frontend, Programming]),
    ("flutter", &[Frontend, Programming]),
    // Backend
    ("node.js", &[Backend, Programming]),
    ("express", &[Backend]),
    ("django", &[Backend]),
    ("flask", &[Backend]),
    ("fastapi", &[Backend]),
    ("spring", &[Backend]),
    ("spring boot", &[Backend]),
    (".net", &[Backend]),
    // Databases
    ("postgresql", &[Databases]),
    ("postgres", &[Databases]),
    ("mysql", &[Databases]),
    ("mongodb", &[Databases]),
    ("redis", &[Databases, Backend]),
    ("elasticsearch", &[Databases]),
    ("database design", &[Databases, SystemDesign]),
    // Cloud / DevOps
    ("aws", &[CloudDevops]),
    ("azure", &[CloudDevops]),
    ("gcp", &[CloudDevops]),
    ("docker", &[CloudDevops]),
    ("kubernetes", &[CloudDevops, SystemDesign]),
    ("terraform", &[CloudDevops]),
    ("ci/cd", &[CloudDevops, TestingQuality]),
    ("linux", &[CloudDevops]),
    ("devops", &[CloudDevops]),
    // Testing
    ("unit testing", &[TestingQuality]),
    ("testing", &[TestingQuality]),
    ("test automation", &[TestingQuality]),
    ("selenium", &[TestingQuality]),
    ("debugging", &[TestingQuality, ProblemSolving]),
    // Data
    ("excel", &[DataAnalytics, Finance]),
    ("tableau", &[DataAnalytics]),
    ("power bi", &[DataAnalytics]),
    ("statistics", &[DataAnalytics, MachineLearning]),
    ("data analysis", &[DataAnalytics]),
    ("data visualization", &[DataAnalytics]),
    ("a/b testing", &[DataAnalytics, ProductSense]),
    ("pandas", &[DataAnalytics, Programming]),
    ("spark", &[DataAnalytics, Backend]),
    ("etl", &[DataAnalytics, Databases]),
    // ML
    ("machine learning", &[MachineLearning]),
    ("deep learning", &[MachineLearning]),
    ("nlp", &[MachineLearning]),
    ("computer vision", &[MachineLearning]),
    ("pytorch", &[MachineLearning, Programming]),
    ("tensorflow", &[MachineLearning, Programming]),
    ("llm", &[MachineLearning]),
    // Product
    ("product management", &[ProductSense, Leadership]),
    ("product strategy", &[ProductSense, BusinessStrategy]),
    ("roadmapping", &[ProductSense]),
    ("user research", &[ProductSense]),
    ("prioritization", &[ProductSense, ProblemSolving]),
    ("metrics", &[ProductSense, DataAnalytics]),
    ("agile", &[Operations, Collaboration]),
    ("scrum", &[Operations, Collaboration]),
    // Business
    ("business strategy", &[BusinessStrategy]),
    ("market sizing", &[BusinessStrategy, ProblemSolving]),
    ("market research", &[BusinessStrategy, Marketing]),
    ("competitive analysis", &[BusinessStrategy]),
    ("consulting", &[BusinessStrategy, Communication]),
    ("financial modeling", &[Finance, BusinessStrategy]),
    ("valuation", &[Finance]),
    ("accounting", &[Finance]),
    ("budgeting", &[Finance, Operations]),
    ("forecasting", &[Finance, DataAnalytics]),
    ("seo", &[Marketing]),
    ("digital marketing", &[Marketing]),
    ("branding", &[Marketing]),
    ("sales", &[Marketing, Communication]),
    ("go-to-market", &[Marketing, BusinessStrategy]),
    ("supply chain", &[Operations]),
    ("project management", &[Operations, Leadership]),
    ("process improvement", &[Operations, ProblemSolving]),
    ("stakeholder management", &[Communication, Leadership]),
    // Soft skills
    ("communication", &[Communication]),
    ("presentation", &[Communication]),
    ("public speaking", &[Communication]),
    ("storytelling", &[Communication]),
    ("negotiation", &[Communication, Leadership]),
    ("leadership", &[Leadership]),
    ("mentoring", &[Leadership, Collaboration]),
    ("people management", &[Leadership]),
    ("decision making", &[Leadership, ProblemSolving]),
    ("teamwork", &[Collaboration]),
    ("collaboration", &[Collaboration]),
    ("cross-functional", &[Collaboration, Communication]),
    ("conflict resolution", &[Collaboration, Leadership]),
    ("problem solving", &[ProblemSolving]),
    ("critical thinking", &[ProblemSolving]),
    ("analytical thinking", &[ProblemSolving, DataAnalytics]),
];

/// Keywords too short or too common to match inside longer phrases.
/// They only resolve on an exact, whole-skill lookup.
pub static EXACT_ONLY: &[&str] = &[
    "c", "go", "r", "rest", "express", "spring", "metrics", "sales", "testing",
];

/// Priority-ordered categories per round. Earlier entries weigh more.
pub fn round_priorities(round: RoundType) -> &'static [SkillCategory] {
    match round {
        RoundType::Behavioral => &[
            Communication,
            Leadership,
            Collaboration,
            ProblemSolving,
            ProductSense,
        ],
        RoundType::Technical => &[
            SystemDesign,
            Backend,
            Programming,
            Databases,
            CloudDevops,
            Frontend,
            MachineLearning,
            DataAnalytics,
            TestingQuality,
        ],
        RoundType::Coding => &[
            Programming,
            DataStructuresAlgorithms,
            Backend,
            Frontend,
            Databases,
            TestingQuality,
        ],
        RoundType::CaseStudy => &[
            BusinessStrategy,
            ProductSense,
            DataAnalytics,
            Finance,
            Marketing,
            Operations,
            ProblemSolving,
            Communication,
        ],
    }
}

/// Exact lookup on an already-normalized skill.
pub fn lookup(normalized: &str) -> Option<&'static [SkillCategory]> {
    SKILL_CATEGORIES
        .iter()
        .find(|(k, _)| *k == normalized)
        .map(|(_, cats)| *cats)
}
