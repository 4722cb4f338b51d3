//! Question catalogue: the three fixed multiple-choice questions.
//!
//! Each question is an enum implementing [`Choice`]: the enum's variants are
//! the options, in display order, so once an answer has been parsed it can
//! only ever be one of the listed options. The session runner drives every
//! question through the same generic ask-until-valid loop.

use crate::types::Interaction;

/// A multiple-choice question whose answers are the variants of `Self`.
pub trait Choice: Copy + Eq + std::fmt::Debug + 'static {
    /// 1-based position in the questionnaire.
    const STEP: u32;
    /// Question text.
    const PROMPT: &'static str;
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Single upper-case letter the user types to pick this option.
    fn key(self) -> &'static str;

    /// Human-readable description of this option.
    fn label(self) -> &'static str;

    /// Parse user input: surrounding whitespace is ignored and letters are
    /// matched case-insensitively.
    fn from_key(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(input))
    }

    /// Valid keys in display order.
    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.key()).collect()
    }

    /// Key → description mapping in display order.
    fn options() -> serde_json::Map<String, serde_json::Value> {
        Self::ALL
            .iter()
            .map(|c| (c.key().to_string(), serde_json::Value::from(c.label())))
            .collect()
    }

    /// The log record for having answered `self`.
    fn interaction(self) -> Interaction {
        Interaction {
            step: Self::STEP,
            question: Self::PROMPT.to_string(),
            options: Self::options(),
            user_answer_key: self.key().to_string(),
            user_answer_value: self.label().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Question 1 (experience)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experience {
    Entry,
    Mid,
    Senior,
}

impl Choice for Experience {
    const STEP: u32 = 1;
    const PROMPT: &'static str = "What is your current experience level?";
    const ALL: &'static [Self] = &[Experience::Entry, Experience::Mid, Experience::Senior];

    fn key(self) -> &'static str {
        match self {
            Experience::Entry => "A",
            Experience::Mid => "B",
            Experience::Senior => "C",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Experience::Entry => "Entry-level (0-2 years)",
            Experience::Mid => "Mid-level (3-7 years)",
            Experience::Senior => "Senior-level (8+ years)",
        }
    }
}

// ---------------------------------------------------------------------------
// Question 2 (goal)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    DeepenExpertise,
    Management,
    Specialization,
    Compensation,
    WorkLifeBalance,
}

impl Choice for Goal {
    const STEP: u32 = 2;
    const PROMPT: &'static str = "What is your primary career goal right now?";
    const ALL: &'static [Self] = &[
        Goal::DeepenExpertise,
        Goal::Management,
        Goal::Specialization,
        Goal::Compensation,
        Goal::WorkLifeBalance,
    ];

    fn key(self) -> &'static str {
        match self {
            Goal::DeepenExpertise => "A",
            Goal::Management => "B",
            Goal::Specialization => "C",
            Goal::Compensation => "D",
            Goal::WorkLifeBalance => "E",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Goal::DeepenExpertise => "Deepen technical expertise in my current area.",
            Goal::Management => "Move into management or team leadership.",
            Goal::Specialization => "Explore a different specialization (e.g. cloud, security, data).",
            Goal::Compensation => "Increase compensation.",
            Goal::WorkLifeBalance => "Improve work-life balance.",
        }
    }
}

// ---------------------------------------------------------------------------
// Question 3 (learning)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Learning {
    Certifications,
    Courses,
    SelfStudy,
    OnTheJob,
}

impl Choice for Learning {
    const STEP: u32 = 3;
    const PROMPT: &'static str = "What's your preferred method for acquiring new skills?";
    const ALL: &'static [Self] = &[
        Learning::Certifications,
        Learning::Courses,
        Learning::SelfStudy,
        Learning::OnTheJob,
    ];

    fn key(self) -> &'static str {
        match self {
            Learning::Certifications => "A",
            Learning::Courses => "B",
            Learning::SelfStudy => "C",
            Learning::OnTheJob => "D",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Learning::Certifications => "Formal certifications (e.g. AWS, CISSP, CCNA).",
            Learning::Courses => "Structured courses (online or in person).",
            Learning::SelfStudy => "Self-study and hands-on practice.",
            Learning::OnTheJob => "On-the-job training and mentoring.",
        }
    }
}

/// The three answer slots collected by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Answers {
    pub experience: Experience,
    pub goal: Goal,
    pub learning: Learning,
}
