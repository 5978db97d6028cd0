//! Keyword-driven reply generation.
//!
//! Replies are chosen by a fixed decision order; the first rule that matches
//! wins. All keyword tests are case-insensitive.
//!
//! 1. adult-content keyword → age verification prompt
//! 2. the whole trimmed message is a greeting → greeting + capability summary
//! 3. programming keyword → code sample
//! 4. "help" or "how" → capability list
//! 5. the previous context entry says thanks → acknowledgment
//! 6. topic keyword → topic overview
//! 7. anything else → one of two general analysis templates

use super::personality::{thanks, voice};
use super::templates;
use crate::settings::PersonalityMode;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

const ADULT_KEYWORDS: [&str; 14] = [
    "porn",
    "sex",
    "nude",
    "naked",
    "adult",
    "xxx",
    "erotic",
    "sexual",
    "masturbat",
    "orgasm",
    "penis",
    "vagina",
    "breast",
    "nipple",
];

const GREETINGS: [&str; 6] = [
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

const PROGRAMMING_KEYWORDS: [&str; 7] = [
    "code",
    "programming",
    "javascript",
    "python",
    "react",
    "html",
    "css",
];

const HELP_KEYWORDS: [&str; 2] = ["help", "how"];

/// Everything the generator looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRequest {
    pub message: String,
    pub personality: PersonalityMode,
    /// Conversation context as it was before `message` was appended
    pub context: Vec<String>,
}

impl ResponseRequest {
    pub fn new(
        message: impl Into<String>,
        personality: PersonalityMode,
        context: Vec<String>,
    ) -> Self {
        Self {
            message: message.into(),
            personality,
            context,
        }
    }
}

/// Code sample offered by the programming branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CodeSample {
    JavaScript,
    Python,
    AdvancedPython,
    React,
    HtmlCss,
}

impl CodeSample {
    /// Picks the sample for an already lowercased message.
    ///
    /// Later rules override earlier ones: html/css beats "advanced python",
    /// which beats react, which beats python. JavaScript is the default.
    fn select(lower: &str) -> Self {
        if lower.contains("html") || lower.contains("css") {
            Self::HtmlCss
        } else if lower.contains("advanced python") {
            Self::AdvancedPython
        } else if lower.contains("react") {
            Self::React
        } else if lower.contains("python") {
            Self::Python
        } else {
            Self::JavaScript
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Self::JavaScript => templates::JAVASCRIPT_SAMPLE,
            Self::Python => templates::PYTHON_SAMPLE,
            Self::AdvancedPython => templates::ADVANCED_PYTHON_SAMPLE,
            Self::React => templates::REACT_SAMPLE,
            Self::HtmlCss => templates::HTML_CSS_SAMPLE,
        }
    }
}

/// Topics with a dedicated overview, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Topic {
    Health,
    Technology,
    Education,
    Travel,
    Finance,
}

impl Topic {
    fn keyword(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Technology => "technology",
            Self::Education => "education",
            Self::Travel => "travel",
            Self::Finance => "finance",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Self::Health => templates::HEALTH,
            Self::Technology => templates::TECHNOLOGY,
            Self::Education => templates::EDUCATION,
            Self::Travel => templates::TRAVEL,
            Self::Finance => templates::FINANCE,
        }
    }
}

/// Which rule of the decision order a message falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    AgeVerification,
    Greeting,
    Code(CodeSample),
    Help,
    Thanks,
    Topic(Topic),
    General,
}

/// Classifies a message. Personality plays no part in the decision.
pub fn classify(message: &str, context: &[String]) -> ResponseKind {
    let lower = message.to_lowercase();

    if ADULT_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return ResponseKind::AgeVerification;
    }

    let trimmed = lower.trim();
    if GREETINGS.iter().any(|g| trimmed == *g) {
        return ResponseKind::Greeting;
    }

    if PROGRAMMING_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return ResponseKind::Code(CodeSample::select(&lower));
    }

    if HELP_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return ResponseKind::Help;
    }

    if context
        .last()
        .is_some_and(|last| last.to_lowercase().contains("thank"))
    {
        return ResponseKind::Thanks;
    }

    if let Some(topic) = Topic::iter().find(|t| lower.contains(t.keyword())) {
        return ResponseKind::Topic(topic);
    }

    ResponseKind::General
}

/// Produces the reply text for `request`.
///
/// `rng` picks the lead-in sentence and the fallback template; seed it to get
/// reproducible output.
pub fn generate<R: Rng + ?Sized>(request: &ResponseRequest, rng: &mut R) -> String {
    let personality = request.personality;
    let kind = classify(&request.message, &request.context);

    match kind {
        ResponseKind::AgeVerification => templates::AGE_VERIFICATION.to_string(),
        ResponseKind::Greeting => format!(
            "{}\n\n{}",
            voice(personality).greeting,
            templates::CAPABILITY_SUMMARY
        ),
        ResponseKind::Code(sample) => format!(
            "{}\n\n{}\n\n{}\n\n{}",
            lead_in(personality, rng),
            templates::CODE_INTRO,
            sample.source(),
            templates::CODE_FOOTER
        ),
        ResponseKind::Help => {
            let topics: Vec<String> = templates::HELP_TOPICS
                .iter()
                .map(|t| format!("• {t}"))
                .collect();
            format!(
                "{}\n\n{}\n\n{}\n\n{}",
                lead_in(personality, rng),
                templates::HELP_INTRO,
                topics.join("\n"),
                templates::HELP_FOOTER
            )
        }
        ResponseKind::Thanks => thanks(personality).to_string(),
        ResponseKind::Topic(topic) => {
            format!("{}\n\n{}", lead_in(personality, rng), topic.body())
        }
        ResponseKind::General => {
            let lead = lead_in(personality, rng);
            let body = templates::GENERAL
                .choose(rng)
                .copied()
                .unwrap_or(templates::GENERAL[0]);
            format!("{lead}\n\n{body}")
        }
    }
}

fn lead_in<R: Rng + ?Sized>(personality: PersonalityMode, rng: &mut R) -> &'static str {
    let lead_ins = &voice(personality).lead_ins;
    lead_ins.choose(rng).copied().unwrap_or(lead_ins[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn owned(context: &[&str]) -> Vec<String> {
        context.iter().map(|c| c.to_string()).collect()
    }

    fn reply(message: &str, personality: PersonalityMode, context: &[&str]) -> String {
        let mut rng = StdRng::seed_from_u64(7);
        generate(
            &ResponseRequest::new(message, personality, owned(context)),
            &mut rng,
        )
    }

    #[test]
    fn test_safety_check_precedes_everything() {
        let text = reply("Can you help me with adult content?", PersonalityMode::Casual, &[]);
        assert_eq!(text, templates::AGE_VERIFICATION);
        assert_eq!(classify("Hello xxx", &[]), ResponseKind::AgeVerification);
        assert_eq!(classify("python code for NUDE filter", &[]), ResponseKind::AgeVerification);
    }

    #[test]
    fn test_greeting_requires_whole_message() {
        assert_eq!(classify("hello", &[]), ResponseKind::Greeting);
        assert_eq!(classify("  Good Morning  ", &[]), ResponseKind::Greeting);
        assert_ne!(classify("hello there", &[]), ResponseKind::Greeting);
        assert_ne!(classify("hi!", &[]), ResponseKind::Greeting);
    }

    #[test]
    fn test_greeting_text_depends_on_personality() {
        for personality in PersonalityMode::iter() {
            let text = reply("hey", personality, &[]);
            assert!(text.starts_with(voice(personality).greeting));
            assert!(text.ends_with(templates::CAPABILITY_SUMMARY));
        }
    }

    #[test]
    fn test_code_sample_selection() {
        let cases = [
            ("show me some code", CodeSample::JavaScript),
            ("a javascript example", CodeSample::JavaScript),
            ("python please", CodeSample::Python),
            ("React with python backend", CodeSample::React),
            ("advanced python with react", CodeSample::AdvancedPython),
            ("advanced python and some css", CodeSample::HtmlCss),
            ("an HTML page", CodeSample::HtmlCss),
        ];
        for (message, expected) in cases {
            assert_eq!(classify(message, &[]), ResponseKind::Code(expected), "{message}");
        }
    }

    #[test]
    fn test_code_reply_layout() {
        let text = reply("write python code", PersonalityMode::Professional, &[]);
        assert!(voice(PersonalityMode::Professional)
            .lead_ins
            .iter()
            .any(|l| text.starts_with(l)));
        assert!(text.contains(templates::PYTHON_SAMPLE));
        assert!(text.ends_with(templates::CODE_FOOTER));
    }

    #[test]
    fn test_code_beats_help() {
        assert_eq!(
            classify("how do I write react hooks", &[]),
            ResponseKind::Code(CodeSample::React)
        );
    }

    #[test]
    fn test_help_reply() {
        assert_eq!(classify("How should I start?", &[]), ResponseKind::Help);
        let text = reply("I need help", PersonalityMode::Motivational, &[]);
        assert!(text.contains("• **Career Guidance**"));
        assert!(text.ends_with(templates::HELP_FOOTER));
    }

    #[test]
    fn test_thanks_uses_previous_context() {
        let context = ["Thank you so much!"];
        assert_eq!(classify("ok", &owned(&context)), ResponseKind::Thanks);
        assert_eq!(
            reply("ok", PersonalityMode::Funny, &context),
            thanks(PersonalityMode::Funny)
        );
        assert_eq!(
            reply("ok", PersonalityMode::Casual, &context),
            thanks(PersonalityMode::Professional)
        );
        // Only the most recent entry counts.
        assert_ne!(
            classify("ok", &owned(&["thanks", "later message"])),
            ResponseKind::Thanks
        );
        assert_eq!(
            classify("ok", &owned(&["earlier", "many THANKS"])),
            ResponseKind::Thanks
        );
    }

    #[test]
    fn test_topics_in_fixed_order() {
        assert_eq!(classify("tell me about travel", &[]), ResponseKind::Topic(Topic::Travel));
        assert_eq!(
            classify("finance and health tips", &[]),
            ResponseKind::Topic(Topic::Health)
        );
        assert_eq!(
            classify("education technology", &[]),
            ResponseKind::Topic(Topic::Technology)
        );
        let text = reply("personal finance", PersonalityMode::Funny, &[]);
        assert!(text.ends_with(templates::FINANCE));
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify("quantum entanglement", &[]), ResponseKind::General);
        let text = reply("quantum entanglement", PersonalityMode::Casual, &[]);
        assert!(templates::GENERAL.iter().any(|body| text.ends_with(body)));
    }

    #[test]
    fn test_same_seed_same_reply() {
        let request = ResponseRequest::new("tell me something", PersonalityMode::Funny, vec![]);
        let a = generate(&request, &mut StdRng::seed_from_u64(42));
        let b = generate(&request, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_personality_never_changes_branch() {
        for personality in PersonalityMode::iter() {
            assert!(reply("css grid", personality, &[]).contains(templates::HTML_CSS_SAMPLE));
            assert!(reply("travel", personality, &[]).ends_with(templates::TRAVEL));
            assert_eq!(reply("nude", personality, &[]), templates::AGE_VERIFICATION);
        }
    }
}
