//! Personality-specific wording.

use crate::settings::PersonalityMode;

/// Text a personality contributes to a reply.
#[derive(Debug)]
pub struct Voice {
    pub greeting: &'static str,
    pub lead_ins: [&'static str; 4],
}

const PROFESSIONAL: Voice = Voice {
    greeting: "Good day! I'm here to provide you with accurate, comprehensive assistance. How may I help you achieve your objectives today?",
    lead_ins: [
        "Based on my analysis, I recommend the following approach:",
        "From a professional standpoint, the optimal solution would be:",
        "Let me provide you with a structured response to address your inquiry:",
        "I can offer you several evidence-based strategies for this situation:",
    ],
};

const CASUAL: Voice = Voice {
    greeting: "Hey there! 😊 I'm super excited to chat with you and help out however I can. What's on your mind?",
    lead_ins: [
        "Oh, that's a great question! Here's what I'm thinking:",
        "You know what? I've got some cool ideas for you:",
        "That's totally doable! Let me break it down for you:",
        "Awesome question! Here's the deal:",
    ],
};

const MOTIVATIONAL: Voice = Voice {
    greeting: "Welcome, champion! 🌟 You've got this, and I'm here to support your journey to greatness. What goals are we crushing today?",
    lead_ins: [
        "You're on the right track! Here's how we can level this up:",
        "I believe in you! Let's tackle this challenge together:",
        "This is your moment to shine! Here's the game plan:",
        "You've got incredible potential! Let's unlock it with this approach:",
    ],
};

const FUNNY: Voice = Voice {
    greeting: "Well, well, well! Look who decided to chat with the most entertaining AI on the internet! 😄 What can I help you with, you magnificent human?",
    lead_ins: [
        "Haha, great question! Let me put on my thinking cap (it's invisible, but very stylish):",
        "Oh boy, do I have some ideas for you! *cracks digital knuckles*",
        "This is like my favorite type of problem! Here's what my silicon brain came up with:",
        "You know what's funny? I was just thinking about this exact thing! Here's the scoop:",
    ],
};

const THANKS_FUNNY: &str = "Aww, you're making my circuits all warm and fuzzy! 🥰 I'm always here to provide detailed, helpful assistance. What else can I dive deep into for you?";

const THANKS_DEFAULT: &str = "You're very welcome! I'm designed to provide comprehensive, reliable assistance. Is there anything else you'd like me to explain in detail or help you with?";

pub fn voice(personality: PersonalityMode) -> &'static Voice {
    match personality {
        PersonalityMode::Professional => &PROFESSIONAL,
        PersonalityMode::Casual => &CASUAL,
        PersonalityMode::Motivational => &MOTIVATIONAL,
        PersonalityMode::Funny => &FUNNY,
    }
}

/// Acknowledgment used after the user said thanks.
pub fn thanks(personality: PersonalityMode) -> &'static str {
    match personality {
        PersonalityMode::Funny => THANKS_FUNNY,
        _ => THANKS_DEFAULT,
    }
}
