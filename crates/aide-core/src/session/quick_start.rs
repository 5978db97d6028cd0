/// A canned opening message offered on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStart {
    pub title: &'static str,
    pub description: &'static str,
    pub message: &'static str,
}

pub const QUICK_START_PROMPTS: [QuickStart; 5] = [
    QuickStart {
        title: "Code Helper",
        description: "Get help with programming in any language",
        message: "I need help with coding. Can you assist me with programming questions?",
    },
    QuickStart {
        title: "Problem Solver",
        description: "Find solutions to complex problems",
        message: "I have a problem I need help solving. Can you guide me through it?",
    },
    QuickStart {
        title: "Life Coach",
        description: "Get advice and emotional support",
        message: "I could use some life advice and guidance. Can you help me?",
    },
    QuickStart {
        title: "Learning Assistant",
        description: "Learn new topics and concepts",
        message: "I want to learn something new. Can you teach me about different topics?",
    },
    QuickStart {
        title: "Productivity",
        description: "Boost your efficiency and organization",
        message: "Help me be more productive and organized in my daily tasks.",
    },
];
