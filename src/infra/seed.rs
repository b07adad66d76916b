//! Built-in catalog used when no catalog file is configured.

use crate::domain::{color::HexColor, group::Group, message::Message};

use super::store::CatalogEntry;

struct SeedMessage {
    id: &'static str,
    sender: &'static str,
    text: &'static str,
    age_secs: i64,
}

struct SeedGroup {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    member_count: u32,
    is_joined: bool,
    color: HexColor,
    messages: &'static [SeedMessage],
}

const SEED_GROUPS: &[SeedGroup] = &[
    SeedGroup {
        id: "1",
        title: "Productivity Masters",
        description: "Share tips, tools, and techniques for maximizing productivity",
        member_count: 1247,
        is_joined: false,
        color: HexColor::new(0xFF, 0x6B, 0x6B),
        messages: &[
            SeedMessage {
                id: "1",
                sender: "Sarah Chen",
                text: "Hey everyone! What productivity tools are you using these days?",
                age_secs: 3600,
            },
            SeedMessage {
                id: "2",
                sender: "You",
                text: "I've been loving Notion for project management and Forest for focus time!",
                age_secs: 1800,
            },
            SeedMessage {
                id: "3",
                sender: "Mike Johnson",
                text: "Forest is amazing! I also use RescueTime to track where my time goes.",
                age_secs: 900,
            },
            SeedMessage {
                id: "4",
                sender: "Alex Rivera",
                text: "Has anyone tried the Pomodoro technique with Forest?",
                age_secs: 300,
            },
        ],
    },
    SeedGroup {
        id: "2",
        title: "Creative Coders",
        description: "Discuss innovative coding approaches and creative solutions",
        member_count: 892,
        is_joined: true,
        color: HexColor::new(0x4E, 0xCD, 0xC4),
        messages: &[
            SeedMessage {
                id: "1",
                sender: "Emma Wilson",
                text: "What's your favorite design pattern for React components?",
                age_secs: 2400,
            },
            SeedMessage {
                id: "2",
                sender: "You",
                text: "I love the compound component pattern for complex UIs!",
                age_secs: 1200,
            },
        ],
    },
    SeedGroup {
        id: "3",
        title: "Mindful Developers",
        description: "Balance work and wellness in the tech industry",
        member_count: 567,
        is_joined: false,
        color: HexColor::new(0x45, 0xB7, 0xD1),
        messages: &[SeedMessage {
            id: "1",
            sender: "David Kim",
            text: "How do you maintain work-life balance in tech?",
            age_secs: 1800,
        }],
    },
    SeedGroup {
        id: "4",
        title: "Startup Founders",
        description: "Connect with fellow entrepreneurs and share startup insights",
        member_count: 2341,
        is_joined: false,
        color: HexColor::new(0x96, 0xCE, 0xB4),
        messages: &[SeedMessage {
            id: "1",
            sender: "Lisa Park",
            text: "What's the biggest challenge you faced when starting your company?",
            age_secs: 3000,
        }],
    },
    SeedGroup {
        id: "5",
        title: "Remote Work Pros",
        description: "Master the art of remote work and distributed teams",
        member_count: 1567,
        is_joined: true,
        color: HexColor::new(0xFF, 0xEA, 0xA7),
        messages: &[
            SeedMessage {
                id: "1",
                sender: "Tom Anderson",
                text: "Best practices for managing remote teams?",
                age_secs: 1500,
            },
            SeedMessage {
                id: "2",
                sender: "You",
                text: "Daily standups and clear communication channels are key!",
                age_secs: 600,
            },
        ],
    },
];

/// Materializes the built-in catalog with timestamps relative to `seeded_at_ms`.
pub fn seed_entries(seeded_at_ms: i64) -> Vec<CatalogEntry> {
    SEED_GROUPS
        .iter()
        .map(|seed| CatalogEntry {
            group: Group {
                id: seed.id.to_owned(),
                title: seed.title.to_owned(),
                description: seed.description.to_owned(),
                member_count: seed.member_count,
                is_joined: seed.is_joined,
                color: seed.color,
            },
            messages: seed
                .messages
                .iter()
                .map(|message| {
                    Message::from_sender(
                        message.id,
                        message.sender,
                        message.text,
                        seeded_at_ms.saturating_sub(message.age_secs * 1000),
                    )
                })
                .collect(),
        })
        .collect()
}
