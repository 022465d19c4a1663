//! Seed data.
//!
//! Every [`Database`](crate::Database) starts from the same fixed corpus;
//! state is volatile and re-seeded identically on every construction.
//! Seed ids are short literals so scenario tests can reference them
//! directly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::entity::EntityKind;
use crate::record::{Fields, Record, RecordId};
use crate::value::Value;

fn strings(items: &[&str]) -> Value {
    items.iter().copied().map(Value::from).collect()
}

fn record(id: &str, created: DateTime<Utc>, fields: Fields) -> Record {
    Record::new(RecordId::from(id), created, fields)
}

fn projects(now: DateTime<Utc>) -> Vec<Record> {
    vec![
        record(
            "1",
            now,
            Fields::new()
                .with("title", "Smart Contract Audit for DeFi Protocol")
                .with("category", "blockchain")
                .with("experience_level", "EXPERT")
                .with(
                    "description",
                    "We need an experienced smart contract auditor to review our new DeFi \
                     lending protocol. The audit should cover potential vulnerabilities, gas \
                     optimization, and security best practices.",
                )
                .with(
                    "required_skills",
                    strings(&["Solidity", "Smart Contracts", "Security", "DeFi"]),
                )
                .with("budget_min", 5000i64)
                .with("budget_max", 8000i64)
                .with("timeline", "2-3 weeks")
                .with("proposals_count", 7i64)
                .with("status", "open"),
        ),
        record(
            "2",
            now,
            Fields::new()
                .with("title", "UI/UX Design for ICP Wallet")
                .with("category", "design")
                .with("experience_level", "INTERMEDIATE")
                .with(
                    "description",
                    "Design a sleek and intuitive user interface for a new Arbitrum-based \
                     crypto wallet, focusing on ease of use and security.",
                )
                .with("required_skills", strings(&["UI/UX", "Figma", "Web3 Design"]))
                .with("budget_min", 3000i64)
                .with("budget_max", 6000i64)
                .with("timeline", "4-6 weeks")
                .with("proposals_count", 5i64)
                .with("status", "open"),
        ),
        record(
            "3",
            now,
            Fields::new()
                .with("title", "ICP Dapp Frontend Development")
                .with("category", "icp_development")
                .with("experience_level", "BEGINNER")
                .with(
                    "description",
                    "Develop a frontend for our new ICP dapp that connects to our existing \
                     canister.",
                )
                .with(
                    "required_skills",
                    strings(&["React", "TypeScript", "DFINITY", "ICP"]),
                )
                .with("budget_min", 2000i64)
                .with("budget_max", 4000i64)
                .with("timeline", "3-4 weeks")
                .with("proposals_count", 3i64)
                .with("status", "open"),
        ),
    ]
}

fn proposals(now: DateTime<Utc>) -> Vec<Record> {
    vec![
        record(
            "1",
            now,
            Fields::new()
                .with("project_id", "1")
                .with("user_id", "1")
                .with("title", "Expert Solidity Auditor")
                .with(
                    "description",
                    "I have 5 years of experience auditing DeFi protocols and can help you \
                     identify vulnerabilities.",
                )
                .with("bid_amount", 6000i64)
                .with("timeline", "2 weeks")
                .with("status", "pending"),
        ),
        record(
            "2",
            now,
            Fields::new()
                .with("project_id", "1")
                .with("user_id", "2")
                .with("title", "Security Researcher Proposal")
                .with(
                    "description",
                    "I specialize in DeFi security and have audited over 20 protocols.",
                )
                .with("bid_amount", 7000i64)
                .with("timeline", "3 weeks")
                .with("status", "pending"),
        ),
    ]
}

fn messages(now: DateTime<Utc>) -> Vec<Record> {
    vec![
        record(
            "1",
            now,
            Fields::new()
                .with("from_user_id", "1")
                .with("to_user_id", "2")
                .with(
                    "content",
                    "Hello, I saw your project and wanted to discuss the details.",
                )
                .with("read", false),
        ),
        record(
            "2",
            now,
            Fields::new()
                .with("from_user_id", "2")
                .with("to_user_id", "1")
                .with("content", "Hi there! Sure, what would you like to know?")
                .with("read", true),
        ),
    ]
}

fn bounties(now: DateTime<Utc>) -> Vec<Record> {
    vec![
        record(
            "1",
            now,
            Fields::new()
                .with("title", "Fix Authentication Bug")
                .with("description", "We need to fix a bug in our authentication flow.")
                .with("reward", 500i64)
                .with("deadline", "2023-12-31")
                .with("status", "open"),
        ),
        record(
            "2",
            now,
            Fields::new()
                .with("title", "Implement Dark Mode")
                .with("description", "Add dark mode support to our app.")
                .with("reward", 300i64)
                .with("deadline", "2023-11-30")
                .with("status", "open"),
        ),
    ]
}

fn bounty_submissions(now: DateTime<Utc>) -> Vec<Record> {
    vec![record(
        "1",
        now,
        Fields::new()
            .with("bounty_id", "1")
            .with("user_id", "2")
            .with(
                "description",
                "I fixed the authentication bug by updating the token validation.",
            )
            .with("repository_url", "https://github.com/example/repo")
            .with("status", "pending"),
    )]
}

fn hackathons(now: DateTime<Utc>) -> Vec<Record> {
    vec![record(
        "1",
        now,
        Fields::new()
            .with("title", "ICP Summer Hackathon")
            .with("description", "Build innovative dapps on the Internet Computer.")
            .with("start_date", "2023-07-15")
            .with("end_date", "2023-07-30")
            .with("prize_pool", 10000i64)
            .with("status", "active"),
    )]
}

fn hackathon_registrations(now: DateTime<Utc>) -> Vec<Record> {
    vec![record(
        "1",
        now,
        Fields::new()
            .with("hackathon_id", "1")
            .with("user_id", "1")
            .with("team_name", "ByteBuilders")
            .with("project_idea", "A decentralized social media platform on ICP.")
            .with("status", "approved"),
    )]
}

fn users(now: DateTime<Utc>) -> Vec<Record> {
    vec![
        record(
            "1",
            now,
            Fields::new()
                .with("name", "John Doe")
                .with("email", "john@example.com")
                .with("bio", "Experienced smart contract developer")
                .with("skills", strings(&["Solidity", "JavaScript", "React"]))
                .with("role", "developer"),
        ),
        record(
            "2",
            now,
            Fields::new()
                .with("name", "Jane Smith")
                .with("email", "jane@example.com")
                .with("bio", "UI/UX designer with 5 years experience")
                .with("skills", strings(&["UI/UX", "Figma", "Adobe XD"]))
                .with("role", "designer"),
        ),
    ]
}

/// Builds the full seed corpus, one collection per entity kind, all
/// stamped with the same construction-time `created_date`.
pub(crate) fn collections() -> HashMap<EntityKind, Vec<Record>> {
    let now = Utc::now();
    EntityKind::ALL
        .into_iter()
        .map(|kind| {
            let records = match kind {
                EntityKind::Projects => projects(now),
                EntityKind::Proposals => proposals(now),
                EntityKind::Messages => messages(now),
                EntityKind::Bounties => bounties(now),
                EntityKind::BountySubmissions => bounty_submissions(now),
                EntityKind::Hackathons => hackathons(now),
                EntityKind::HackathonRegistrations => hackathon_registrations(now),
                EntityKind::Users => users(now),
            };
            (kind, records)
        })
        .collect()
}
