//! Step 6 - AI Agents

use crate::curriculum::model::ContentRecord;

pub static DETAILS: &[(&str, ContentRecord)] = &[
    (
        "Memory",
        ContentRecord {
            title: "Agent Memory",
            description: "Explore different types of memory for AI agents, including short-term (context window) and long-term (vector stores), to enable stateful and context-aware conversations.",
            learning_points: &[],
        },
    ),
    (
        "A2A, ACP etc",
        ContentRecord {
            title: "Agentic Patterns (A2A, ACP)",
            description: "Learn about foundational agentic patterns like Agent-to-Agent (A2A) and Agent-Component-Provider (ACP) communication to design robust multi-agent systems.",
            learning_points: &[],
        },
    ),
    (
        "Human-in-the-loop",
        ContentRecord {
            title: "Human-in-the-Loop",
            description: "Understand how to design systems where humans can effectively supervise, guide, and intervene in the agent's decision-making process for safety and accuracy.",
            learning_points: &[],
        },
    ),
    (
        "Multi-Agent systems",
        ContentRecord {
            title: "Multi-Agent Systems",
            description: "Learn the principles of designing systems where multiple specialized agents collaborate, negotiate, and delegate tasks to solve complex problems.",
            learning_points: &[],
        },
    ),
    (
        "AI Agent Design Patterns",
        ContentRecord {
            title: "AI Agent Design Patterns",
            description: "Study recurring solutions to common problems in agent design, such as ReAct (Reason + Act), self-reflection, and tool use strategies.",
            learning_points: &[],
        },
    ),
    (
        "Agent Orchestration",
        ContentRecord {
            title: "Agent Orchestration",
            description: "Explore the challenges and solutions for managing the execution, state, and communication of multiple agents within a larger application.",
            learning_points: &[],
        },
    ),
];
