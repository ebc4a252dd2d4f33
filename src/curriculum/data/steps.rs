//! The ten roadmap steps

use crate::curriculum::model::Step;

pub static STEPS: &[Step] = &[
    Step {
        id: 1,
        title: "Coding Fundamentals",
        description: "Every strong AI engineer starts with the fundamentals. Learn Python, Bash, Git, and testing to build a solid foundation for your journey.",
        skills: &[
            "Python",
            "Bash",
            "UI Framework Basics (React)",
            "Basic DS & Algos",
            "Git & version control",
            "Testing frameworks (PyTest)",
            "Streamlit / Gradio",
        ],
    },
    Step {
        id: 2,
        title: "LLM APIs",
        description: "Learn how to interact with models by understanding LLM APIs. This will teach you structured outputs, caching, system prompts, and more.",
        skills: &[
            "KV caching",
            "System prompts",
            "Types of LLMs",
            "Prompt Caching",
            "Structured Outputs",
            "Multi-modal models",
            "Rate limits, batching, retries",
            "Cost/performance trade-offs",
        ],
    },
    Step {
        id: 3,
        title: "LLM Augmentation",
        description: "APIs are great, but raw LLMs need the latest info to be effective. Learn how LLMs are augmented with more info and patterns like fine-tuning, RAG, and prompt engineering.",
        skills: &[
            "Tool Use",
            "Fine-tuning",
            "Basics of RAG",
            "Prompt Engineering",
            "Context engineering",
        ],
    },
    Step {
        id: 4,
        title: "Retrieval Techniques",
        description: "Strong LLMs are useless without context. That's where Retrieval techniques help. Learn about vector DBs, hybrid retrieval, and indexing strategies.",
        skills: &[
            "Vector Databases",
            "Graph Databases",
            "Hybrid retrieval",
            "Reranking pipelines",
            "Indexing strategies (HNSW, IVF)",
            "Chunking and embedding",
        ],
    },
    Step {
        id: 5,
        title: "RAG",
        description: "Once retrieval is solid, move into Retrieval-Augmented Generation. Learn to build retrieval + generation pipelines, reranking, and multi-step retrieval.",
        skills: &[
            "MCP",
            "Reranking",
            "Data preparation",
            "Multi-step retrieval",
            "Data retrieval and generation",
            "LLM Orchestration Frameworks",
        ],
    },
    Step {
        id: 6,
        title: "AI Agents",
        description: "Step into AI Agents, where AI moves from answering to acting. Learn memory, multi-agent systems, human-in-the-loop design, and agentic patterns.",
        skills: &[
            "Memory",
            "A2A, ACP etc",
            "Human-in-the-loop",
            "Multi-Agent systems",
            "AI Agent Design Patterns",
            "Agent Orchestration",
        ],
    },
    Step {
        id: 7,
        title: "Infrastructure",
        description: "Learn how to ship in production with Infrastructure. This will teach you CI/CD, containers, model routing, Kubernetes, and deployment at scale.",
        skills: &[
            "CI/CD",
            "Kubernetes",
            "Cloud Services",
            "Model Routing",
            "Containerization",
            "LLM deployment",
        ],
    },
    Step {
        id: 8,
        title: "Observability & Evaluation",
        description: "Focus on Observability & Evaluation. Learn how to create eval datasets, LLM-as-a-judge, tracing, instrumentation, and continuous evaluation pipelines.",
        skills: &[
            "LLM-as-a-judge",
            "Multi-turn evals",
            "AI Agent Evaluation",
            "Component-level evals",
            "Observability platforms",
            "AI Agent instrumentation",
        ],
    },
    Step {
        id: 9,
        title: "Security",
        description: "Security is crucial. Learn how to implement guardrails, sandboxing, prompt injection defenses, and ethical guidelines to build safe AI systems.",
        skills: &[
            "Guardrails",
            "Sandboxing",
            "Ethical guidelines",
            "Prompt injection defenses",
        ],
    },
    Step {
        id: 10,
        title: "Advanced Steps",
        description: "Finally, explore advanced workflows. This covers voice & vision agents, CLI agents, robotics, agent swarms, and self-refining AI systems.",
        skills: &[
            "CLI Agents",
            "Slack agents",
            "Computer use",
            "Agent swarms",
            "Self-refinement",
            "Robotic Agents",
            "Voice and Vision Agents",
            "Automated Prompt Engineering",
        ],
    },
];
