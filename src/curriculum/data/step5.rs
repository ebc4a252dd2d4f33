//! Step 5 - RAG

use crate::curriculum::model::ContentRecord;

pub static DETAILS: &[(&str, ContentRecord)] = &[
    (
        "MCP",
        ContentRecord {
            title: "Multi-Candidate Prompting (MCP)",
            description: "Learn about advanced prompting techniques where multiple candidate responses or reasoning paths are generated and evaluated to produce a final, higher-quality answer.",
            learning_points: &[],
        },
    ),
    (
        "Reranking",
        ContentRecord {
            title: "Advanced Reranking",
            description: "Go beyond basic reranking by using more sophisticated models (cross-encoders) or learning-to-rank techniques to improve the relevance of retrieved context.",
            learning_points: &[],
        },
    ),
    (
        "Data preparation",
        ContentRecord {
            title: "Data Preparation for RAG",
            description: "Focus on the complete data pipeline for RAG, including cleaning, structuring, chunking, and generating high-quality embeddings for your knowledge base.",
            learning_points: &[],
        },
    ),
    (
        "Multi-step retrieval",
        ContentRecord {
            title: "Multi-step Retrieval",
            description: "Explore techniques where the retrieval process is broken down into multiple steps, allowing an agent to refine its query or explore information iteratively.",
            learning_points: &[],
        },
    ),
    (
        "Data retrieval and generation",
        ContentRecord {
            title: "Retrieval and Generation Pipelines",
            description: "Understand how to construct end-to-end RAG pipelines, connecting the retriever, the reranker, and the generator (LLM) into a cohesive system.",
            learning_points: &[],
        },
    ),
    (
        "LLM Orchestration Frameworks",
        ContentRecord {
            title: "LLM Orchestration Frameworks",
            description: "Learn to use powerful frameworks like LangChain, LlamaIndex, or Haystack to simplify the development and deployment of complex RAG and agentic systems.",
            learning_points: &[],
        },
    ),
];
