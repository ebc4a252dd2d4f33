//! Step 4 - Retrieval Techniques
//!
//! Every skill in this step has a dedicated detail page; these records
//! are the one-paragraph summaries shown in the step overview.

use crate::curriculum::model::ContentRecord;

pub static DETAILS: &[(&str, ContentRecord)] = &[
    (
        "Vector Databases",
        ContentRecord {
            title: "Vector Databases",
            description: "Learn about specialized databases designed to efficiently store and query high-dimensional vector embeddings, the backbone of modern semantic search and RAG.",
            learning_points: &[],
        },
    ),
    (
        "Graph Databases",
        ContentRecord {
            title: "Graph Databases",
            description: "Explore how graph databases can model complex relationships in your data, enabling powerful context retrieval based on connections between entities.",
            learning_points: &[],
        },
    ),
    (
        "Hybrid retrieval",
        ContentRecord {
            title: "Hybrid Retrieval",
            description: "Combine the strengths of traditional keyword-based search (like BM25) and modern vector search to achieve more relevant and robust retrieval results.",
            learning_points: &[],
        },
    ),
    (
        "Reranking pipelines",
        ContentRecord {
            title: "Reranking Pipelines",
            description: "Understand how to build pipelines that take an initial set of retrieved documents and use a more sophisticated model to rerank them for optimal relevance.",
            learning_points: &[],
        },
    ),
    (
        "Indexing strategies (HNSW, IVF)",
        ContentRecord {
            title: "Indexing Strategies (HNSW, IVF)",
            description: "Dive into common indexing algorithms like HNSW and IVF that enable fast and scalable approximate nearest neighbor (ANN) search in vector databases.",
            learning_points: &[],
        },
    ),
    (
        "Chunking and embedding",
        ContentRecord {
            title: "Chunking and Embedding",
            description: "Master the critical pre-processing steps of splitting documents into meaningful chunks and converting those chunks into numerical vector representations (embeddings).",
            learning_points: &[],
        },
    ),
];
