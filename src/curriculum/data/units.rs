//! Dedicated detail-page content for steps 1 and 4
//!
//! These records back the skills that get a full custom page rather
//! than the generic template. The Git unit additionally carries the
//! commit-message tool.

use crate::curriculum::model::{CodeExample, ContentRecord, InteractiveTool, LearningPoint};

pub const PYTHON_FOR_AI_ML: ContentRecord = ContentRecord {
    title: "Python for AI/ML Explained",
    description: "Python's dominance in AI comes from its simplicity and the power of its ecosystem. Let's dive into the core concepts and libraries that you'll use to manipulate data, perform numerical computations, and build models.",
    learning_points: &[
        LearningPoint {
            title: "Core Python Concepts: Functions & List Comprehensions",
            description: "Solid fundamentals are key. Functions allow you to organize code into reusable blocks, while list comprehensions provide a concise way to create lists, a common task in data preparation.",
            examples: &[
                CodeExample {
                    description: "A function to preprocess a list of text data by converting to lowercase and removing whitespace.",
                    code: r#"def preprocess_text(data):
    """Cleans a list of text strings."""
    return [text.lower().strip() for text in data]

# Example usage:
raw_data = ["  Hello World ", "PYTHON is Fun!  "]
cleaned_data = preprocess_text(raw_data)
# cleaned_data is now ['hello world', 'python is fun!']
print(cleaned_data)"#,
                },
            ],
        },
        LearningPoint {
            title: "NumPy: The Foundation for Numerical Computing",
            description: "NumPy (Numerical Python) is a library that provides support for large, multi-dimensional arrays and matrices, along with a collection of mathematical functions to operate on these arrays. It's the bedrock of almost every scientific Python library.",
            examples: &[
                CodeExample {
                    description: "Creating a NumPy array and performing a vectorized operation. This is significantly faster than using a standard Python loop.",
                    code: r#"import numpy as np

# Create a NumPy array from a list
embeddings = np.array([[0.1, 0.5, 0.3], [0.8, 0.2, 0.9]])

# Calculate the magnitude (L2 norm) of each embedding vector
magnitudes = np.linalg.norm(embeddings, axis=1)

# magnitudes is now array([0.59160798, 1.15325626])
print(magnitudes)"#,
                },
            ],
        },
        LearningPoint {
            title: "Pandas: Data Manipulation and Analysis",
            description: "Pandas is built on top of NumPy and is the go-to library for working with structured (tabular) data. Its primary data structure, the DataFrame, allows you to easily read, manipulate, and analyze data from various sources like CSVs or databases.",
            examples: &[
                CodeExample {
                    description: "Creating a DataFrame from a dictionary and selecting specific columns and rows.",
                    code: r#"import pandas as pd

# Create a DataFrame
data = {'user_id': [101, 102, 103], 'query': ['What is AI?', 'latest news', 'Python help'], 'clicks': [5, 12, 8]}
df = pd.DataFrame(data)

# Select queries with more than 10 clicks
high_performing_queries = df[df['clicks'] > 10]

# high_performing_queries is a new DataFrame with one row
#    user_id        query  clicks
# 1      102  latest news      12
print(high_performing_queries)"#,
                },
            ],
        },
        LearningPoint {
            title: "Matplotlib & Seaborn: Data Visualization",
            description: "Being able to visualize your data is crucial for understanding it. Matplotlib is a comprehensive library for creating static, animated, and interactive visualizations. Seaborn is built on top of Matplotlib and provides a high-level interface for drawing attractive and informative statistical graphics.",
            examples: &[
                CodeExample {
                    description: "A simple bar chart using Matplotlib to visualize the click data from our Pandas DataFrame.",
                    code: r#"import matplotlib.pyplot as plt
import pandas as pd # Assuming df from previous example

# Create a simple bar chart
plt.figure(figsize=(8, 5))
plt.bar(df['query'], df['clicks'], color=['blue', 'green', 'orange'])
plt.xlabel("User Query")
plt.ylabel("Number of Clicks")
plt.title("Query Performance")
plt.xticks(rotation=15)
plt.show() # This will display the plot"#,
                },
            ],
        },
        LearningPoint {
            title: "Object-Oriented Programming (OOP) for AI Systems",
            description: "OOP helps in creating modular and reusable code by organizing it into 'objects' which can contain data and functions. In AI, you might create a class for a data loader, a model, or a text processor. This makes your system easier to manage and scale.",
            examples: &[
                CodeExample {
                    description: "A simple RAG (Retrieval-Augmented Generation) pipeline represented as a class.",
                    code: r#"class SimpleRAG:
    def __init__(self, vector_db, llm):
        self.vector_db = vector_db
        self.llm = llm

    def retrieve(self, query):
        # In a real app, this would query the vector_db
        print(f"Retrieving documents for: {query}")
        return ["Doc A: Python is a language.", "Doc B: AI is a field."]

    def generate_answer(self, query):
        context = self.retrieve(query)
        prompt = f"Context: {context}\n\nQuestion: {query}\n\nAnswer:"
        # In a real app, this would call the LLM API
        print(f"Generating answer with LLM.")
        return "Based on the context, Python is a programming language."

# Usage:
# rag_pipeline = SimpleRAG(my_db, my_llm)
# answer = rag_pipeline.generate_answer("What is Python?")
# print(answer)"#,
                },
            ],
        },
    ],
};

pub const GIT_AND_VERSION_CONTROL: ContentRecord = ContentRecord {
    title: "Git & Version Control Explained",
    description: "Git is the industry standard for version control. It's an indispensable tool that allows you to track changes, collaborate with others, and manage your codebase effectively. Let's break down the core concepts.",
    learning_points: &[
        LearningPoint {
            title: "Master the Core Workflow",
            description: "The daily workflow in Git revolves around a few key commands that let you save your work and synchronize it with a remote repository.",
            examples: &[
                CodeExample {
                    description: "1. Clone a repository: Get a local copy of a remote project.",
                    code: "git clone https://github.com/example/project.git",
                },
                CodeExample {
                    description: "2. Add changes: Stage files you've modified to be included in the next snapshot (commit).",
                    code: "git add . # Adds all changed files in the current directory",
                },
                CodeExample {
                    description: "3. Commit changes: Save your staged changes as a new snapshot in the project's history.",
                    code: r#"git commit -m "feat: Implement user login functionality""#,
                },
                CodeExample {
                    description: "4. Push changes: Upload your local commits to the remote repository (e.g., GitHub).",
                    code: "git push origin main",
                },
                CodeExample {
                    description: "5. Pull changes: Download and merge changes from the remote repository to your local copy.",
                    code: "git pull origin main",
                },
            ],
        },
        LearningPoint {
            title: "Branching & Merging Strategies",
            description: "Branches are a cornerstone of Git. They allow you to work on new features or bug fixes in an isolated environment without affecting the main codebase (often the `main` or `master` branch). A common strategy is 'Git Flow' or 'Feature Branching'.",
            examples: &[
                CodeExample {
                    description: "1. Create a new branch: Start a new line of development for a specific feature.",
                    code: "git checkout -b new-feature-branch",
                },
                CodeExample {
                    description: "2. Work on your feature: Make changes, add files, and commit your work on this branch.",
                    code: r#"git add .
git commit -m "feat: Add user profile page""#,
                },
                CodeExample {
                    description: "3. Switch back to the main branch: Once your feature is complete and tested.",
                    code: "git checkout main",
                },
                CodeExample {
                    description: "4. Merge your feature branch: Integrate the changes from your feature branch into the main branch.",
                    code: "git merge new-feature-branch",
                },
            ],
        },
        LearningPoint {
            title: "Practice Resolving Merge Conflicts",
            description: "A merge conflict occurs when Git is unable to automatically resolve differences in code between two commits. This happens when the same lines are changed in different branches. You must resolve these manually.",
            examples: &[
                CodeExample {
                    description: "1. Git will mark the conflict in the file. Your job is to edit the file to fix the conflicting section.",
                    code: r#"<<<<<<< HEAD
This is the content from your current branch.
=======
This is the content from the branch you are merging.
>>>>>>> feature-branch-name"#,
                },
                CodeExample {
                    description: "2. After editing the file to keep the code you want, you must stage the resolved file.",
                    code: "git add conflicted-file.js",
                },
                CodeExample {
                    description: "3. Finally, complete the merge by creating a commit.",
                    code: r#"git commit -m "fix: Resolve merge conflict in conflicted-file.js""#,
                },
            ],
        },
        LearningPoint {
            title: "Use Platforms like GitHub or GitLab",
            description: "These platforms provide hosting for your Git repositories and add powerful features for collaboration, such as Pull Requests (or Merge Requests).",
            examples: &[
                CodeExample {
                    description: "1. Fork a repository: Create your own server-side copy of a project on GitHub.",
                    code: "# This is done via the GitHub UI.",
                },
                CodeExample {
                    description: "2. Create a Pull Request (PR): After pushing your feature branch to your fork, you can open a PR. This is a formal request to merge your changes into the original project.",
                    code: "# This is also done via the GitHub UI.",
                },
                CodeExample {
                    description: "3. Code Review: Teammates can now review your code, leave comments, and suggest changes before it's merged. This process is crucial for maintaining code quality.",
                    code: "# Collaboration happens on the Pull Request page on GitHub/GitLab.",
                },
            ],
        },
    ],
};

/// Shown on the Git unit page alongside the learning points.
pub const GIT_COMMIT_TOOL: InteractiveTool = InteractiveTool {
    title: "AI Commit Message Generator",
    description: "Struggling with writing clear and conventional commit messages? Describe your changes below and let AI generate a message for you.",
};

pub const UI_FRAMEWORK_BASICS: ContentRecord = ContentRecord {
    title: "UI Framework Basics Explained (React)",
    description: "To build interactive AI applications, you need a user interface. Modern UIs are built with component-based frameworks like React. Let's explore the core concepts that allow you to create dynamic and responsive web experiences.",
    learning_points: &[
        LearningPoint {
            title: "What is a Component?",
            description: "Components are the fundamental building blocks of a React application. They are reusable, self-contained pieces of UI. Think of them like custom, super-powered HTML tags. You build a complex UI by composing simple components together.",
            examples: &[
                CodeExample {
                    description: "A simple function component that takes `name` as a property (prop) and displays a personalized greeting. This component can be reused anywhere you need a welcome message.",
                    code: r#"function Welcome(props) {
  return <h1>Hello, {props.name}</h1>;
}

// You can then use it in your app like this:
<Welcome name="AI Engineer" />"#,
                },
            ],
        },
        LearningPoint {
            title: "Managing State with the `useState` Hook",
            description: "Static components are not very interactive. 'State' is data that a component can hold and change over time. When the state changes, the component automatically re-renders to display the new data. The `useState` hook is the primary way to add state to function components.",
            examples: &[
                CodeExample {
                    description: "A classic counter component. Clicking the button calls `setCount`, which updates the `count` state variable. React detects this change and re-renders the component to show the new count.",
                    code: r#"import React, { useState } from 'react';

function Counter() {
  // Declare a new state variable, which we'll call "count"
  const [count, setCount] = useState(0);

  return (
    <div>
      <p>You clicked {count} times</p>
      <button onClick={() => setCount(count + 1)}>
        Click me
      </button>
    </div>
  );
}"#,
                },
            ],
        },
        LearningPoint {
            title: "Handling Side Effects with the `useEffect` Hook",
            description: "What if your component needs to do something that isn't directly related to rendering, like fetching data from an API, setting a timer, or manually changing the DOM? These actions are called 'side effects'. The `useEffect` hook lets you perform side effects from within your function components.",
            examples: &[
                CodeExample {
                    description: "This component uses `useEffect` to update the document's title every time the `count` state changes. The array `[count]` at the end is the 'dependency array'; it tells React to only re-run the effect if `count` has changed.",
                    code: r#"import React, { useState, useEffect } from 'react';

function DocumentTitleChanger() {
  const [count, setCount] = useState(0);

  // This effect runs after every render where 'count' has changed.
  useEffect(() => {
    document.title = `You clicked ${count} times`;
  }, [count]); // Only re-run the effect if count changes

  return (
    <div>
      <p>Check the browser tab title!</p>
      <button onClick={() => setCount(count + 1)}>
        Click me to update the title
      </button>
    </div>
  );
}"#,
                },
            ],
        },
    ],
};

pub const DS_ALGO: ContentRecord = ContentRecord {
    title: "Data Structures & Algorithms Explained",
    description: "A strong foundation in Data Structures and Algorithms is critical for writing efficient and optimized code. Below is a conceptual overview of the most important topics, with typical complexities for each.",
    learning_points: &[
        LearningPoint {
            title: "Big O Notation",
            description: "Big O notation is used to describe the performance or complexity of an algorithm. It specifically describes the worst-case scenario, and can be used to describe the execution time required or the space used (e.g., in memory or on disk) by an algorithm.",
            examples: &[
                CodeExample {
                    description: "Common complexity classes, from fastest-growing to slowest.",
                    code: "Constant:    O(1)\nLogarithmic: O(log n)\nLinear:      O(n)\nQuadratic:   O(n\u{b2})\nExponential: O(2\u{207f})",
                },
            ],
        },
        LearningPoint {
            title: "Arrays",
            description: "An array is a collection of items stored at contiguous memory locations. It's the simplest data structure where each element can be randomly accessed using its index number. Fast O(1) random access and cache friendly, but fixed size with O(n) insertion and deletion in the middle.",
            examples: &[
                CodeExample {
                    description: "Typical complexities.",
                    code: "Access: O(1)  Search: O(n)  Insertion: O(n)  Deletion: O(n)",
                },
            ],
        },
        LearningPoint {
            title: "Linked Lists",
            description: "A linked list is a linear data structure where elements are not stored at contiguous memory locations. The elements are linked using pointers. Dynamic in size with O(1) insertion and deletion at the ends, but slow O(n) random access and extra memory for pointers.",
            examples: &[
                CodeExample {
                    description: "Typical complexities.",
                    code: "Access: O(n)  Search: O(n)  Insertion: O(1)  Deletion: O(1)",
                },
            ],
        },
        LearningPoint {
            title: "Stacks",
            description: "A stack is a linear data structure that follows a particular order in which the operations are performed. The order is LIFO (Last In, First Out). Think of it as a stack of plates. Stacks manage function calls (the call stack) and are simple and fast, though limited in functionality.",
            examples: &[
                CodeExample {
                    description: "Typical complexities.",
                    code: "Access: O(n)  Search: O(n)  Insertion: O(1)  Deletion: O(1)",
                },
            ],
        },
        LearningPoint {
            title: "Queues",
            description: "A queue is a linear data structure that follows a particular order in which the operations are performed. The order is FIFO (First In, First Out). Think of it as a checkout line. Useful whenever ordered processing is required.",
            examples: &[
                CodeExample {
                    description: "Typical complexities.",
                    code: "Access: O(n)  Search: O(n)  Insertion: O(1)  Deletion: O(1)",
                },
            ],
        },
        LearningPoint {
            title: "Hash Maps (Dictionaries)",
            description: "A Hash Map (or Hash Table) is a data structure that stores key-value pairs. It uses a hash function to compute an index into an array of buckets or slots, from which the desired value can be found. Very fast average case for insertion, deletion, and search, but the worst case is O(n) and iteration order is undefined.",
            examples: &[
                CodeExample {
                    description: "Typical complexities.",
                    code: "Access: O(1) avg  Search: O(1) avg  Insertion: O(1) avg  Deletion: O(1) avg",
                },
            ],
        },
        LearningPoint {
            title: "Trees",
            description: "A tree is a hierarchical data structure that consists of nodes connected by edges. Each tree has a root node, and every node (excluding the root) is connected to exactly one parent node. Efficient for searching when balanced; performance degrades in unbalanced trees.",
            examples: &[
                CodeExample {
                    description: "Typical complexities (balanced).",
                    code: "Access: O(log n)  Search: O(log n)  Insertion: O(log n)  Deletion: O(log n)",
                },
            ],
        },
        LearningPoint {
            title: "Binary Search Trees (BST)",
            description: "A Binary Search Tree is a special type of tree where for each node, all values in its left subtree are less than its value, and all values in its right subtree are greater. This property keeps keys in sorted order and allows for efficient searching, though an unbalanced BST degrades to O(n).",
            examples: &[
                CodeExample {
                    description: "Typical complexities (balanced).",
                    code: "Access: O(log n)  Search: O(log n)  Insertion: O(log n)  Deletion: O(log n)",
                },
            ],
        },
        LearningPoint {
            title: "Heaps",
            description: "A Heap is a special tree-based data structure that satisfies the heap property: in a max heap, for any given node C, if P is a parent of C, then the key of P is greater than or equal to the key of C. It's commonly used for implementing Priority Queues. Finding the min/max is O(1), but searching for an arbitrary element is O(n).",
            examples: &[
                CodeExample {
                    description: "Typical complexities.",
                    code: "Find min/max: O(1)  Search: O(n)  Insertion: O(log n)  Deletion: O(log n)",
                },
            ],
        },
        LearningPoint {
            title: "Tries (Prefix Trees)",
            description: "A Trie, or prefix tree, is a tree-like data structure that proves to be very efficient for retrieving information in a dataset of strings. It's often used for autocomplete and spell-checker features. Very fast for prefix-based searches but can be memory intensive.",
            examples: &[
                CodeExample {
                    description: "Typical complexities (L is the key length).",
                    code: "Search: O(L)  Insertion: O(L)  Deletion: O(L)",
                },
            ],
        },
        LearningPoint {
            title: "Graphs",
            description: "A graph is a non-linear data structure consisting of nodes (or vertices) and edges that connect them. Graphs are used to model networks, such as social networks, maps, and the internet. They can model complex real-world relationships, though some graph algorithms are very slow.",
            examples: &[
                CodeExample {
                    description: "Typical complexities (V vertices, E edges).",
                    code: "Storage: O(V+E)  Add vertex: O(1)  Add edge: O(1)  Search: O(V+E)",
                },
            ],
        },
        LearningPoint {
            title: "Union-Find (Disjoint Set)",
            description: "A Union-Find (or Disjoint Set Union) data structure keeps track of a set of elements partitioned into a number of disjoint (non-overlapping) subsets. It provides two main operations: `find` (determine which subset an element is in) and `union` (join two subsets). Nearly constant-time operations make it perfect for dynamic connectivity problems like cycle detection in graphs.",
            examples: &[
                CodeExample {
                    description: "Typical complexities (\u{3b1} is the inverse Ackermann function).",
                    code: "Find: O(\u{3b1}(n))  Union: O(\u{3b1}(n))  Make set: O(1)",
                },
            ],
        },
    ],
};

pub const VECTOR_DATABASES: ContentRecord = ContentRecord {
    title: "Vector Databases Explained",
    description: "A vector database is a specialized database designed to store, manage, and search high-dimensional vectors. In the context of AI, these vectors are 'embeddings', numerical representations of text, images, or other data. They are the core infrastructure that powers semantic search, recommendation engines, and Retrieval-Augmented Generation (RAG).",
    learning_points: &[
        LearningPoint {
            title: "What is a Vector Embedding?",
            description: "An embedding is a list of numbers (a vector) that captures the semantic meaning of a piece of data. An embedding model converts your raw data (like a text chunk) into this vector format. The key idea is that similar concepts will have vectors that are numerically close to each other.",
            examples: &[
                CodeExample {
                    description: "Conceptually, an embedding model maps words or sentences to points in a high-dimensional space.",
                    code: r#"// Text with similar meanings produce similar vectors
get_embedding("The cat sat on the mat.") -> [0.1, 0.8, 0.2, ...]
get_embedding("A feline was on the rug.") -> [0.12, 0.78, 0.21, ...]

// Text with a different meaning produces a very different vector
get_embedding("The stock market is up.") -> [0.9, 0.3, 0.6, ...]"#,
                },
            ],
        },
        LearningPoint {
            title: "How Do Vector Databases Work?",
            description: "Vector databases store these embedding vectors and use specialized algorithms (Approximate Nearest Neighbor - ANN) to find the 'closest' vectors to a given query vector. This is much more powerful than traditional keyword search because it finds results based on conceptual meaning, not just word overlap.",
            examples: &[],
        },
        LearningPoint {
            title: "The RAG Query Process",
            description: "The entire process for a RAG application looks like this:",
            examples: &[
                CodeExample {
                    description: "1. The user's query is converted into a vector using the same embedding model.",
                    code: r#"const userQuery = "What are the main types of felines?";
const queryVector = await getEmbedding(userQuery);"#,
                },
                CodeExample {
                    description: "2. The vector database searches its index to find the stored vectors that are most similar to the `queryVector`.",
                    code: r#"// The database efficiently compares the queryVector against millions of
// stored vectors to find the top K closest matches.
const similarVectors = await vectorDB.search(queryVector, { topK: 5 });"#,
                },
                CodeExample {
                    description: "3. The original text chunks associated with those similar vectors are retrieved. This text is the context that will be provided to the LLM.",
                    code: r#"// Retrieved context might include:
// ["The domestic cat is a small carnivorous mammal...", "Lions are large felines native to Africa..."]
const context = getOriginalTextFor(similarVectors);"#,
                },
            ],
        },
    ],
};

pub const GRAPH_DATABASES: ContentRecord = ContentRecord {
    title: "Graph Databases for RAG Explained",
    description: "While vector databases find semantically similar text, graph databases excel at retrieving information based on explicit relationships between entities. They add a powerful, structured dimension to your retrieval system, allowing you to answer questions that vector search alone cannot.",
    learning_points: &[
        LearningPoint {
            title: "What is a Graph Database?",
            description: "A graph database stores data as nodes (entities) and edges (relationships). Instead of searching for text, you traverse the graph, following connections between data points. This is ideal for highly connected data like social networks, supply chains, or knowledge graphs.",
            examples: &[
                CodeExample {
                    description: "A simple graph might have nodes like 'Person' and 'Project' with an edge like 'WORKED_ON'.",
                    code: r#"// Conceptual representation of a graph
(Person {name: 'Alice'})-[:WORKED_ON]->(Project {name: 'Gemini RAG'})
(Person {name: 'Bob'})-[:WORKED_ON]->(Project {name: 'Gemini RAG'})
(Person {name: 'Alice'})-[:KNOWS]->(Person {name: 'Bob'})"#,
                },
            ],
        },
        LearningPoint {
            title: "Graph RAG vs. Vector RAG",
            description: "Use Vector RAG for 'fuzzy' semantic questions ('Tell me about AI safety'). Use Graph RAG for precise, multi-hop questions that rely on relationships ('Which colleagues of Alice also worked on the Gemini RAG project?'). To answer this, you first find 'Alice', traverse the 'WORKED_ON' edge to the project, then traverse backwards along all 'WORKED_ON' edges to find other people, like 'Bob'.",
            examples: &[],
        },
        LearningPoint {
            title: "Combining Graph and Vector Search",
            description: "The most powerful systems often combine both. For instance, you could use vector search to identify the main entities in a user's query (e.g., find the 'Gemini RAG' node) and then use the graph database to explore the relationships around that entity to find a precise answer.",
            examples: &[
                CodeExample {
                    description: "A conceptual query in Cypher (a common graph query language).",
                    code: r#"// User asks: "Who worked with Alice?"
// 1. Find Alice
MATCH (p:Person {name: 'Alice'})
// 2. Find people she knows
MATCH (p)-[:KNOWS]-(colleague:Person)
// 3. Return their names
RETURN colleague.name"#,
                },
            ],
        },
    ],
};

pub const HYBRID_RETRIEVAL: ContentRecord = ContentRecord {
    title: "Hybrid Retrieval Explained",
    description: "Hybrid retrieval (or hybrid search) combines the strengths of traditional keyword-based search (like BM25 or full-text search) and modern vector search to produce more accurate and relevant results. It provides a safety net, ensuring you get the best of both worlds.",
    learning_points: &[
        LearningPoint {
            title: "The Weakness of a Single Approach",
            description: "Vector search is excellent for understanding intent and concepts, but it can sometimes miss specific, out-of-vocabulary keywords (like product IDs, acronyms, or specific names). Keyword search is perfect for finding exact matches but fails to understand synonyms or conceptual relationships.",
            examples: &[
                CodeExample {
                    description: "Query: 'Information on the 'Gemini-Flash-1.5' model'",
                    code: r#"// Vector Search might return documents about "AI models" or "Gemini Pro", missing the exact model name if it's rare in the training data.
// Keyword Search will find the exact string "Gemini-Flash-1.5" perfectly but will miss a document that says "the latest fast model from Google's Gemini family"."#,
                },
            ],
        },
        LearningPoint {
            title: "How Hybrid Retrieval Works",
            description: "It's simple: you run two queries in parallel, one against a keyword index and one against a vector index. Then, you take both sets of results and merge them using a scoring algorithm to produce a single, reranked list of the most relevant documents.",
            examples: &[],
        },
        LearningPoint {
            title: "The Merging & Reranking Step",
            description: "Combining the results is a crucial step. A common technique is Reciprocal Rank Fusion (RRF), which looks at the rank (position) of each document in both result sets and calculates a combined score. This way, documents that rank highly in either search method are boosted to the top of the final list.",
            examples: &[
                CodeExample {
                    description: "Conceptual representation of the process.",
                    code: r#"const query = "Information on the 'Gemini-Flash-1.5' model";

// 1. Execute both searches simultaneously
const keywordResults = keyword_search(query); // -> [doc_C, doc_A]
const vectorResults = vector_search(query);   // -> [doc_B, doc_A]

// 2. Fuse the results
// RRF algorithm combines the two lists based on rank.
// doc_A appears in both, so it gets a higher score.
// doc_B and doc_C are also included.
const finalResults = reciprocal_rank_fusion(keywordResults, vectorResults);

// 3. Return the combined, superior list of results
// -> [doc_A, doc_C, doc_B] (example order)"#,
                },
            ],
        },
    ],
};

pub const RERANKING_PIPELINES: ContentRecord = ContentRecord {
    title: "Reranking Pipelines Explained",
    description: "The initial retrieval step in a RAG system is designed for speed and breadth. It quickly fetches a set of potentially relevant documents (e.g., the top 50). A reranking step then uses a more computationally expensive but accurate model to re-order just this small set of candidates, pushing the absolute best matches to the top.",
    learning_points: &[
        LearningPoint {
            title: "The Two-Stage Search Process",
            description: "This retrieve-then-rerank architecture is very common in modern search systems. Stage 1 (Retrieval) casts a wide net to ensure the relevant document is likely captured. Stage 2 (Reranking) provides the precision, carefully analyzing the candidates to find the best fit.",
            examples: &[],
        },
        LearningPoint {
            title: "How Rerankers Work: Cross-Encoders",
            description: "Most rerankers use a type of model called a 'cross-encoder'. Unlike standard embedding models (bi-encoders) that process the query and document separately, a cross-encoder looks at the query and a document *at the same time*. This allows it to pay much closer attention to the nuanced relationship between them, resulting in a more accurate relevance score.",
            examples: &[
                CodeExample {
                    description: "A bi-encoder creates embeddings independently. A cross-encoder reads both texts together for a direct comparison.",
                    code: r#"// Bi-Encoder (Fast, for initial retrieval)
query_vector = model.encode(query)
doc_vector = model.encode(document)
score = cosine_similarity(query_vector, doc_vector)

// Cross-Encoder (Slower, for reranking)
// The model processes both texts in a single input.
score = cross_encoder_model.predict(query, document) // -> Outputs a single relevance score"#,
                },
            ],
        },
        LearningPoint {
            title: "Building the Pipeline",
            description: "By combining these pieces, you create a powerful and efficient system. The fast bi-encoder filters millions of documents down to a few dozen, and the slow but accurate cross-encoder precisely orders those few, ensuring the context provided to the LLM is of the highest possible quality.",
            examples: &[
                CodeExample {
                    description: "Conceptual code for a full RAG pipeline with reranking.",
                    code: r#"const query = "What are the benefits of reranking?";

// 1. Retrieve initial candidates (e.g., top 50) from the vector DB.
const candidates = vector_db.search(query, top_k=50);

// 2. Use a cross-encoder to rerank the candidates.
const reranked_candidates = reranker.rerank(query, candidates);

// 3. Select the top N reranked results to use as context.
const top_context = reranked_candidates.slice(0, 5);

// 4. Generate the final answer with the high-quality context.
const final_answer = generate_with_llm(query, top_context);"#,
                },
            ],
        },
    ],
};

pub const INDEXING_STRATEGIES: ContentRecord = ContentRecord {
    title: "Indexing Strategies (HNSW, IVF) Explained",
    description: "Searching through millions or billions of vectors one-by-one (brute-force) is computationally impossible for real-time applications. Vector databases use clever indexing strategies based on Approximate Nearest Neighbor (ANN) algorithms to find 'good enough' matches incredibly fast.",
    learning_points: &[
        LearningPoint {
            title: "The Trade-off: Speed vs. Accuracy",
            description: "ANN algorithms trade perfect accuracy for immense speed. They might not find the absolute closest vector every single time, but they will find an extremely close neighbor in a fraction of the time. For RAG, this is a perfect trade-off, as a 'very relevant' document is just as good as the 'most relevant' one.",
            examples: &[],
        },
        LearningPoint {
            title: "IVF (Inverted File Index)",
            description: "IVF works by first clustering all the vectors in your database into partitions. When a query comes in, the algorithm first determines which cluster(s) the query vector is closest to. Then, it performs an exhaustive search *only* within those few selected clusters, ignoring the rest of the database. This dramatically reduces the search space.",
            examples: &[
                CodeExample {
                    description: "Think of it like searching for a book in a library. Instead of checking every book (brute-force), you first go to the correct section (the cluster), then search just the shelves in that section.",
                    code: r#"// Conceptual flow for IVF
// 1. Pre-computation: Group all vectors into 1000 clusters.
// 2. Query Time:
const queryVector = getEmbedding("my query");
// 3. Find the 5 clusters closest to the query vector.
const closestClusters = find_closest_clusters(queryVector, allClusters);
// 4. Search ONLY the vectors within those 5 clusters.
const results = brute_force_search(queryVector, closestClusters);"#,
                },
            ],
        },
        LearningPoint {
            title: "HNSW (Hierarchical Navigable Small World)",
            description: "HNSW builds a multi-layered graph structure over your data vectors. The top layers have very few connections, acting like an express highway system, while the bottom layers have many connections, like local streets. A search starts at a random point in the top layer, quickly navigates across the 'highways' to get to the right neighborhood, and then moves down to the 'local streets' to find the precise nearest neighbors.",
            examples: &[
                CodeExample {
                    description: "This hierarchical approach is extremely fast and memory-efficient, making HNSW one of the most popular and highest-performing ANN algorithms in use today.",
                    code: r#"// Conceptual flow for HNSW
// 1. Pre-computation: Build a multi-layer graph connecting all vectors.
// 2. Query Time:
const queryVector = getEmbedding("my query");
// 3. Enter the graph at the top layer (the 'highway').
let currentNode = get_entry_point(graph.layer_top);
// 4. Navigate through layers, getting progressively closer.
for (layer in graph.descending_layers) {
  currentNode = search_layer(queryVector, currentNode, layer);
}
// 5. The final currentNode is the nearest neighbor.
const results = currentNode;"#,
                },
            ],
        },
    ],
};

pub const CHUNKING_AND_EMBEDDING: ContentRecord = ContentRecord {
    title: "Chunking and Embedding Explained",
    description: "Before you can perform semantic search, your documents must be processed. This involves two critical steps: breaking large documents into smaller, meaningful 'chunks' (Chunking) and converting those chunks into numerical representations called 'embeddings' (Embedding).",
    learning_points: &[
        LearningPoint {
            title: "Why is Chunking Necessary?",
            description: "LLMs have a limited context window, meaning they can only process a certain amount of text at once. Furthermore, feeding an entire large document to an LLM to answer a small question is inefficient and can dilute the relevant information. Chunking solves this by creating focused, bite-sized pieces of content that can be precisely retrieved.",
            examples: &[
                CodeExample {
                    description: "A common strategy is Recursive Character Splitting, which tries to split text on logical separators (like paragraphs, then sentences) to keep related content together.",
                    code: r#"// Conceptual example of chunking a document
const document = "AI is transforming the world. It has many applications in healthcare and finance. The future of AI is bright.";

// Chunks might look like this:
const chunks = [
  "AI is transforming the world.",
  "It has many applications in healthcare and finance.",
  "The future of AI is bright."
];"#,
                },
            ],
        },
        LearningPoint {
            title: "What is an Embedding?",
            description: "An embedding is a vector (a list of numbers) that captures the semantic meaning of a piece of text. Text with similar meanings will have vectors that are close to each other in high-dimensional space. This is what enables 'semantic search', searching for concepts, not just keywords.",
            examples: &[],
        },
        LearningPoint {
            title: "The Embedding Process",
            description: "You use a specialized embedding model to convert your text chunks into vectors. This is typically done by calling an API. The resulting vectors are then stored in a vector database for later retrieval.",
            examples: &[
                CodeExample {
                    description: "A conceptual example of calling an embedding model provider for this step.",
                    code: r#"// This is a conceptual example.
async function getEmbedding(text, embeddingModel) {
  // In a real scenario, you'd call a service like:
  // const response = await embeddingModel.embedContent(text);
  // return response.embedding;

  // For demonstration, we'll simulate a vector output.
  // The actual vector would have hundreds of dimensions.
  if (text.includes("AI")) {
    return [0.8, 0.1, 0.9, ...];
  } else {
    return [0.2, 0.7, 0.3, ...];
  }
}

const textChunk = "AI is transforming the world.";
const vector = await getEmbedding(textChunk, myEmbeddingModel);
// vector is now [0.8, 0.1, 0.9, ...] which can be stored in a vector DB."#,
                },
            ],
        },
    ],
};
