//! Step 1 - Coding Fundamentals
//!
//! The four dedicated units for this step (Python, React, DS & Algos, Git)
//! carry the full detail pages; the records here are the sidebar summaries.

use crate::curriculum::model::{ContentRecord, LearningPoint};

pub static DETAILS: &[(&str, ContentRecord)] = &[
    (
        "Python",
        ContentRecord {
            title: "Python for AI/ML",
            description: "Python is the lingua franca of AI. Its simple syntax and powerful libraries make it ideal for everything from data manipulation to model building. This section breaks down the core concepts and libraries you'll use daily.",
            learning_points: &[
                LearningPoint {
                    title: "Core concepts",
                    description: "Master core concepts: variables, data types, loops, conditionals, and functions.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Essential libraries",
                    description: "Learn essential libraries: NumPy for numerical operations, Pandas for data manipulation, and Matplotlib/Seaborn for visualization.",
                    examples: &[],
                },
                LearningPoint {
                    title: "AI/ML frameworks",
                    description: "Explore key AI/ML frameworks: Get a foundational understanding of what Scikit-learn, TensorFlow, and PyTorch are used for.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Object-oriented programming",
                    description: "Practice Object-Oriented Programming (OOP) to write modular and reusable code.",
                    examples: &[],
                },
            ],
        },
    ),
    (
        "Bash",
        ContentRecord {
            title: "Bash Scripting",
            description: "The Bash shell is a powerful tool for automating tasks, managing environments, and orchestrating data pipelines. Proficiency in Bash is essential for any engineer working in a Linux-based environment, which is common for AI development and deployment.",
            learning_points: &[
                LearningPoint {
                    title: "Basic commands",
                    description: "Learn basic commands: `ls`, `cd`, `grep`, `awk`, `sed` for file navigation and text manipulation.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Permissions and processes",
                    description: "Understand permissions and process management.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Automation scripts",
                    description: "Write simple scripts to automate repetitive tasks.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Environments",
                    description: "Manage environment variables and software installations.",
                    examples: &[],
                },
            ],
        },
    ),
    (
        "UI Framework Basics (React)",
        ContentRecord {
            title: "UI Framework Basics (React)",
            description: "To build modern, interactive web frontends for your AI models, understanding a component-based framework like React is essential. This knowledge bridges the gap between your backend AI logic and the end-user.",
            learning_points: &[
                LearningPoint {
                    title: "Components",
                    description: "Learn what components are and how they form a UI.",
                    examples: &[],
                },
                LearningPoint {
                    title: "State",
                    description: "Understand how to manage component state with hooks like `useState`.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Side effects",
                    description: "Handle side effects like API calls with `useEffect`.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Composition",
                    description: "Build a simple, interactive application by composing components.",
                    examples: &[],
                },
            ],
        },
    ),
    (
        "Basic DS & Algos",
        ContentRecord {
            title: "Data Structures & Algorithms",
            description: "A strong foundation in Data Structures and Algorithms is critical for writing efficient and optimized code. This knowledge is key to handling large datasets and designing complex AI systems. This section provides a visual and conceptual overview of the most important DS&A topics.",
            learning_points: &[
                LearningPoint {
                    title: "Complexity analysis",
                    description: "Analyze time and space complexity with Big O notation.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Fundamental structures",
                    description: "Learn fundamental data structures: Arrays, Linked Lists, Stacks, Queues, Trees, Hash Maps, and Graphs.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Trade-offs",
                    description: "Understand their trade-offs, performance characteristics, and common use cases.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Key algorithms",
                    description: "Explore key algorithms for sorting, searching, and graph traversal.",
                    examples: &[],
                },
            ],
        },
    ),
    (
        "Git & version control",
        ContentRecord {
            title: "Git & Version Control",
            description: "Git is the industry standard for version control. It allows you to track changes, collaborate with others, and manage your codebase effectively. It is an indispensable tool for any software development project.",
            learning_points: &[
                LearningPoint {
                    title: "Core workflow",
                    description: "Master the core workflow: `clone`, `add`, `commit`, `push`, and `pull`.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Branching and merging",
                    description: "Learn branching and merging strategies (e.g., Git Flow) for parallel development.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Merge conflicts",
                    description: "Practice resolving merge conflicts.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Hosting platforms",
                    description: "Use platforms like GitHub or GitLab to host repositories and collaborate with teams.",
                    examples: &[],
                },
            ],
        },
    ),
    (
        "Testing frameworks (PyTest)",
        ContentRecord {
            title: "Testing Frameworks (PyTest)",
            description: "Writing tests ensures your code is reliable, maintainable, and correct. PyTest is a popular Python testing framework that makes it easy to write small, readable tests, and can scale to support complex functional testing.",
            learning_points: &[
                LearningPoint {
                    title: "Test levels",
                    description: "Understand the importance of unit, integration, and end-to-end testing.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Assertions",
                    description: "Write simple test cases using `assert` statements.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Fixtures",
                    description: "Learn to use fixtures to manage test state and setup/teardown.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Plugins",
                    description: "Explore plugins to extend PyTest's functionality.",
                    examples: &[],
                },
            ],
        },
    ),
    (
        "Streamlit / Gradio",
        ContentRecord {
            title: "Prototyping UIs with Streamlit & Gradio",
            description: "For AI/ML engineers, quickly creating interactive demos is crucial. Streamlit and Gradio are Python libraries that let you build and share web apps for your models in minutes, without needing deep frontend experience.",
            learning_points: &[
                LearningPoint {
                    title: "Widgets",
                    description: "Learn to create interactive widgets like sliders, buttons, and text inputs.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Model outputs",
                    description: "Display model outputs, including text, data frames, and images.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Deployment",
                    description: "Deploy apps easily to showcase your work to stakeholders or users.",
                    examples: &[],
                },
                LearningPoint {
                    title: "Trade-offs",
                    description: "Understand the trade-offs between these rapid prototyping tools and full-stack frameworks.",
                    examples: &[],
                },
            ],
        },
    ),
];
