//! Compiled-in reference catalog

use once_cell::sync::Lazy;

use super::{Catalog, CommunityEntry, Difficulty, LanguageEntry, ToolEntry, TutorialEntry};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(languages(), tutorials(), tools(), communities())
});

impl Catalog {
    /// The catalog shipped with the hub
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }
}

fn language(
    name: &str,
    description: &str,
    category: &str,
    popularity: &str,
    syntax_sample: &str,
) -> LanguageEntry {
    LanguageEntry {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        popularity: popularity.to_string(),
        syntax_sample: syntax_sample.to_string(),
    }
}

fn tutorial(
    title: &str,
    description: &str,
    difficulty: Difficulty,
    duration: &str,
    category: &str,
    link: &str,
) -> TutorialEntry {
    TutorialEntry {
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
        duration: duration.to_string(),
        category: category.to_string(),
        link: link.to_string(),
    }
}

fn tool(name: &str, description: &str, category: &str, link: &str) -> ToolEntry {
    ToolEntry {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        link: link.to_string(),
    }
}

fn community(name: &str, description: &str, member_count: &str, link: &str) -> CommunityEntry {
    CommunityEntry {
        name: name.to_string(),
        description: description.to_string(),
        member_count: member_count.to_string(),
        link: link.to_string(),
    }
}

fn languages() -> Vec<LanguageEntry> {
    vec![
        language(
            "JavaScript",
            "The language of the web. Used for frontend, backend, and mobile development.",
            "Web Development",
            "Very High",
            "function greet(name) {\n  return `Hello, ${name}!`;\n}",
        ),
        language(
            "Python",
            "Versatile language perfect for beginners, data science, and automation.",
            "General Purpose",
            "Very High",
            "def greet(name):\n    return f'Hello, {name}!'",
        ),
        language(
            "TypeScript",
            "JavaScript with static type definitions for better development experience.",
            "Web Development",
            "High",
            "function greet(name: string): string {\n  return `Hello, ${name}!`;\n}",
        ),
        language(
            "Rust",
            "Systems programming language focused on safety, speed, and concurrency.",
            "Systems Programming",
            "Growing",
            "fn greet(name: &str) -> String {\n    format!(\"Hello, {}!\", name)\n}",
        ),
        language(
            "Go",
            "Simple, reliable, and efficient language designed by Google.",
            "Backend Development",
            "High",
            "func greet(name string) string {\n    return fmt.Sprintf(\"Hello, %s!\", name)\n}",
        ),
        language(
            "Java",
            "Enterprise-grade language known for its portability and robustness.",
            "Enterprise Development",
            "Very High",
            "public String greet(String name) {\n    return \"Hello, \" + name + \"!\";\n}",
        ),
    ]
}

fn tutorials() -> Vec<TutorialEntry> {
    vec![
        tutorial(
            "JavaScript Fundamentals",
            "Learn the basics of JavaScript including variables, functions, and control structures.",
            Difficulty::Beginner,
            "2 hours",
            "Web Development",
            "/tutorials/javascript-fundamentals.html",
        ),
        tutorial(
            "React Hooks Deep Dive",
            "Master React hooks including useState, useEffect, and custom hooks.",
            Difficulty::Intermediate,
            "3 hours",
            "React",
            "/tutorials/react-hooks-deep-dive.html",
        ),
        tutorial(
            "Python Data Science",
            "Introduction to data analysis and visualization with Python.",
            Difficulty::Beginner,
            "4 hours",
            "Data Science",
            "/tutorials/python-data-science.html",
        ),
        tutorial(
            "Advanced TypeScript Patterns",
            "Learn advanced TypeScript features like conditional types and mapped types.",
            Difficulty::Advanced,
            "5 hours",
            "TypeScript",
            "/tutorials/advanced-typescript-patterns.html",
        ),
        tutorial(
            "Node.js API Development",
            "Build RESTful APIs with Node.js and Express.",
            Difficulty::Intermediate,
            "6 hours",
            "Backend",
            "/tutorials/nodejs-api-development.html",
        ),
        tutorial(
            "CSS Grid and Flexbox",
            "Master modern CSS layout techniques.",
            Difficulty::Beginner,
            "2.5 hours",
            "CSS",
            "/tutorials/css-grid-flexbox.html",
        ),
    ]
}

fn tools() -> Vec<ToolEntry> {
    vec![
        tool(
            "Visual Studio Code",
            "Free, powerful code editor with extensive extensions and built-in Git support.",
            "Editors",
            "https://code.visualstudio.com",
        ),
        tool(
            "GitHub",
            "Version control and collaboration platform for software development.",
            "Version Control",
            "https://github.com",
        ),
        tool(
            "Figma",
            "Collaborative interface design tool for creating user interfaces and prototypes.",
            "Design",
            "https://figma.com",
        ),
        tool(
            "Postman",
            "API development environment for testing and debugging APIs.",
            "API Testing",
            "https://postman.com",
        ),
        tool(
            "Docker",
            "Platform for developing, shipping, and running applications in containers.",
            "DevOps",
            "https://docker.com",
        ),
        tool(
            "npm",
            "Package manager for JavaScript and the world's largest software registry.",
            "Package Managers",
            "https://npmjs.com",
        ),
    ]
}

fn communities() -> Vec<CommunityEntry> {
    vec![
        community(
            "Stack Overflow",
            "The largest online community for programmers to learn and share knowledge.",
            "50M+",
            "https://stackoverflow.com",
        ),
        community(
            "GitHub Community",
            "Connect with developers worldwide and contribute to open source projects.",
            "100M+",
            "https://github.com/community",
        ),
        community(
            "Dev.to",
            "Community of software developers getting together to help one another out.",
            "1M+",
            "https://dev.to",
        ),
        community(
            "Reddit Programming",
            "Active subreddit for programming discussions and career advice.",
            "4M+",
            "https://reddit.com/r/programming",
        ),
        community(
            "Discord Programming",
            "Real-time chat communities for programmers and developers.",
            "500K+",
            "https://discord.gg/programming",
        ),
        community(
            "freeCodeCamp",
            "Learn to code with free online courses and join a supportive community.",
            "400K+",
            "https://freecodecamp.org",
        ),
    ]
}
