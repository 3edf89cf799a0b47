use serde::{Deserialize, Serialize};

/// Languages a student may submit exercise code in.
/// Serialized/deserialized in `lowercase` for config and wire JSON.
/// Common aliases are accepted (e.g., "cc", "c++", "js", "c#").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Serialized as "rust".
    Rust,
    /// Serialized as "go".
    #[serde(alias = "golang")]
    Go,
    C,                                  // "c"
    #[serde(alias = "cc", alias = "c++")]
    Cpp,                                // "cpp"
    Java,                               // "java"
    Haskell,                            // "haskell"
    Python,                             // "python"
    #[serde(alias = "c#")]
    CSharp,                             // "csharp"
    #[serde(alias = "js")]
    JavaScript,                         // "javascript"
}

impl Language {
    /// Human-readable name used in student-facing feedback text.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Rust       => "Rust",
            Language::Go         => "Go",
            Language::C          => "C",
            Language::Cpp        => "C++",
            Language::Java       => "Java",
            Language::Haskell    => "Haskell",
            Language::Python     => "Python",
            Language::CSharp     => "C#",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Official reference linked when a student seems unfamiliar with the language.
    pub fn documentation_url(self) -> &'static str {
        match self {
            Language::Rust       => "https://doc.rust-lang.org/book/",
            Language::Go         => "https://go.dev/tour/",
            Language::C          => "https://en.cppreference.com/w/c",
            Language::Cpp        => "https://en.cppreference.com/w/cpp",
            Language::Java       => "https://docs.oracle.com/javase/tutorial/",
            Language::Haskell    => "https://www.haskell.org/documentation/",
            Language::Python     => "https://docs.python.org/3/tutorial/",
            Language::CSharp     => "https://learn.microsoft.com/dotnet/csharp/",
            Language::JavaScript => "https://developer.mozilla.org/docs/Web/JavaScript/Guide",
        }
    }
}
