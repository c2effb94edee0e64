// file: src/extractor/patterns.rs
// description: compiled regex patterns for identifier validation
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // GitHub "owner/name" repository identifiers
    pub static ref GITHUB_REPOSITORY: Regex = Regex::new(
        r"^(?P<owner>[A-Za-z0-9](?:[A-Za-z0-9-]{0,38}))/(?P<name>[A-Za-z0-9._-]{1,100})$"
    ).expect("GITHUB_REPOSITORY regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_repository_pattern() {
        assert!(GITHUB_REPOSITORY.is_match("octocat/Hello-World"));
        assert!(GITHUB_REPOSITORY.is_match("rust-lang/rust.vim"));
        assert!(!GITHUB_REPOSITORY.is_match("octocat"));
        assert!(!GITHUB_REPOSITORY.is_match("octocat/hello/world"));
        assert!(!GITHUB_REPOSITORY.is_match("/hello"));
        assert!(!GITHUB_REPOSITORY.is_match("-octo/hello"));
    }

    #[test]
    fn test_github_repository_captures() {
        let caps = GITHUB_REPOSITORY.captures("octo/demo").unwrap();
        assert_eq!(&caps["owner"], "octo");
        assert_eq!(&caps["name"], "demo");
    }
}
