use regex::RegexBuilder;

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Words,
    Phrase,
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub mode: FilterMode,
    pub case_sensitive: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            mode: FilterMode::Words,
            case_sensitive: false,
        }
    }
}

impl FilterOptions {
    /// Regex wins over exact-phrase when both toggles are set.
    pub fn from_settings(settings: &Settings) -> Self {
        let mode = if settings.regex_mode {
            FilterMode::Regex
        } else if settings.exact_match {
            FilterMode::Phrase
        } else {
            FilterMode::Words
        };

        Self {
            mode,
            case_sensitive: settings.case_sensitive,
        }
    }
}

/// Ordered subsequence of `snippets` matching `query`. An empty query
/// matches everything; an invalid regex pattern filters nothing.
pub fn filter(snippets: &[String], query: &str, options: &FilterOptions) -> Vec<String> {
    if query.is_empty() {
        return snippets.to_vec();
    }

    match options.mode {
        FilterMode::Regex => filter_regex(snippets, query, options.case_sensitive),
        FilterMode::Phrase => filter_phrase(snippets, query, options.case_sensitive),
        FilterMode::Words => filter_words(snippets, query, options.case_sensitive),
    }
}

fn filter_regex(snippets: &[String], query: &str, case_sensitive: bool) -> Vec<String> {
    let pattern = match RegexBuilder::new(query)
        .case_insensitive(!case_sensitive)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return snippets.to_vec(),
    };

    snippets
        .iter()
        .filter(|snippet| pattern.is_match(snippet))
        .cloned()
        .collect()
}

fn filter_phrase(snippets: &[String], query: &str, case_sensitive: bool) -> Vec<String> {
    let needle = fold_case(query, case_sensitive);
    snippets
        .iter()
        .filter(|snippet| fold_case(snippet, case_sensitive).contains(&needle))
        .cloned()
        .collect()
}

fn filter_words(snippets: &[String], query: &str, case_sensitive: bool) -> Vec<String> {
    let words: Vec<String> = query
        .split_whitespace()
        .map(|word| fold_case(word, case_sensitive))
        .collect();

    snippets
        .iter()
        .filter(|snippet| {
            let haystack = fold_case(snippet, case_sensitive);
            words.iter().all(|word| haystack.contains(word.as_str()))
        })
        .cloned()
        .collect()
}

fn fold_case(input: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        input.to_string()
    } else {
        input.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::{filter, FilterMode, FilterOptions};

    fn snippets(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn word_mode_requires_every_word() {
        let list = snippets(&["git push origin main", "git pull", "cargo build"]);
        let options = FilterOptions::default();

        let result = filter(&list, "git main", &options);

        assert_eq!(result, snippets(&["git push origin main"]));
    }

    #[test]
    fn whitespace_only_query_matches_everything_in_word_mode() {
        let list = snippets(&["one", "two"]);
        let result = filter(&list, "   ", &FilterOptions::default());
        assert_eq!(result, list);
    }

    #[test]
    fn phrase_mode_requires_contiguous_match() {
        let list = snippets(&["red car", "car red"]);
        let options = FilterOptions {
            mode: FilterMode::Phrase,
            case_sensitive: false,
        };

        let result = filter(&list, "red car", &options);

        assert_eq!(result, snippets(&["red car"]));
    }

    #[test]
    fn regex_mode_anchors_work() {
        let list = snippets(&["red", "blue", "red car"]);
        let options = FilterOptions {
            mode: FilterMode::Regex,
            case_sensitive: false,
        };

        let result = filter(&list, "^re", &options);

        assert_eq!(result, snippets(&["red", "red car"]));
    }

    #[test]
    fn invalid_regex_filters_nothing() {
        let list = snippets(&["red", "blue"]);
        let options = FilterOptions {
            mode: FilterMode::Regex,
            case_sensitive: false,
        };

        let result = filter(&list, "[unclosed", &options);

        assert_eq!(result, list);
    }
}
