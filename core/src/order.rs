use crate::grammar::Grammar;

/// Comparison key for words: hyphens become the grammar's sentinel, so `-`
/// sorts ahead of every letter, and keys compare char by char.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderingKey(Vec<char>);

impl OrderingKey {
    pub fn with(grammar: &Grammar, word: &str) -> Self {
        let sentinel = grammar.sentinel();
        OrderingKey(
            word.chars()
                .map(|c| if c == '-' { sentinel } else { c.to_ascii_lowercase() })
                .collect(),
        )
    }

    pub fn new(word: &str) -> Self {
        Self::with(Grammar::shared(), word)
    }
}

/// Sort in place by [`OrderingKey`], computing each key once.
pub fn sort_words<T, F>(items: &mut [T], word_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| OrderingKey::new(word_of(item)));
}
