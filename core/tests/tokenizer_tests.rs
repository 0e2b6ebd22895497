use concord_core::lines::index_lines;
use concord_core::tokenizer::tokenize;

#[test]
fn it_joins_words_broken_at_line_end() {
    assert_eq!(tokenize("co-\noperate widgets"), vec!["cooperate", "widgets"]);
}

#[test]
fn it_keeps_line_breaks_as_separators() {
    assert_eq!(tokenize("well \ndone"), vec!["well", "done"]);
    assert_eq!(tokenize("well\ndone"), vec!["well", "done"]);
}

#[test]
fn it_does_not_join_a_spaced_dash() {
    assert_eq!(tokenize("over -\nthere"), vec!["over", "there"]);
}

#[test]
fn it_lowercases_and_keeps_duplicates() {
    assert_eq!(tokenize("The THE the"), vec!["the", "the", "the"]);
}

#[test]
fn it_skips_non_words() {
    assert_eq!(tokenize("1984 -- $5.00 #tag e-mail -x y-"), vec!["tag", "e-mail", "x", "y"]);
    assert!(tokenize("").is_empty());
    assert!(tokenize("123 456\n---\n").is_empty());
}

#[test]
fn line_index_agrees_with_tokenizer() {
    let text = "It was a well-\nknown fact that\nco-\n  operation, not com -\npetition, won.\nThe end-";
    let lines = index_lines(text);
    assert_eq!(
        lines,
        vec![
            vec!["it", "was", "a", "wellknown"],
            vec!["fact", "that"],
            vec!["cooperation"],
            vec!["not", "com"],
            vec!["petition", "won"],
            vec!["the", "end"],
        ]
    );
    assert_eq!(lines.concat(), tokenize(text));
}
