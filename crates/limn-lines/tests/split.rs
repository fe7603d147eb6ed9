use limn_lines::{
    BlockReader, KeywordPrefix, PointerLine, SkinParamBlock, split_generics, split_quoted,
};
use proptest::prelude::*;

#[test]
fn class_declaration_line_end_to_end() {
    let line = r#"abstract class "Test la" as a {"#;
    let mut splitter = KeywordPrefix::new(["class", "abstract", "interface"]);
    split_quoted(line, |word| splitter.parse(word));

    assert_eq!(splitter.matched_keywords(), ["abstract", "class"]);
    assert_eq!(splitter.left_over_text(), "Test la as a {");
}

#[test]
fn relationship_line_end_to_end() {
    let mut pointer = PointerLine::new();
    split_quoted(r#""a b" -> "b aaa  fff'" : la"#, |word| pointer.parse(word));

    assert_eq!(pointer.left_side(), Some("a b"));
    assert_eq!(pointer.connector(), Some("->"));
    assert_eq!(pointer.right_side(), Some("b aaa  fff'"));
    assert_eq!(pointer.text(), "la");
}

#[test]
fn skinparam_block_consumes_until_no_open_brace() {
    let source = "skinparam component {\n    FontSize 13\n    BackgroundColor #eee\n}\n";
    let mut block = SkinParamBlock::new();
    let mut lines = source.lines();

    // The block itself only flags the opening brace; the driver keeps feeding
    // until the closing line, as the diagram parser does.
    assert!(block.read_line(lines.next().unwrap()));
    for line in lines {
        block.read_line(line);
        if line.trim() == "}" {
            break;
        }
    }
    assert_eq!(block.lines().len(), 4);
    assert_eq!(block.lines()[3], vec!["}".to_string()]);
}

#[test]
fn generics_splitting_feeds_keyword_prefix() {
    let mut splitter = KeywordPrefix::new(["class"]);
    split_generics("class List<string, int>", |word| splitter.parse(word));
    assert_eq!(splitter.matched_keywords(), ["class"]);
    assert_eq!(splitter.left_over_text(), "Liststring, int>");
}

proptest! {
    #[test]
    fn words_never_contain_the_quote_character(line in "[ a-z\"]{0,40}") {
        let mut words = Vec::new();
        split_quoted(&line, |word| words.push(word.to_string()));
        prop_assert!(words.iter().all(|w| !w.contains('"')));
    }

    #[test]
    fn words_are_never_empty(line in "[ a-z<>\"]{0,40}") {
        let mut words = Vec::new();
        split_quoted(&line, |word| words.push(word.to_string()));
        split_generics(&line, |word| words.push(word.to_string()));
        prop_assert!(words.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn unquoted_input_matches_whitespace_split(line in "[ a-z]{0,40}") {
        let mut words = Vec::new();
        split_quoted(&line, |word| words.push(word.to_string()));
        let expected: Vec<&str> = line.split_whitespace().collect();
        prop_assert_eq!(words, expected);
    }

    #[test]
    fn pointer_parse_never_panics(words in proptest::collection::vec("[a-z:<>.-]{1,8}", 0..10)) {
        let mut pointer = PointerLine::new();
        for word in &words {
            pointer.parse(word);
        }
        let _ = pointer.text();
    }
}
