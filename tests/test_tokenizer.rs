use stackwick::parser::tokenizer::{Token, Tokenizer, is_valid_name, tokenize};

#[test]
fn test_single_name() {
    assert_eq!(tokenize("A"), vec![Token::Name("A")]);
}

#[test]
fn test_nested_tree() {
    let tokens = tokenize("(A, (B, C))");
    assert_eq!(
        tokens,
        vec![
            Token::Open,
            Token::Name("A"),
            Token::Open,
            Token::Name("B"),
            Token::Name("C"),
            Token::Close,
            Token::Close,
        ]
    );
}

#[test]
fn test_empty_and_ignored_only_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" ,\t;\n: -. ").is_empty());
}

#[test]
fn test_punctuation_splits_names() {
    // Separators are not needed between names and parentheses
    assert_eq!(
        tokenize("(Little_Spotted_Kiwi;Tokoeka)"),
        vec![
            Token::Open,
            Token::Name("Little_Spotted_Kiwi"),
            Token::Name("Tokoeka"),
            Token::Close,
        ]
    );
    assert_eq!(
        tokenize("Great-Spotted"),
        vec![Token::Name("Great"), Token::Name("Spotted")]
    );
}

#[test]
fn test_branch_length_digits_become_names() {
    assert_eq!(
        tokenize("(A:0.25,B)"),
        vec![
            Token::Open,
            Token::Name("A"),
            Token::Name("0"),
            Token::Name("25"),
            Token::Name("B"),
            Token::Close,
        ]
    );
}

#[test]
fn test_unicode_word_characters() {
    assert_eq!(
        tokenize("(Kākāpō,Tūī)"),
        vec![
            Token::Open,
            Token::Name("Kākāpō"),
            Token::Name("Tūī"),
            Token::Close,
        ]
    );
}

#[test]
fn test_unbalanced_input_is_not_rejected() {
    assert_eq!(
        tokenize(")(("),
        vec![Token::Close, Token::Open, Token::Open]
    );
}

#[test]
fn test_tokenizer_positions() {
    let positioned: Vec<_> = Tokenizer::new("  (A1 ,B_2)").collect();
    assert_eq!(
        positioned,
        vec![
            (2, Token::Open),
            (3, Token::Name("A1")),
            (7, Token::Name("B_2")),
            (10, Token::Close),
        ]
    );
}

#[test]
fn test_tokenizer_peek_and_eof() {
    let mut tokenizer = Tokenizer::new("(X) ");
    assert_eq!(tokenizer.peek(), Some('('));
    assert_eq!(tokenizer.by_ref().count(), 3);
    assert!(tokenizer.is_eof());
    assert_eq!(tokenizer.offset(), 4);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_is_valid_name() {
    assert!(is_valid_name("Apteryx_mantelli"));
    assert!(is_valid_name("42"));
    assert!(is_valid_name("Kōura"));
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("Two words"));
    assert!(!is_valid_name("A,B"));
    assert!(!is_valid_name("(A)"));
}

#[test]
fn test_offset_follows_each_token() {
    let mut tokenizer = Tokenizer::new("(Ruru, Weka)");
    let mut offsets = Vec::new();
    while tokenizer.next().is_some() {
        offsets.push(tokenizer.offset());
    }
    // Offset is right behind each token, names are consumed whole
    assert_eq!(offsets, vec![1, 5, 11, 12]);
}
