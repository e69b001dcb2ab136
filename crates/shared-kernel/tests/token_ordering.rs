use wordfreq_shared_kernel::Token;

#[test]
fn orders_by_code_point() {
    assert!(Token::new("a") < Token::new("the"));
    assert!(Token::new("jumps") < Token::new("quick"));
    // Byte order over UTF-8 equals code-point order.
    assert!(Token::new("z") < Token::new("é"));
}

#[test]
fn equality_is_textual() {
    assert_eq!(Token::new("fox"), Token::from("fox".to_string()));
    assert_ne!(Token::new("fox"), Token::new("Fox"));
}

#[test]
fn display_shows_full_text() {
    let token = Token::new("pneumonoultramicroscopicsilicovolcanoconiosis");
    assert_eq!(token.to_string(), "pneumonoultramicroscopicsilicovolcanoconiosis");
}
