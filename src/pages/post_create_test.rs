use super::*;

#[test]
fn validate_post_trims_and_accepts_filled_input() {
    assert_eq!(
        validate_post("  Title  ", "  Body text  "),
        Ok(("Title".to_owned(), "Body text".to_owned()))
    );
}

#[test]
fn validate_post_rejects_blank_title() {
    assert_eq!(validate_post("   ", "Body"), Err("Enter a title."));
}

#[test]
fn validate_post_rejects_blank_content() {
    assert_eq!(validate_post("Title", "   "), Err("Enter some content."));
}
