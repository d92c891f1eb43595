use gutenmark::{Options, to_blocks, to_blocks_with_options};

// ── Single top-level elements ────────────────────────────────────────

#[test]
fn wraps_each_recognized_tag() {
    let cases = [
        (
            "<p>x</p>",
            "<!-- wp:paragraph --><p>x</p><!-- /wp:paragraph -->",
        ),
        ("<ul>x</ul>", "<!-- wp:list --><ul>x</ul><!-- /wp:list -->"),
        (
            "<ol>x</ol>",
            "<!-- wp:list {\"ordered\":true} --><ol>x</ol><!-- /wp:list -->",
        ),
        (
            "<li>x</li>",
            "<!-- wp:list-item --><li>x</li><!-- /wp:list-item -->",
        ),
        (
            "<blockquote>x</blockquote>",
            "<!-- wp:quote --><blockquote><!-- wp:paragraph --><p>x</p><!-- /wp:paragraph --></blockquote><!-- /wp:quote -->",
        ),
        ("<code>x</code>", "<!-- wp:code --><code>x</code><!-- /wp:code -->"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_blocks(input), expected, "input: {input}");
    }
}

#[test]
fn wraps_every_heading_level() {
    for level in 1..=6 {
        let input = format!("<h{level}>Title</h{level}>");
        let expected = format!(
            "<!-- wp:heading {{\"level\":{level}}} --><h{level}>Title</h{level}><!-- /wp:heading -->"
        );
        assert_eq!(to_blocks(&input), expected);
    }
}

// ── Documents ────────────────────────────────────────────────────────

#[test]
fn paragraph_then_list() {
    let blocks = to_blocks("<p>Hello</p><ul><li>One</li><li>Two</li></ul>");
    let lines: Vec<&str> = blocks.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "<!-- wp:paragraph --><p>Hello</p><!-- /wp:paragraph -->",
            "<!-- wp:list --><ul>",
            "<!-- wp:list-item --><li>One</li><!-- /wp:list-item -->",
            "<!-- wp:list-item --><li>Two</li><!-- /wp:list-item -->",
            "</ul><!-- /wp:list -->",
        ]
    );
}

#[test]
fn heading_paragraph_and_quote() {
    let blocks = to_blocks("<h2>About</h2><p>Intro</p><blockquote>Quoted</blockquote>");
    let lines: Vec<&str> = blocks.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "<!-- wp:heading {\"level\":2} --><h2>About</h2><!-- /wp:heading -->",
            "<!-- wp:paragraph --><p>Intro</p><!-- /wp:paragraph -->",
            "<!-- wp:quote --><blockquote><!-- wp:paragraph --><p>Quoted</p><!-- /wp:paragraph --></blockquote><!-- /wp:quote -->",
        ]
    );
}

#[test]
fn ordered_list_document() {
    let blocks = to_blocks("<ol><li>First</li><li>Second</li></ol>");
    assert!(blocks.starts_with("<!-- wp:list {\"ordered\":true} --><ol>"));
    assert!(blocks.ends_with("</ol><!-- /wp:list -->"));
    assert_eq!(blocks.matches("<!-- wp:list-item -->").count(), 2);
}

#[test]
fn text_between_elements_becomes_paragraph() {
    let blocks = to_blocks("<h1>Top</h1>loose text<p>real</p>");
    assert!(
        blocks.contains("<!-- wp:paragraph --><p>loose text</p><!-- /wp:paragraph -->"),
        "{blocks}"
    );
}

// ── Line breaks ──────────────────────────────────────────────────────

#[test]
fn double_crlf_splits_paragraph_block() {
    assert_eq!(
        to_blocks("<p>first\r\n\r\nsecond</p>"),
        "<!-- wp:paragraph --><p>first</p><!-- /wp:paragraph --><!-- wp:paragraph --><p>second</p><!-- /wp:paragraph -->"
    );
}

#[test]
fn single_crlf_becomes_br() {
    assert_eq!(
        to_blocks("<p>one\r\ntwo</p>"),
        "<!-- wp:paragraph --><p>one<br>two</p><!-- /wp:paragraph -->"
    );
}

#[test]
fn bare_newlines_substituted_by_default() {
    assert_eq!(
        to_blocks("plain\n\ntext"),
        "<!-- wp:paragraph --><p>plain</p><!-- /wp:paragraph --><!-- wp:paragraph --><p>text</p><!-- /wp:paragraph -->"
    );
}

#[test]
fn bare_newlines_kept_in_strict_mode() {
    let options = Options {
        normalize_line_endings: false,
    };
    assert_eq!(
        to_blocks_with_options("<p>one\ntwo</p>", &options),
        "<!-- wp:paragraph --><p>one\ntwo</p><!-- /wp:paragraph -->"
    );
}

#[test]
fn line_breaks_inside_quote_split_nested_paragraph() {
    assert_eq!(
        to_blocks("<blockquote>a\r\n\r\nb</blockquote>"),
        "<!-- wp:quote --><blockquote><!-- wp:paragraph --><p>a</p><!-- /wp:paragraph --><!-- wp:paragraph --><p>b</p><!-- /wp:paragraph --></blockquote><!-- /wp:quote -->"
    );
}

#[test]
fn line_breaks_inside_list_item_untouched() {
    assert_eq!(
        to_blocks("<li>a\r\nb</li>"),
        "<!-- wp:list-item --><li>a\r\nb</li><!-- /wp:list-item -->"
    );
}

// ── Degradation ──────────────────────────────────────────────────────

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(to_blocks(""), "");
}

#[test]
fn unknown_tag_becomes_paragraph() {
    assert_eq!(
        to_blocks("<div>boxed</div>"),
        "<!-- wp:paragraph --><p><div>boxed</div></p><!-- /wp:paragraph -->"
    );
}

#[test]
fn attributed_list_is_not_recognized() {
    // Attribute-bearing tags are outside the textual contract.
    let blocks = to_blocks("<ul class=\"fancy\"><li>x</li></ul>");
    assert!(!blocks.contains("<!-- wp:list -->"));
    assert!(blocks.contains("<!-- wp:list-item --><li>x</li><!-- /wp:list-item -->"));
}

#[test]
fn unterminated_tag_still_wrapped() {
    assert_eq!(
        to_blocks("<p>never closed"),
        "<!-- wp:paragraph --><p>never closed"
    );
}

#[test]
fn closing_tag_alone_gets_close_wrapper() {
    assert_eq!(to_blocks("</ul>"), "</ul><!-- /wp:list -->");
}

#[test]
fn already_wrapped_content_untouched() {
    let wrapped = "<!-- wp:tribe/event-datetime /-->";
    assert_eq!(to_blocks(wrapped), wrapped);
}

// ── Determinism ──────────────────────────────────────────────────────

#[test]
fn repeated_conversion_is_byte_identical() {
    let input = "<h3>a</h3><p>b\r\nc</p><ul><li>d</li></ul>tail";
    let first = to_blocks(input);
    for _ in 0..3 {
        assert_eq!(to_blocks(input), first);
    }
}
