//! Integration tests for the context parser with every transform enabled.

use context_parser::{Configuration, ContextParser, StateId};

/// Helper to run a single chunk through a fresh strict parser
fn contextualize(input: &str) -> String {
    ContextParser::new(Configuration::strict()).contextualize(input)
}

/// Helper to run several chunks through one strict parser
fn contextualize_chunks(chunks: &[&str]) -> Vec<String> {
    let mut parser = ContextParser::new(Configuration::strict());
    chunks.iter().map(|chunk| parser.contextualize(chunk)).collect()
}

// =============================================================================
// Input stream preprocessing
// =============================================================================

#[test]
fn test_carriage_returns_normalized() {
    assert_eq!(contextualize("\r\n"), "\n");
    assert_eq!(contextualize("\r\r\r"), "\n\n\n");
}

#[test]
fn test_control_character_replaced() {
    assert_eq!(contextualize("\x0B"), "\u{FFFD}");
}

#[test]
fn test_noncharacters_replaced() {
    assert_eq!(contextualize("\u{1FFFE}"), "\u{FFFD}");
    assert_eq!(contextualize("\u{1FFFF}"), "\u{FFFD}");
}

#[test]
fn test_crlf_split_across_chunks() {
    assert_eq!(contextualize_chunks(&["a\r", "\nb"]), ["a\n", "b"]);
}

// =============================================================================
// IE conditional comments
// =============================================================================

#[test]
fn test_conditional_comment_voided() {
    assert_eq!(
        contextualize(
            r#"<!--[if lt IE 9]><script src="javascripts/html5shiv.min.js"></script><![endif]-->"#
        ),
        r#"<!--[if lt IE 9] ><script src="javascripts/html5shiv.min.js"></script><![endif]-->"#
    );
}

#[test]
fn test_only_first_greater_than_sign_of_comment_voided() {
    assert_eq!(
        contextualize("<!--[if IE]>a]><![endif]-->"),
        "<!--[if IE] >a]><![endif]-->"
    );
}

#[test]
fn test_plain_comment_not_voided() {
    assert_eq!(contextualize("<!--[if]>x-->"), "<!--[if]>x-->");
    assert_eq!(contextualize("<!-- a > b -->"), "<!-- a > b -->");
}

// =============================================================================
// Partials
// =============================================================================

#[test]
fn test_state_inherited_between_partials() {
    let mut parser = ContextParser::new(Configuration::strict());

    assert_eq!(parser.contextualize("<a href="), "<a href=");
    assert_eq!(parser.current_state(), StateId::BeforeAttributeValue);
    assert_eq!(parser.current_state().id(), 37);

    // The caller substitutes `{{url}}` itself and moves the parser along.
    parser.set_current_state(StateId::AttributeValueUnquoted);

    assert_eq!(parser.contextualize(">"), ">");
    assert_eq!(parser.current_state(), StateId::Data);
    assert_eq!(parser.contextualize("hello</a>"), "hello</a>");
}

#[test]
fn test_forced_character_reference_state_resumes_enclosing_state() {
    let mut parser = ContextParser::new(Configuration::strict());
    let _ = parser.contextualize("<a title='x");
    parser.set_current_state(StateId::CharacterReferenceInAttributeValue);
    assert_eq!(parser.contextualize("y'>"), "y'>");
    assert_eq!(parser.current_state(), StateId::Data);

    let mut parser = ContextParser::new(Configuration::strict());
    parser.set_current_state(StateId::CharacterReferenceInData);
    assert_eq!(parser.contextualize("a<b>"), "a<b>");
    assert_eq!(parser.current_state(), StateId::Data);

    let mut parser = ContextParser::new(Configuration::strict());
    let _ = parser.contextualize("<title>");
    parser.set_current_state(StateId::CharacterReferenceInRcdata);
    assert_eq!(parser.contextualize("x</title>"), "x</title>");
    assert_eq!(parser.current_state(), StateId::Data);
}

#[test]
fn test_bogus_comments_converted() {
    assert_eq!(contextualize("</>"), "<!--/-->");
    assert_eq!(contextualize("<?>"), "<!--?-->");
    assert_eq!(contextualize("<!>"), "<!--!-->");
    assert_eq!(contextualize("<!->"), "<!--!--->");

    // Not tags at all, so no comment is needed.
    assert_eq!(contextualize("<%>"), "&lt;%>");
    assert_eq!(contextualize("<3>"), "&lt;3>");
}

#[test]
fn test_bogus_comment_conversion_across_chunks() {
    let mut parser = ContextParser::new(Configuration::strict());

    // The `<` is in an earlier chunk, so `</>` cannot be rewritten.
    assert_eq!(parser.contextualize("</"), "</");
    assert_eq!(parser.contextualize(">"), ">");

    assert_eq!(parser.contextualize("<?"), "<!--?");
    assert_eq!(parser.contextualize("?>"), "?-->");

    assert_eq!(parser.contextualize("<!"), "<!--!");
    assert_eq!(parser.contextualize(">"), "-->");

    assert_eq!(parser.contextualize("<!-"), "<!--!-");
    assert_eq!(parser.contextualize(">"), "-->");
}

#[test]
fn test_bogus_comment_attacks() {
    // https://html5sec.org/#91
    assert_eq!(
        contextualize(r#"<? foo="><script>alert(1)</script>">"#),
        r#"<!--? foo="--><script>alert(1)</script>">"#
    );
    assert_eq!(
        contextualize(r#"<! foo="><script>alert(1)</script>">"#),
        r#"<!--! foo="--><script>alert(1)</script>">"#
    );
    assert_eq!(
        contextualize(r#"</ foo="><script>alert(1)</script>">"#),
        r#"<!--/ foo="--><script>alert(1)</script>">"#
    );
    assert_eq!(
        contextualize(r#"<? foo="><x foo='?><script>alert(1)</script>'>">"#),
        r#"<!--? foo="--><x foo='?><script>alert(1)</script>'>">"#
    );
    assert_eq!(
        contextualize(r#"<! foo="[[[x]]"><x foo="]foo><script>alert(1)</script>">"#),
        r#"<!--! foo="[[[x]]"--><x foo="]foo><script>alert(1)</script>">"#
    );
    assert_eq!(
        contextualize(r#"<% foo><x foo="%><script>alert(1)</script>">"#),
        r#"&lt;% foo><x foo="%><script>alert(1)</script>">"#
    );
}

#[test]
fn test_bogus_comment_spanning_two_calls() {
    assert_eq!(contextualize_chunks(&["<?yo", "yo?>"]), ["<!--?yo", "yo?-->"]);
}

#[test]
fn test_bogus_comment_spanning_fork() {
    let mut parser = ContextParser::new(Configuration::strict());
    assert_eq!(parser.contextualize("<?yo"), "<!--?yo");

    let mut fork = parser.fork();
    assert_eq!(fork.contextualize("yo?>"), "yo?-->");

    // The original is untouched by the fork and still inside the comment.
    assert_eq!(parser.current_state(), StateId::BogusComment);
    assert_eq!(parser.contextualize("?>"), "?-->");
}

// =============================================================================
// Raw text and RCDATA
// =============================================================================

#[test]
fn test_less_than_sign_in_rawtext_and_rcdata() {
    assert_eq!(
        contextualize("<style> <% </style> %> </style>"),
        "<style> &lt;% </style> %> </style>"
    );
    assert_eq!(
        contextualize("<textarea> <% </textarea> %> </textarea>"),
        "<textarea> &lt;% </textarea> %> </textarea>"
    );
}

#[test]
fn test_comment_opener_in_rawtext_and_rcdata() {
    assert_eq!(
        contextualize("<style> <!-- </style> --> </style>"),
        "<style> &lt;!-- </style> --> </style>"
    );
    assert_eq!(
        contextualize("<textarea> <!-- </textarea> --> </textarea>"),
        "<textarea> &lt;!-- </textarea> --> </textarea>"
    );
}

#[test]
fn test_inappropriate_end_tag_stays_in_rawtext() {
    let mut parser = ContextParser::new(Configuration::strict());
    assert_eq!(parser.contextualize("<xmp></b>"), "<xmp></b>");
    assert_eq!(parser.current_state(), StateId::Rawtext);
    assert_eq!(parser.contextualize("</XMP>"), "</XMP>");
    assert_eq!(parser.current_state(), StateId::Data);
}

#[test]
fn test_content_model_switches() {
    let cases = [
        ("<title>", StateId::Rcdata),
        ("<textarea>", StateId::Rcdata),
        ("<style>", StateId::Rawtext),
        ("<iframe>", StateId::Rawtext),
        ("<noscript>", StateId::Rawtext),
        ("<script>", StateId::ScriptData),
        ("<plaintext>", StateId::Plaintext),
        ("<div>", StateId::Data),
        ("<SCRIPT type=module>", StateId::ScriptData),
    ];
    for (input, expected) in cases {
        let mut parser = ContextParser::new(Configuration::strict());
        assert_eq!(parser.contextualize(input), input);
        assert_eq!(parser.current_state(), expected, "after {input}");
    }
}

#[test]
fn test_script_end_tag_split_across_chunks() {
    let mut parser = ContextParser::new(Configuration::strict());
    assert_eq!(parser.contextualize("<script>x</scr"), "<script>x</scr");
    assert_eq!(parser.current_state(), StateId::ScriptDataEndTagName);
    assert_eq!(parser.contextualize("ipt>y"), "ipt>y");
    assert_eq!(parser.current_state(), StateId::Data);
}

// =============================================================================
// NULL handling
// =============================================================================

#[test]
fn test_null_in_text_states() {
    assert_eq!(contextualize("\x00"), "\u{FFFD}");
    assert_eq!(contextualize("<title>\x00</title>"), "<title>\u{FFFD}</title>");
    assert_eq!(contextualize("<style>\x00</style>"), "<style>\u{FFFD}</style>");
    assert_eq!(contextualize("<script>\x00</script>"), "<script>\u{FFFD}</script>");
    assert_eq!(contextualize("<plaintext>\x00"), "<plaintext>\u{FFFD}");
}

#[test]
fn test_null_in_script_data_escaped_states() {
    let cases = [
        "<script><!-- \x00 --></script>",
        "<script><!-- -\x00 --></script>",
        "<script><!-- --\x00 --></script>",
        "<script><!-- <script>\x00 --></script>",
        "<script><!-- <script> -\x00 --></script>",
        "<script><!-- <script> --\x00 --></script>",
    ];
    for input in cases {
        assert_eq!(contextualize(input), input.replace('\x00', "\u{FFFD}"));
    }
}

#[test]
fn test_double_escaped_script_needs_both_end_tags() {
    let mut parser = ContextParser::new(Configuration::strict());
    let _ = parser.contextualize("<script><!--<script>");
    assert_eq!(parser.current_state(), StateId::ScriptDataDoubleEscaped);
    let _ = parser.contextualize("</script>");
    assert_eq!(parser.current_state(), StateId::ScriptDataEscaped);
    let _ = parser.contextualize("--></script>");
    assert_eq!(parser.current_state(), StateId::Data);
}

// =============================================================================
// Tag open and end tag open
// =============================================================================

#[test]
fn test_tag_open_question_mark() {
    assert_eq!(contextualize("abcd<?  ?>efgh"), "abcd<!--?  ?-->efgh");
}

#[test]
fn test_tag_open_anything_else() {
    assert_eq!(contextualize("abcd<\x00efgh"), "abcd&lt;\u{FFFD}efgh");
    assert_eq!(contextualize("abcd<3<3<3efgh"), "abcd&lt;3&lt;3&lt;3efgh");
    assert_eq!(contextualize("<<br>"), "&lt;<br>");
}

#[test]
fn test_end_tag_open() {
    assert_eq!(contextualize("abcd</>efgh"), "abcd<!--/-->efgh");
    assert_eq!(contextualize("abcd</\x00div>efgh"), "abcd<!--/\u{FFFD}div-->efgh");
    assert_eq!(contextualize("abcd</ div>efgh"), "abcd<!--/ div-->efgh");
}

#[test]
fn test_tag_name_null() {
    assert_eq!(contextualize("<b\x00r><b\x00r/>"), "<b\u{FFFD}r><b\u{FFFD}r/>");
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn test_before_attribute_name() {
    assert_eq!(contextualize("<a \x00href=\"#\">hello</a>"), "<a \u{FFFD}href=\"#\">hello</a>");
    for stray in ['"', '\'', '<', '='] {
        assert_eq!(
            contextualize(&format!("<a {stray}href=\"#\">hello</a>")),
            "<a href=\"#\">hello</a>"
        );
        assert_eq!(
            contextualize(&format!("<img src=\"x\" {stray}b>hello</b>")),
            "<img src=\"x\" b>hello</b>"
        );
        assert_eq!(
            contextualize(&format!("<img src=\"x\"{stray}b>hello</b>")),
            "<img src=\"x\" b>hello</b>"
        );
    }
}

#[test]
fn test_attribute_name() {
    assert_eq!(contextualize("<a hre\x00f=\"#\">hello</a>"), "<a hre\u{FFFD}f=\"#\">hello</a>");
    for stray in ['"', '\'', '<'] {
        assert_eq!(
            contextualize(&format!("<a href{stray}=\"#\">hello</a>")),
            "<a href=\"#\">hello</a>"
        );
    }
}

#[test]
fn test_malicious_attribute_names() {
    // https://html5sec.org/#62
    assert_eq!(
        contextualize(r#"<!-- IE 6-8 --><x '="foo"><x foo='><img src=x onerror=alert(1)//'>"#),
        r#"<!-- IE 6-8 --><x foo><x foo='><img src=x onerror=alert(1)//'>"#
    );
    assert_eq!(
        contextualize(r#"<!-- IE 6-9 --><! '="foo"><x foo='><img src=x onerror=alert(2)//'>"#),
        r#"<!-- IE 6-9 --><!--! '="foo"--><x foo='><img src=x onerror=alert(2)//'>"#
    );
    assert_eq!(
        contextualize(r#"<!-- IE 6-9 --><? '="foo"><x foo='><img src=x onerror=alert(3)//'>"#),
        r#"<!-- IE 6-9 --><!--? '="foo"--><x foo='><img src=x onerror=alert(3)//'>"#
    );
}

#[test]
fn test_after_attribute_name() {
    assert_eq!(contextualize("<a href \x00=\"#\">hello</a>"), "<a href \u{FFFD}=\"#\">hello</a>");
    for stray in ['"', '\'', '<'] {
        assert_eq!(
            contextualize(&format!("<a href {stray}=\"#\">hello</a>")),
            "<a href =\"#\">hello</a>"
        );
    }
}

#[test]
fn test_before_attribute_value() {
    assert_eq!(contextualize("<a href=\x00x>hello</a>"), "<a href=\u{FFFD}x>hello</a>");
    assert_eq!(contextualize("<a href=>hello</a>"), "<a href>hello</a>");
    assert_eq!(contextualize("<a href=<x>hello</a>"), "<a href=&lt;x>hello</a>");
    assert_eq!(contextualize("<a href=<>hello</a>"), "<a href=&lt;>hello</a>");
    assert_eq!(contextualize("<a href==x>hello</a>"), "<a href=&#61;x>hello</a>");
    assert_eq!(contextualize("<a href==>hello</a>"), "<a href=&#61;>hello</a>");
    assert_eq!(contextualize("<a href=`x`>hello</a>"), "<a href=&#96;x&#96;>hello</a>");
    assert_eq!(contextualize("<a href=`>hello</a>"), "<a href=&#96;>hello</a>");
}

#[test]
fn test_missing_attribute_value_across_chunks_is_kept() {
    assert_eq!(contextualize_chunks(&["<a href=", ">x"]), ["<a href=", ">x"]);
}

#[test]
fn test_quoted_attribute_values() {
    assert_eq!(contextualize("<a href=\"\x00\">hello</a>"), "<a href=\"\u{FFFD}\">hello</a>");
    assert_eq!(contextualize("<a href='\x00'>hello</a>"), "<a href='\u{FFFD}'>hello</a>");
    assert_eq!(
        contextualize("<a title=\"<`'=>\">hello</a>"),
        "<a title=\"<`'=>\">hello</a>"
    );
}

#[test]
fn test_unquoted_attribute_value() {
    assert_eq!(contextualize("<a href=x\x00>hello</a>"), "<a href=x\u{FFFD}>hello</a>");
    assert_eq!(contextualize("<a href=x\">hello</a>"), "<a href=x&quot;>hello</a>");
    assert_eq!(contextualize("<a href=x'>hello</a>"), "<a href=x&#39;>hello</a>");
    assert_eq!(contextualize("<a href=x<>hello</a>"), "<a href=x&lt;>hello</a>");
    assert_eq!(contextualize("<a href=x=>hello</a>"), "<a href=x&#61;>hello</a>");
    assert_eq!(contextualize("<a href=x`>hello</a>"), "<a href=x&#96;>hello</a>");
}

#[test]
fn test_after_attribute_value_quoted() {
    assert_eq!(
        contextualize("<img src=\"x\" onclick=\"\"/>"),
        "<img src=\"x\" onclick=\"\"/>"
    );
    assert_eq!(
        contextualize("<img src=\"x\"onclick=\"\"/>"),
        "<img src=\"x\" onclick=\"\"/>"
    );
}

#[test]
fn test_self_closing_start_tag() {
    assert_eq!(contextualize("<br/ onclick=\"\">"), "<br  onclick=\"\">");
    assert_eq!(contextualize("<br/onclick=\"\">"), "<br onclick=\"\">");
    assert_eq!(contextualize("<br /onclick=\"\">"), "<br  onclick=\"\">");
    assert_eq!(contextualize("<br oncl/ick=\"\">"), "<br oncl ick=\"\">");
    assert_eq!(contextualize("<br onclick /=\"\">"), "<br onclick  >");
    assert_eq!(contextualize("<br onclick/=\"alert(1)\">"), "<br onclick alert(1)>");
    assert_eq!(contextualize("<br onclick /=\"alert(1)\">"), "<br onclick  alert(1)>");
}

#[test]
fn test_solidus_withheld_until_next_chunk() {
    assert_eq!(contextualize_chunks(&["<br/", ">"]), ["<br", "/>"]);
    assert_eq!(contextualize_chunks(&["<br/", "x>"]), ["<br", " x>"]);
}

#[test]
fn test_attribute_accessors_track_tag() {
    let mut parser = ContextParser::new(Configuration::strict());
    let _ = parser.contextualize("<A HREF='java");
    let state = parser.parser_state();
    assert_eq!(state.tag_name(), "a");
    assert!(!state.is_end_tag());
    assert_eq!(state.attribute_name(), "href");
    assert_eq!(state.attribute_value(), "java");
    assert_eq!(state.attribute_quote_kind(), context_parser::AttributeQuoteKind::Single);
    assert_eq!(state.last_start_tag_name(), None);

    let _ = parser.contextualize("script:'>");
    assert_eq!(parser.parser_state().last_start_tag_name(), Some("a"));
    assert_eq!(parser.parser_state().tag_name(), "");
}

// =============================================================================
// Markup declarations
// =============================================================================

#[test]
fn test_doctype() {
    assert_eq!(contextualize("<!doctype html>"), "<!doctype html>");
    assert_eq!(contextualize("<!DOCTYPE HTML>"), "<!DOCTYPE HTML>");
    assert_eq!(
        contextualize("<!doctype html5>"),
        "<!--!doctype html5--><!doctype html>"
    );
    assert_eq!(
        contextualize(
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#
        ),
        r#"<!--!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd"--><!doctype html>"#
    );
}

#[test]
fn test_null_in_doctype_replaced() {
    assert_eq!(
        contextualize("<!doctype h\x00>"),
        "<!--!doctype h\u{FFFD}--><!doctype html>"
    );
}

#[test]
fn test_doctype_withheld_until_closed() {
    let mut parser = ContextParser::new(Configuration::strict());
    assert_eq!(parser.contextualize("<!doctype "), "<");
    assert_eq!(parser.current_state(), StateId::BeforeDoctypeName);
    assert_eq!(parser.contextualize("html>"), "!doctype html>");
}

#[test]
fn test_cdata_in_foreign_content() {
    assert_eq!(
        contextualize("<math><ms><![CDATA[x<y]]></ms></math>"),
        "<math><ms><![CDATA[x<y]]></ms></math>"
    );
}

#[test]
fn test_null_in_cdata_replaced() {
    assert_eq!(
        contextualize("<svg><![CDATA[\x00]]></svg>"),
        "<svg><![CDATA[\u{FFFD}]]></svg>"
    );
}

#[test]
fn test_cdata_closed_after_extra_brackets() {
    let mut parser = ContextParser::new(Configuration::strict());
    assert_eq!(
        parser.contextualize("<svg><![CDATA[x]]]>"),
        "<svg><![CDATA[x]]]>"
    );
    assert_eq!(parser.current_state(), StateId::Data);

    let mut parser = ContextParser::new(Configuration::strict());
    let _ = parser.contextualize("<svg><![CDATA[x]]x>");
    assert_eq!(parser.current_state(), StateId::CdataSection);
}

#[test]
fn test_cdata_outside_foreign_content_is_bogus_comment() {
    assert_eq!(contextualize("<![CDATA[x]]>"), "<!--![CDATA[x]]-->");
    assert_eq!(
        contextualize("<svg/><![CDATA[x]]>"),
        "<svg/><!--![CDATA[x]]-->"
    );
}

#[test]
fn test_standard_comment() {
    assert_eq!(contextualize("<!--hello-->"), "<!--hello-->");
}

#[test]
fn test_markup_declaration_split_across_chunks() {
    let mut parser = ContextParser::new(Configuration::strict());
    assert_eq!(parser.contextualize("<!"), "<!--!");
    assert_eq!(parser.current_state(), StateId::BogusComment);

    let mut parser = ContextParser::new(Configuration::strict());
    parser.set_current_state(StateId::MarkupDeclarationOpen);
    assert_eq!(parser.contextualize("--x-->"), "--x-->");
    assert_eq!(parser.current_state(), StateId::Data);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn test_comment_start() {
    assert_eq!(contextualize("<!--\x00-->"), "<!--\u{FFFD}-->");
    assert_eq!(contextualize("<!-->"), "<!---->");
}

#[test]
fn test_comment_start_dash() {
    assert_eq!(contextualize("<!---\x00-->"), "<!---\u{FFFD}-->");
    assert_eq!(contextualize("<!--->"), "<!---->");
}

#[test]
fn test_comment_null() {
    assert_eq!(contextualize("<!-- \x00-->"), "<!-- \u{FFFD}-->");
    assert_eq!(contextualize("<!---\x00>-->"), "<!---\u{FFFD}>-->");
    assert_eq!(contextualize("<!----\x00>-->"), "<!----\u{FFFD}>-->");
    assert_eq!(contextualize("<!----!\x00>-->"), "<!----!\u{FFFD}>-->");
}

#[test]
fn test_comment_end_bang() {
    assert_eq!(contextualize("<!--abc--!>"), "<!--abc-->");
    assert_eq!(contextualize("<!--abc--!-->"), "<!--abc--!-->");
    assert_eq!(contextualize("<!--abc--! -->"), "<!--abc--! -->");
    assert_eq!(contextualize("<!--abc--! --!>"), "<!--abc--! -->");
}

#[test]
fn test_comment_end_other() {
    assert_eq!(contextualize("<!--abc--->"), "<!--abc--->");
    assert_eq!(contextualize("<!--abc--a-->"), "<!--abc--a-->");
}

#[test]
fn test_comment_end_bang_split_across_chunks() {
    assert_eq!(contextualize_chunks(&["<!--a--!", ">"]), ["<!--a--", ">"]);
    assert_eq!(contextualize_chunks(&["<!--a--!", "-->"]), ["<!--a--", "!-->"]);
}

// =============================================================================
// Shared parser
// =============================================================================

#[test]
fn test_one_parser_over_many_documents() {
    let cases = [
        ("<!--[if IE]><p>x</p><![endif]-->", "<!--[if IE] ><p>x</p><![endif]-->"),
        ("</>", "<!--/-->"),
        ("<style> <% </style>", "<style> &lt;% </style>"),
        ("<a href=>x</a>", "<a href>x</a>"),
        ("<!doctype html5>", "<!--!doctype html5--><!doctype html>"),
        ("<math><![CDATA[]]></math>", "<math><![CDATA[]]></math>"),
        ("<!--abc--!>", "<!--abc-->"),
    ];
    let mut parser = ContextParser::new(Configuration::strict());
    for (input, expected) in cases {
        assert_eq!(parser.contextualize(input), expected, "input {input:?}");
        assert_eq!(parser.current_state(), StateId::Data, "after {input:?}");
    }
}

#[test]
fn test_partial_attribute_then_close() {
    let outputs = contextualize_chunks(&["<a href=", ">hello</a>"]);
    assert_eq!(outputs.concat(), "<a href=>hello</a>");
}

#[test]
fn test_canonical_output_is_stable() {
    let inputs = [
        "</>",
        "<?>",
        "<!>",
        "<!->",
        "<%>",
        "<!-->",
        "<!--->",
        "<!--abc--!>",
        "<!doctype html5>",
        "<a href=>hello</a>",
        "<a href=`x`>hello</a>",
        "<br/ onclick=\"\">",
        "<img src=\"x\"onclick=\"\"/>",
        "<!--[if lt IE 9]><![endif]-->",
        "<style> <!-- </style>",
    ];
    for input in inputs {
        let once = contextualize(input);
        assert_eq!(contextualize(&once), once, "input {input:?}");
    }
}
