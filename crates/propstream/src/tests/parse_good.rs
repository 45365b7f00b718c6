use alloc::{vec, vec::Vec};

use crate::{
    Malformed, ParseResult,
    tests::{feed_all, folding_parser, parser, property, unrecognized},
};

#[test]
fn single_property() {
    let mut p = parser(1024);
    assert_eq!(feed_all(&mut p, b"name=value\n"), vec![property("name", "value")]);
}

#[test]
fn several_properties_in_one_chunk() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"a=1\nb=2\nc=3\n"),
        vec![property("a", "1"), property("b", "2"), property("c", "3")]
    );
}

#[test]
fn valid_and_invalid_interleave_in_order() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"valid=value\ninvalid\n"),
        vec![
            property("valid", "value"),
            unrecognized("invalid", Malformed::MissingEquals),
        ]
    );
}

#[test]
fn semicolons_separate_entries() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"a=1;b=2;c=3;"),
        vec![property("a", "1"), property("b", "2"), property("c", "3")]
    );
}

#[test]
fn crlf_separates_entries() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"a=1\r\nb=2\r\n"),
        vec![property("a", "1"), property("b", "2")]
    );
}

#[test]
fn blanks_and_line_comments_are_ignored() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b" \t name \t=\t value \t # comment here\r\n"),
        vec![property("name", "value")]
    );
}

#[test]
fn block_comments_are_ignored_mid_token() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"a/*ignored*/=/*ignored*/1\n"),
        vec![property("a", "1")]
    );
}

#[test]
fn comment_only_lines_produce_nothing() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"# header\n\n   \n/* note */\na=1\n;;\n"),
        vec![property("a", "1")]
    );
}

#[test]
fn line_continuation() {
    let mut p = parser(1024);
    assert_eq!(feed_all(&mut p, b"a=hel\\\nlo\n"), vec![property("a", "hello")]);
    assert_eq!(
        feed_all(&mut p, b"a=hel\\\r\nlo\r\n"),
        vec![property("a", "hello")]
    );
}

#[test]
fn quoted_values_keep_inner_blanks() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"s=\"hello world\"\n"),
        vec![property("s", "hello world")]
    );
}

#[test]
fn quoted_values_unescape() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"s=\"hello \\\"world\\\"\"\n"),
        vec![property("s", "hello \"world\"")]
    );
    assert_eq!(feed_all(&mut p, b"k=\"a\\\"b\"\n"), vec![property("k", "a\"b")]);
    assert_eq!(feed_all(&mut p, b"k=\"a\\\\b\"\n"), vec![property("k", "a\\b")]);
}

#[test]
fn quoted_values_may_hold_delimiters_and_comment_markers() {
    let mut p = parser(1024);
    assert_eq!(
        feed_all(&mut p, b"s=\"a;b # c /* d */\";t=1\n"),
        vec![property("s", "a;b # c /* d */"), property("t", "1")]
    );
}

#[test]
fn partial_token_waits_for_its_delimiter() {
    let mut p = parser(1024);
    assert!(feed_all(&mut p, b"partial=token").is_empty());
    assert_eq!(p.buffered(), 13);
    assert_eq!(feed_all(&mut p, b"\n"), vec![property("partial", "token")]);
    assert_eq!(p.buffered(), 0);
}

#[test]
fn crlf_split_across_feeds() {
    let mut p = parser(1024);
    assert!(feed_all(&mut p, b"a=1\r").is_empty());
    assert_eq!(feed_all(&mut p, b"\nb=2;"), vec![property("a", "1"), property("b", "2")]);
}

#[test]
fn case_insensitive_folds_names_only() {
    let mut p = folding_parser(1024);
    assert_eq!(feed_all(&mut p, b"Name=Value\n"), vec![property("name", "Value")]);
    assert_eq!(
        feed_all(&mut p, b"InvalidString\n"),
        vec![unrecognized("invalidstring", Malformed::MissingEquals)]
    );
    assert_eq!(
        feed_all(&mut p, b"Q=\"MiXeD\"\n"),
        vec![property("q", "MiXeD")]
    );
}

#[test]
fn many_entries_through_a_small_buffer() {
    let mut p = parser(10);
    let input = b"a=1\nb=2\nc=3\nd=4\ne=5\nf=6\ng=7\nh=8\ni=9\nj=10\nk=11\nl=12\nm=13\nn=14\no=15\n";
    let results = feed_all(&mut p, input);
    assert_eq!(results.len(), 15);
    assert!(results.iter().all(ParseResult::is_valid));
    assert_eq!(results[0], property("a", "1"));
    assert_eq!(results[14], property("o", "15"));
}

#[test]
fn no_result_survives_the_feed() {
    let mut p = parser(1024);
    assert_eq!(p.feed(b"name=value\n").count(), 1);
    assert!(!p.is_valid());
    assert_eq!(p.result(), None);
    assert_eq!(p.property_name(), "");
    assert_eq!(p.property_value(), "");
    assert_eq!(p.unrecognized_raw(), "");
}

#[test]
fn empty_chunk_does_nothing() {
    let mut p = parser(1024);
    assert!(feed_all(&mut p, b"").is_empty());
    p.absorb(b"a=1\n");
    assert!(feed_all(&mut p, b"").is_empty());
    assert_eq!(p.buffered(), 4);
}

#[test]
fn single_step_interface() {
    let mut p = parser(64);
    assert_eq!(p.absorb(b"\n\nk = v ; bad ; # c\n"), 20);
    assert!(p.parse_next());
    assert!(p.is_valid());
    assert_eq!(p.property_name(), "k");
    assert_eq!(p.property_value(), "v");
    assert_eq!(p.unrecognized_raw(), "");

    assert!(p.parse_next());
    assert!(!p.is_valid());
    assert_eq!(p.property_name(), "");
    assert_eq!(p.unrecognized_raw(), "bad");
    assert_eq!(p.result().and_then(ParseResult::reason), Some(Malformed::MissingEquals));

    // The comment-only tail is consumed but yields nothing.
    assert!(p.parse_next());
    assert_eq!(p.result(), None);
    assert!(!p.parse_next());
    assert_eq!(p.buffered(), 0);
}

#[test]
fn absorb_respects_capacity() {
    let mut p = parser(8);
    assert_eq!(p.absorb(b"abcdefghijk"), 8);
    assert_eq!(p.absorb(b"x"), 0);
    assert!(p.parse_next());
    assert_eq!(p.unrecognized_raw(), "abcdefgh");
    assert_eq!(p.absorb(b"x"), 1);
}

#[test]
fn reset_clears_input_and_result_but_not_options() {
    let mut p = folding_parser(32);
    p.absorb(b"A=1\nhalf");
    assert!(p.parse_next());
    p.reset();
    assert_eq!(p.buffered(), 0);
    assert_eq!(p.result(), None);
    assert!(p.options().case_insensitive);
    assert_eq!(p.options().buffer_capacity, 32);
    assert_eq!(feed_all(&mut p, b"B=2\n"), vec![property("b", "2")]);
}

#[test]
fn iterator_and_callback_agree() {
    let input = b"x=1;y=\"two\"\n# c\nz\n";
    let via_iter: Vec<ParseResult> = parser(16).feed(input).collect();
    let via_callback = feed_all(&mut parser(16), input);
    assert_eq!(via_iter, via_callback);
    assert_eq!(via_iter.len(), 3);
}

#[test]
fn display_renders_entries() {
    let mut p = parser(64);
    let rendered: Vec<_> = p
        .feed(b"a = \"q\\\"q\"\njunk\n")
        .map(|r| alloc::string::ToString::to_string(&r))
        .collect();
    assert_eq!(rendered, ["a=q\"q", "junk"]);
}

#[test]
fn unread_feed_still_absorbs_its_chunk() {
    let mut p = parser(1024);
    drop(p.feed(b"a=1\nb=2\n"));
    assert_eq!(p.buffered(), 8);
    assert_eq!(p.result(), None);
    assert_eq!(
        feed_all(&mut p, b"c=3\n"),
        vec![property("a", "1"), property("b", "2"), property("c", "3")]
    );
}

#[test]
fn feed_dropped_after_one_result_keeps_the_rest() {
    let mut p = parser(1024);
    assert_eq!(p.feed(b"a=1\nb=2\nc=").next(), Some(property("a", "1")));
    assert_eq!(p.buffered(), 6);
    assert_eq!(
        feed_all(&mut p, b"3\n"),
        vec![property("b", "2"), property("c", "3")]
    );
}

#[test]
fn feed_dropped_early_only_discards_what_must_make_room() {
    // Absorbing the rest of the chunk into an 8-byte buffer forces `b=2` and
    // `c=3` out; `d=4` still fits and is reported later.
    let mut p = parser(8);
    assert_eq!(p.feed(b"a=1\nb=2\nc=3\nd=4\n").next(), Some(property("a", "1")));
    assert_eq!(p.buffered(), 4);
    assert_eq!(p.result(), None);
    assert_eq!(
        feed_all(&mut p, b"e=5\n"),
        vec![property("d", "4"), property("e", "5")]
    );
}

#[test]
fn stopping_at_a_match_keeps_later_entries() {
    let mut p = parser(64);
    let hit = p.feed(b"x=1;port=80;y=2;z=").find(|r| r.name() == "port");
    assert_eq!(hit, Some(property("port", "80")));
    assert_eq!(
        feed_all(&mut p, b"3;"),
        vec![property("y", "2"), property("z", "3")]
    );
}
