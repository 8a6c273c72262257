use crate::ParserBuilder;

#[test]
fn library_examples_expand() {
    // Array of (input, expected)
    let cases: Vec<(&str, &str)> = vec![
        ("{lower:HeLLo}", "hello"),
        ("{upper:HeLLo}", "HELLO"),
        ("{length:four}", "4"),
        ("{length:héllo}", "5"),
        ("{replace:l|with:w|in:hello}", "hewwo"),
        ("{replace:a}", "<invalid replace statement>"),
        ("{oneline:a\n  b\t c}", "a b c"),
        ("{note:anything at all}", ""),
        ("{note}", ""),
        ("{get:missing}", ""),
        ("{set:name|val}{get:name}", "val"),
        ("{set:a|1}{set:b|2}{get:a}{get:b}", "12"),
        ("{if:1|<|2|then:yes|else:no}", "yes"),
        ("{if:10|<|9|then:yes|else:no}", "no"),
        ("{if:abc|=|abc|then:same|else:diff}", "same"),
        ("{if:abc|!=|abd|then:diff|else:same}", "diff"),
        // Numeric comparison, not lexicographic: "2" < "10".
        ("{if:2|>=|10|then:yes|else:no}", "no"),
        ("{if:a|~|b|then:x|else:y}", "<invalid if statement>"),
        // Libraries compose innermost-first like any other tags.
        ("{upper:{lower:ABC}}", "ABC"),
        ("{length:{upper:hi}}", "2"),
    ];

    for (input, expected) in cases {
        let parser = ParserBuilder::new().standard().build();
        assert_eq!(parser.parse(input), expected, "input '{input}'");
    }
}

#[test]
fn variables_survive_until_cleared() {
    let parser = ParserBuilder::new().standard().build();
    assert_eq!(parser.parse("{set:k|v}"), "");
    assert_eq!(parser.parse("{get:k}"), "v");
    parser.clear();
    assert_eq!(parser.parse("{get:k}"), "");
}

#[test]
fn variables_tolerate_a_mistyped_cell() {
    let parser = ParserBuilder::new().standard().build();
    parser.set("variables", "not a map");
    assert_eq!(parser.parse("{get:x}"), "");
    assert_eq!(parser.parse("{set:x|1}{get:x}"), "1");
}

#[test]
fn choose_picks_a_listed_option() {
    let parser = ParserBuilder::new().standard().build();
    for _ in 0..16 {
        let picked = parser.parse("{choose:red|green|blue}");
        assert!(["red", "green", "blue"].contains(&picked.as_str()), "picked '{picked}'");
    }
}

#[test]
fn now_formats_with_a_strftime_string() {
    let parser = ParserBuilder::new().standard().build();

    let year = parser.parse("{now:%Y}");
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()), "year '{year}'");

    let default = parser.parse("{now}");
    assert!(!default.is_empty());
    assert!(!default.contains('{'));
}

#[test]
fn now_with_a_bad_format_aborts_the_parse() {
    let parser = ParserBuilder::new().standard().build();
    assert_eq!(parser.parse("before {now:%!} after"), "invalid time format: %!");
}
