use crate::add_test;
use crate::common::{Fixture, MULTIBYTE_COMMAND, QUOTED_COMMAND, SIMPLE_COMMAND};

// Default type is bash, default encoding is none
add_test!(wraps_for_bash_by_default, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("cmdwrap", &[SIMPLE_COMMAND]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash -c \"echo hi\"");
    assert!(output.stderr.is_empty());
});

// Unquoted words are joined with single spaces
add_test!(joins_positional_words, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("cmdwrap", &["-t", "sh", "ls", "-la", "/tmp"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "sh -c \"ls -la /tmp\"");
});

// Every interpreter template
add_test!(all_command_types, async {
    let mut fixture = Fixture::new();

    let cases = [
        ("bash", "bash -c \"echo \\\"quoted \\$((1+2))\\\"\""),
        ("sh", "sh -c \"echo \\\"quoted \\$((1+2))\\\"\""),
        ("python", "python -c \"echo \\\"quoted \\$((1+2))\\\"\""),
        ("perl", "perl -e \"echo \\\"quoted \\$((1+2))\\\"\""),
        ("powershell", "powershell -Command \"echo `\"quoted `$((1+2))`\"\""),
        ("cmd", "cmd /c \"echo \"\"quoted $((1+2))\"\"\""),
        ("raw", QUOTED_COMMAND),
    ];

    for (ty, expected) in cases {
        let output = fixture
            .run_cargo("cmdwrap", &["-t", ty, QUOTED_COMMAND])
            .await;
        assert!(output.status.success(), "type {ty}: {}", output.stderr);
        assert_eq!(output.line(), expected, "type {ty}");
    }
});

// Base64 of the wrapped command, multi-byte characters included
add_test!(base64_encoding, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("cmdwrap", &["-e", "base64", SIMPLE_COMMAND])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "YmFzaCAtYyAiZWNobyBoaSI=");

    let output = fixture
        .run_cargo("cmdwrap", &["-t", "raw", "-e", "base64", MULTIBYTE_COMMAND])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "ZWNobyBow6lsbG8g5LiW55WM");
});

// URL and double URL encodings
add_test!(url_encodings, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("cmdwrap", &["-e", "url", SIMPLE_COMMAND])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash%20-c%20%22echo%20hi%22");

    let output = fixture
        .run_cargo("cmdwrap", &["-e", "double_url", SIMPLE_COMMAND])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash%2520-c%2520%2522echo%2520hi%2522");

    // Quotes, parentheses and `!*~` stay readable
    let output = fixture
        .run_cargo("cmdwrap", &["-e", "url", "echo '$(id)' !*"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash%20-c%20%22echo%20'%5C%24(id)'%20!*%22");
});

// Command read from stdin when no words are given
add_test!(reads_command_from_stdin, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo_with_stdin("cmdwrap", &["-t", "cmd"], "echo 100%\n")
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "cmd /c \"echo 100%%\"");
});

// Both stages on request
add_test!(show_wrapped, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("cmdwrap", &["-w", "-e", "base64", SIMPLE_COMMAND])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(
        output.stdout,
        "wrapped: bash -c \"echo hi\"\nfinal: YmFzaCAtYyAiZWNobyBoaSI=\n"
    );
});
