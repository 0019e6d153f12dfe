use crate::add_test;
use crate::common::Fixture;

// Blank input produces an empty line for every encoding
add_test!(blank_input_prints_empty_line, async {
    let mut fixture = Fixture::new();

    for encoding in ["none", "url", "base64", "double_url"] {
        let output = fixture
            .run_cargo_with_stdin("cmdwrap", &["-e", encoding], "   \n")
            .await;
        assert!(output.status.success(), "{encoding}: {}", output.stderr);
        assert_eq!(output.stdout, "\n", "{encoding}");
    }
});

// Nothing to copy is a warning, not a failure
add_test!(copy_of_empty_output_warns, async {
    let mut fixture = Fixture::new();
    let clipboard = fixture.capture_clipboard("clipboard.txt");

    let output = fixture
        .run_cargo_with_stdin("cmdwrap", &["-c", "--clipboard", &clipboard], "")
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.stderr, "[warning] Nothing to copy\n");
    assert!(!fixture.file_exists("clipboard.txt"));
});

// Surrounding whitespace is dropped before wrapping
add_test!(trims_surrounding_whitespace, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("cmdwrap", &["  ls  "]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash -c \"ls\"");
});

// Only one trailing line break is taken off stdin, inner lines stay
add_test!(multiline_stdin, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo_with_stdin("cmdwrap", &["-e", "url"], "a\nb\n")
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash%20-c%20%22a%0Ab%22");
});

// Escapes are applied once, so an escaped sequence is escaped again
add_test!(escapes_are_not_collapsed, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("cmdwrap", &["-t", "sh", "echo \\$HOME"]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "sh -c \"echo \\\\$HOME\"");
});

// Invalid input under --decode exits with an error message
add_test!(decode_error_exits_non_zero, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("cmdwrap", &["-d", "-e", "base64", "***"]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        output.stderr.starts_with("cmdwrap: Base64 decoding failed"),
        "{}",
        output.stderr
    );

    // -qq silences the message but not the exit status
    let output = fixture
        .run_cargo("cmdwrap", &["-qq", "-d", "-e", "base64", "***"])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.is_empty(), "{}", output.stderr);
});

// --decode and --interactive cannot be combined
add_test!(conflicting_modes, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("cmdwrap", &["-d", "-i"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("cannot be used with"), "{}", output.stderr);
});
