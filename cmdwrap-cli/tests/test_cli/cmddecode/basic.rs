use crate::add_test;
use crate::common::{Fixture, MULTIBYTE_COMMAND};

// Base64 is the default encoding
add_test!(decodes_base64_by_default, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("cmddecode", &["YmFzaCAtYyAiZWNobyBoaSI="])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash -c \"echo hi\"");

    let output = fixture
        .run_cargo("cmddecode", &["ZWNobyBow6lsbG8g5LiW55WM"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), MULTIBYTE_COMMAND);
});

// URL and double URL
add_test!(decodes_url_encodings, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("cmddecode", &["-e", "url", "cmd%20%2Fc%20%22echo%20100%25%25%22"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "cmd /c \"echo 100%%\"");

    let output = fixture
        .run_cargo(
            "cmddecode",
            &["-e", "double_url", "bash%2520-c%2520%2522echo%2520hi%2522"],
        )
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "bash -c \"echo hi\"");
});

// Encoded text from stdin, surrounding newline ignored
add_test!(reads_stdin, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo_with_stdin("cmddecode", &[], "aWQ=\n")
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.line(), "id");
});

// The decoded command goes to the clipboard as is
add_test!(copies_decoded_text, async {
    const CLIP_FILE: &str = "clipboard.txt";

    let mut fixture = Fixture::new();
    let clipboard = fixture.capture_clipboard(CLIP_FILE);

    let output = fixture
        .run_cargo("cmddecode", &["-c", "--clipboard", &clipboard, "YmFzaCAtYyAiaWQi"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.stderr, "[ok] Copied to clipboard\n");
    assert_eq!(fixture.read_file(CLIP_FILE), "bash -c \"id\"");
});

// Malformed input fails with the program name and encoding
add_test!(rejects_malformed_input, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("cmddecode", &["-e", "url", "%E4%B8"]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        output.stderr.starts_with("cmddecode: URL decoding failed"),
        "{}",
        output.stderr
    );

    // Decodes to bytes that are not UTF-8
    let output = fixture.run_cargo("cmddecode", &["//4="]).await;
    assert!(!output.status.success());
    assert!(
        output.stderr.starts_with("cmddecode: Base64 decoding failed"),
        "{}",
        output.stderr
    );
});
