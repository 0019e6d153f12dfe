use crate::add_test;
use crate::common::{Fixture, QUOTED_COMMAND};

// Every encoding round-trips through cmdwrap and cmddecode
add_test!(reverses_cmdwrap, async {
    let mut fixture = Fixture::new();

    for encoding in ["none", "url", "base64", "double_url"] {
        let encoded = fixture
            .run_cargo("cmdwrap", &["-t", "powershell", "-e", encoding, QUOTED_COMMAND])
            .await;
        assert!(encoded.status.success(), "{encoding}: {}", encoded.stderr);

        let decoded = fixture
            .run_cargo_with_stdin("cmddecode", &["-e", encoding], &encoded.stdout)
            .await;
        assert!(decoded.status.success(), "{encoding}: {}", decoded.stderr);
        assert_eq!(
            decoded.line(),
            "powershell -Command \"echo `\"quoted `$((1+2))`\"\"",
            "{encoding}"
        );
    }
});

// Matches 'cmdwrap --decode'
add_test!(same_as_cmdwrap_decode, async {
    let mut fixture = Fixture::new();

    let via_cmddecode = fixture.run_cargo("cmddecode", &["-e", "url", "a%20b%2Bc"]).await;
    let via_cmdwrap = fixture
        .run_cargo("cmdwrap", &["-d", "-e", "url", "a%20b%2Bc"])
        .await;
    assert!(via_cmddecode.status.success(), "{}", via_cmddecode.stderr);
    assert_eq!(via_cmddecode.stdout, via_cmdwrap.stdout);
    assert_eq!(via_cmddecode.line(), "a b+c");
});
