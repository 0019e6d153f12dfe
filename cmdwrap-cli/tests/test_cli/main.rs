mod cmddecode;

/// Upper bound for one test, including every process it spawns
const TEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Declares an async test that fails once `TEST_TIMEOUT` elapses
#[macro_export]
macro_rules! add_test {
    ($name:ident, $body:expr) => {
        #[tokio::test(flavor = "current_thread")]
        async fn $name() {
            if tokio::time::timeout($crate::TEST_TIMEOUT, $body).await.is_err() {
                panic!("{} did not finish within {:?}", stringify!($name), $crate::TEST_TIMEOUT);
            }
        }
    };
}
