/// Asserts that each of the expected strings occurs in the content, in the given order.
///
/// Each match must start after the end of the previous one.
#[macro_export]
macro_rules! assert_contains_inorder {
    ($content:expr, [$($expected:expr),* $(,)?]) => {{
        let content: &str = &$content;
        let mut remaining: &str = content;
        $(
            let expected: &str = $expected;
            match remaining.find(expected) {
                Some(index) => remaining = &remaining[index + expected.len()..],
                None => panic!(
                    "expected content not found, or out of order. expected: {:?}, content: {:?}",
                    expected, content
                ),
            }
        )*
        let _ = remaining;
    }};
}
