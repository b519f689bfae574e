//! Static input corpora and on-disk fixture helpers.
//!
//! The corpora are representative lines for each input format. The helpers
//! write fixture files into a caller-owned temp directory so harnesses never
//! touch a shared location.

use std::path::{Path, PathBuf};

/// The classic sample follow graph.
pub const CORPUS_FOLLOWS: &[&str] = &[
    "Ward follows Alan",
    "Alan follows Martin",
    "Ward follows Martin, Alan",
];

/// The classic sample posts, in feed order.
pub const CORPUS_POSTS: &[&str] = &[
    "Alan> If you have a procedure with 10 parameters, you probably missed some.",
    "Ward> There are only two hard things in Computer Science: cache invalidation, naming things and off-by-one errors.",
    "Alan> Random numbers should not be generated with a method chosen at random.",
];

/// The feed the classic sample must render, byte for byte.
pub const SAMPLE_FEED: &str = "\
Alan
\t@Alan: If you have a procedure with 10 parameters, you probably missed some.
\t@Alan: Random numbers should not be generated with a method chosen at random.
Martin
Ward
\t@Alan: If you have a procedure with 10 parameters, you probably missed some.
\t@Ward: There are only two hard things in Computer Science: cache invalidation, naming things and off-by-one errors.
\t@Alan: Random numbers should not be generated with a method chosen at random.
";

/// Write `lines` to `dir/name`, newline-terminated, and return the path.
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).expect("fixture write must succeed");
    path
}

/// Generate `n` synthetic post lines across three authors for throughput
/// tests.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let author = match i % 3 {
                0 => "Alan",
                1 => "Ward",
                _ => "Martin",
            };
            format!("{author}> synthetic post number {i}")
        })
        .collect()
}
