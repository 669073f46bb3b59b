//! Common utilities for benchmarks.
//!
//! Provides test data generators with fixed seeds for reproducibility.

#![allow(dead_code)]

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fixed seed for reproducible benchmark data
const SEED: u64 = 42;

/// Create a seeded RNG for reproducible test data
pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

/// Generate a multi-file unified diff with the given number of files and
/// hunk lines per file.
///
/// Each file carries the usual `diff --git` / `index` / `---` / `+++`
/// headers, a hunk header every 50 lines, and a 20/20/60 mix of added,
/// removed, and context lines.
pub fn generate_unified_diff(file_count: usize, lines_per_file: usize) -> String {
    let mut rng = seeded_rng();
    let mut out = String::new();

    for file in 0..file_count {
        out.push_str(&format!(
            "diff --git a/src/file_{file}.rs b/src/file_{file}.rs\n"
        ));
        out.push_str("index 1111111..2222222 100644\n");
        out.push_str(&format!("--- a/src/file_{file}.rs\n"));
        out.push_str(&format!("+++ b/src/file_{file}.rs\n"));
        out.push_str(&format!("@@ -1,{lines_per_file} +1,{lines_per_file} @@\n"));

        for i in 0..lines_per_file {
            if i > 0 && i % 50 == 0 {
                out.push_str(&format!("@@ -{i},30 +{i},30 @@\n"));
                continue;
            }

            let content = generate_code_line(&mut rng, i);
            match rng.random_range(0..10u8) {
                0..=1 => out.push_str(&format!("+{content}\n")), // 20% added
                2..=3 => out.push_str(&format!("-{content}\n")), // 20% removed
                _ => out.push_str(&format!(" {content}\n")),     // 60% context
            }
        }
    }

    out
}

/// Generate a line of realistic Rust-like code
fn generate_code_line(rng: &mut ChaCha8Rng, line_num: usize) -> String {
    let templates = [
        format!("let value_{line_num} = compute({line_num});"),
        format!("fn helper_{line_num}() -> usize {{ {line_num} }}"),
        format!("if value > {line_num} {{ return early(); }}"),
        format!("assert_eq!(result, {line_num});"),
    ];
    templates[rng.random_range(0..templates.len())].clone()
}
