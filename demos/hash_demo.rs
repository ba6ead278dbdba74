//! Non-interactive tour of the SimpleHash256 engine: basic hashing, the
//! avalanche effect, and streaming-vs-one-shot equivalence.
//!
//! Run with `cargo run --example hash_demo`.

use simplehash::{SimpleHash256, hash_string};

fn bit_difference(a: &str, b: &str) -> u32 {
    a.as_bytes()
        .chunks_exact(2)
        .zip(b.as_bytes().chunks_exact(2))
        .map(|(x, y)| {
            let x = u8::from_str_radix(std::str::from_utf8(x).unwrap(), 16).unwrap();
            let y = u8::from_str_radix(std::str::from_utf8(y).unwrap(), 16).unwrap();
            (x ^ y).count_ones()
        })
        .sum()
}

fn main() {
    println!("SimpleHash256 - educational 256-bit Merkle-Damgard hash\n");

    println!("Basic hashing:");
    for message in ["", "Hello, World!", "Cryptography is fascinating"] {
        println!("  {message:?}");
        println!("    -> {}", hash_string(message));
    }

    println!("\nAvalanche effect (one-character change):");
    let first = "Hello, World!";
    let second = "Hello, World?";
    let hash_a = hash_string(first);
    let hash_b = hash_string(second);
    let bits = bit_difference(&hash_a, &hash_b);
    println!("  {first:?} -> {hash_a}");
    println!("  {second:?} -> {hash_b}");
    #[allow(clippy::cast_precision_loss)]
    let percent = f64::from(bits) / 256.0 * 100.0;
    println!("  bits different: {bits}/256 ({percent:.1}%)");

    println!("\nStreaming vs one-shot:");
    let mut hasher = SimpleHash256::new();
    hasher.update(b"The quick brown ");
    hasher.update(b"fox jumps over ");
    hasher.update(b"the lazy dog");
    let streamed = hasher.hexdigest();
    let one_shot = hash_string("The quick brown fox jumps over the lazy dog");
    println!("  streamed: {streamed}");
    println!("  one-shot: {one_shot}");
    println!("  equal:    {}", streamed == one_shot);
}
