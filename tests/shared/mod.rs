pub fn tiny_test_corpus() -> Vec<(String, String)> {
    [
        "The quick brown fox jumps over the lazy dog.",
        "The quick brown fox.",
        "The quick brown fox jumps.",
        "The lazy dog lies in the sun.",
        "The dog is lazy.",
        "Foxes jump over lazy dogs.",
        "A fast brown fox leaps over lazy hounds.",
        "Dogs are loyal and lazy.",
        "The sun shines on the lazy dog.",
        "The fox and the hound.",
    ]
    .iter()
    .enumerate()
    .map(|(position, text)| (format!("doc{:02}", position + 1), text.to_string()))
    .collect()
}
