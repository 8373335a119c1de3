use prefind::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::new();

    // Insert a grapheme sequence and its first two clusters
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    trie.insert(input.clone());
    trie.insert(input.clone().take(2));
    assert!(trie.contains(input.clone()));
    assert!(trie.contains(input.clone().take(2)));
    assert!(!trie.contains(input.clone().take(1)));

    // Every key below the first cluster, re-assembled into strings
    let found: Vec<String> = trie
        .find_by_prefix(input.clone().take(1))
        .expect("non-empty prefix")
        .into_iter()
        .map(|clusters| clusters.concat())
        .collect();
    assert_eq!(found, vec![input.take(2).collect::<String>(), s.to_string()]);
}
