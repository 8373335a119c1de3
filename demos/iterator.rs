use rand::{distributions::Alphanumeric, thread_rng, Rng};
use std::iter::FromIterator;
use prefind::trie::Trie;

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::new();
    let mut searches = vec![];

    // Store 10 random strings (char sequences)
    // composed of between 1 and 10 characters in
    // our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: Vec<char> = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        trie.insert(entry);
    }

    // iterate over our trie and confirm that all keys
    // are in our search collection. Keys come out sorted.
    println!("all keys");
    for key in trie.iter() {
        assert!(searches.contains(&key));
        println!("key: {}", String::from_iter(&key));
    }

    // Now only the keys sharing the first key's initial atom
    let first = searches[0][0];
    println!("keys starting with {:?}", first);
    for key in trie.iter_prefix([first]).expect("non-empty prefix") {
        assert_eq!(key[0], first);
        println!("key: {}", String::from_iter(&key));
    }
}
