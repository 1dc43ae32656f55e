//! Integration tests for the full coding pipeline.
//!
//! These exercise the engine end-to-end: text -> frequencies -> tree ->
//! codes -> bitstring -> decoded text, and check the classic Huffman
//! properties (round-trip, prefix-freeness, optimality, monotonicity).

use huffviz_core::{
    build_tree, count_frequencies, decode, encode, generate_codes, CodeTable, HuffmanNode,
    UnknownSymbolPolicy,
};

fn tree_and_codes(text: &str) -> (Option<HuffmanNode>, CodeTable) {
    let tree = build_tree(&count_frequencies(text));
    let codes = generate_codes(tree.as_ref());
    (tree, codes)
}

#[test]
fn test_round_trip_various_inputs() {
    let inputs = [
        "hello world",
        "a",
        "ab",
        "the quick brown fox jumps over the lazy dog",
        "mississippi",
        "aaaaaaaaab",
        "État, naïveté, übergroß",
        "010101 literal bits as text",
    ];

    for text in inputs {
        let (tree, codes) = tree_and_codes(text);
        let encoded = encode(text, &codes, UnknownSymbolPolicy::Fail)
            .unwrap_or_else(|e| panic!("encode failed for {text:?}: {e}"));
        let decoded = decode(&encoded.bits, tree.as_ref())
            .unwrap_or_else(|e| panic!("decode failed for {text:?}: {e}"));
        assert_eq!(decoded, text, "round trip failed for {text:?}");
    }
}

#[test]
fn test_prefix_free_property() {
    let (_, codes) = tree_and_codes("the quick brown fox jumps over the lazy dog");
    let entries: Vec<(char, &str)> = codes.iter().collect();
    assert!(entries.len() > 2);

    for (a, code_a) in &entries {
        for (b, code_b) in &entries {
            if a != b {
                assert!(
                    !code_b.starts_with(code_a),
                    "codeword for {a:?} is a prefix of the one for {b:?}"
                );
            }
        }
    }
}

#[test]
fn test_single_symbol_alphabet() {
    let text = "aaaa";
    let freqs = count_frequencies(text);
    assert_eq!(freqs.len(), 1);
    assert_eq!(freqs.entries()[0].frequency, 4);

    let tree = build_tree(&freqs).unwrap();
    assert!(tree.is_leaf());

    let codes = generate_codes(Some(&tree));
    assert_eq!(codes.get('a'), Some("0"));

    let encoded = encode(text, &codes, UnknownSymbolPolicy::Fail).unwrap();
    assert_eq!(encoded.bits, "0000");

    assert_eq!(decode("0000", Some(&tree)).unwrap(), "aaaa");
}

#[test]
fn test_hello_world_is_optimal() {
    // Frequencies {h:1, e:1, l:3, o:2, ' ':1, w:1, r:1, d:1}. The
    // minimal weighted codeword length for that distribution is 32 bits
    // (sum of all internal node weights in any optimal merge order).
    let text = "hello world";
    let (tree, codes) = tree_and_codes(text);
    let encoded = encode(text, &codes, UnknownSymbolPolicy::Fail).unwrap();

    assert_eq!(encoded.bits.len(), 32);
    assert_eq!(decode(&encoded.bits, tree.as_ref()).unwrap(), text);
}

#[test]
fn test_encoded_length_equals_weighted_sum() {
    let text = "abracadabra stew";
    let freqs = count_frequencies(text);
    let (_, codes) = tree_and_codes(text);
    let encoded = encode(text, &codes, UnknownSymbolPolicy::Fail).unwrap();

    let weighted: u64 = freqs
        .entries()
        .iter()
        .map(|e| e.frequency * codes.get(e.symbol).map_or(0, str::len) as u64)
        .sum();
    assert_eq!(encoded.bits.len() as u64, weighted);
}

#[test]
fn test_determinism_of_code_assignment() {
    let text = "banana bandana";
    let (_, first) = tree_and_codes(text);
    let (_, second) = tree_and_codes(text);

    // Same input, same tie-break, same table (not just the same length
    // multiset).
    assert_eq!(first, second);
}

#[test]
fn test_monotonicity_of_code_lengths() {
    // Strictly higher frequency must never get a strictly longer code.
    let text = "aaaaaaaabbbbcc d";
    let freqs = count_frequencies(text);
    let (_, codes) = tree_and_codes(text);

    for a in freqs.entries() {
        for b in freqs.entries() {
            if a.frequency > b.frequency {
                let len_a = codes.get(a.symbol).map_or(0, str::len);
                let len_b = codes.get(b.symbol).map_or(0, str::len);
                assert!(
                    len_a <= len_b,
                    "{:?} (freq {}) got a longer code than {:?} (freq {})",
                    a.symbol,
                    a.frequency,
                    b.symbol,
                    b.frequency
                );
            }
        }
    }
}

#[test]
fn test_empty_input_chain() {
    let freqs = count_frequencies("");
    assert!(freqs.is_empty());

    let tree = build_tree(&freqs);
    assert!(tree.is_none());

    let codes = generate_codes(None);
    assert!(codes.is_empty());

    assert_eq!(decode("", None).unwrap(), "");
}

#[test]
fn test_skip_policy_round_trip_loses_unknowns_only() {
    // Codes derived from one message, encoding a different one: unknown
    // symbols drop out, known symbols survive the round trip in order.
    let (tree, codes) = tree_and_codes("hello world");
    let encoded = encode("hello there world", &codes, UnknownSymbolPolicy::Skip).unwrap();
    assert_eq!(encoded.skipped, 1); // only 't' is unknown; 'h', 'e', 'r' all exist

    let decoded = decode(&encoded.bits, tree.as_ref()).unwrap();
    assert_eq!(decoded, "hello here world");
}

#[test]
fn test_malformed_bitstream_is_an_error() {
    let (tree, codes) = tree_and_codes("hello world");
    let encoded = encode("hello world", &codes, UnknownSymbolPolicy::Fail).unwrap();

    // Flip nothing, just truncate: with 8 leaves every codeword is at
    // least 2 bits, so this always strands the decoder mid-codeword.
    let truncated = &encoded.bits[..encoded.bits.len() - 1];
    assert!(decode(truncated, tree.as_ref()).is_err());

    // Non-bit characters are rejected, not skipped.
    assert!(decode("01a0", tree.as_ref()).is_err());
}
