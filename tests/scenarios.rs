use huffman::{build_code_table, code_string, huffman, Config, FrequencyTable, Weighting};
use std::io::Cursor;

fn rows(input: &[u8]) -> Vec<(u8, String)> {
    build_code_table(Cursor::new(input), &Config::default())
        .unwrap()
        .entries()
        .iter()
        .map(|e| (e.symbol, code_string(&e.code)))
        .collect()
}

#[test]
fn single_symbol() {
    let config = Config::default();
    let table = FrequencyTable::from_bytes(b"aaaaa", &config).unwrap();
    assert_eq!(table.seeds().collect::<Vec<_>>(), vec![(97, 5)]);

    let tree = huffman(&table, &config).unwrap().unwrap();
    assert!(tree.root().is_leaf());

    assert_eq!(rows(b"aaaaa"), vec![(97, String::new())]);
}

#[test]
fn empty_input() {
    let config = Config::default();
    let table = FrequencyTable::from_bytes(b"", &config).unwrap();
    assert!(table.is_empty());
    assert!(huffman(&table, &config).unwrap().is_none());

    assert!(rows(b"").is_empty());
}

#[test]
fn equal_frequencies_lower_symbol_left() {
    assert_eq!(
        rows(b"aaabbb"),
        vec![(97, "0".to_string()), (98, "1".to_string())]
    );
    // input order does not matter
    assert_eq!(rows(b"bababa"), rows(b"aaabbb"));
}

#[test]
fn one_one_two() {
    let out = rows(b"abcc");
    assert_eq!(
        out,
        vec![
            (b'c', "0".to_string()),
            (b'a', "10".to_string()),
            (b'b', "11".to_string()),
        ]
    );
}

#[test]
fn equal_internal_nodes_keep_extraction_order() {
    // a+d join first, then b+c; the two weight-2 subtrees tie and the
    // first one extracted stays left
    assert_eq!(
        rows(b"abcd"),
        vec![
            (b'a', "00".to_string()),
            (b'd', "01".to_string()),
            (b'b', "10".to_string()),
            (b'c', "11".to_string()),
        ]
    );
}

#[test]
fn bad_divisor_is_rejected() {
    for divisor in [0.0, -1.0, f64::NAN] {
        let config = Config {
            weighting: Weighting::Scaled { divisor },
            ..Config::default()
        };
        assert!(matches!(
            build_code_table(&b"aab"[..], &config),
            Err(huffman::Error::InvalidDivisor(_))
        ));
    }
}

#[test]
fn weighting_keeps_code_lengths_optimal() {
    let input = b"the quick brown fox jumps over the lazy dog";
    let count = build_code_table(&input[..], &Config::default()).unwrap();
    let scaled = build_code_table(
        &input[..],
        &Config::new(128, Weighting::Scaled { divisor: 100.0 }).unwrap(),
    )
    .unwrap();

    assert_eq!(count.len(), scaled.len());
    assert_eq!(count.encoded_bits(), scaled.encoded_bits());
    assert_eq!(scaled.get(b' ').unwrap().weight, 0.08);
}

#[test]
fn non_ascii_bytes_are_skipped() {
    let input = "héllo".as_bytes();
    let t = build_code_table(input, &Config::default()).unwrap();
    assert_eq!(t.len(), 3);
    assert_eq!(t.total_symbols(), 4);
    assert!(t.get(0xc3).is_none());

    let wide = build_code_table(input, &Config::new(256, Weighting::Count).unwrap()).unwrap();
    assert_eq!(wide.len(), 5);
}

#[test]
fn invalid_alphabet_is_rejected() {
    let config = Config {
        alphabet_size: 1000,
        ..Config::default()
    };
    assert!(matches!(
        build_code_table(&b"abc"[..], &config),
        Err(huffman::Error::InvalidAlphabet(1000))
    ));
}
