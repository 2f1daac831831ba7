use std::num::NonZeroUsize;

use chainkv::{bucket_index, FixedDict, KeyValueStore};

fn buckets(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_get_immutable_multiple_borrows() {
    let mut d = FixedDict::new();

    d.insert(1, 10u32);
    d.insert(2, 20u32);
    d.insert(3, 30u32);

    // Все три ссылки живут одновременно
    let v1 = d.get(1).unwrap();
    let v2 = d.get(2).unwrap();
    let v3 = d.get(3).unwrap();

    assert_eq!(*v1 + *v2 + *v3, 60);
}

#[test]
fn test_values_are_generic() {
    let mut d = FixedDict::with_buckets(buckets(7));

    d.insert(-1, "minus one".to_string());
    d.insert(6, "six".to_string());

    assert_eq!(d.get(-1).map(String::as_str), Some("minus one"));
    assert_eq!(d.remove(6), Some("six".to_string()));
    assert_eq!(d.len(), 1);
}

#[test]
fn test_negative_and_positive_keys_do_not_alias() {
    let mut store = KeyValueStore::with_buckets(buckets(5));

    // -5, 0 и 5 попадают в один бакет
    store.put(-5, 1);
    store.put(0, 2);
    store.put(5, 3);

    assert_eq!(store.get(-5), Some(1));
    assert_eq!(store.get(0), Some(2));
    assert_eq!(store.get(5), Some(3));
    assert_eq!(store.stats().longest_chain, 3);
}

#[test]
fn test_extreme_keys_round_trip() {
    let mut store = KeyValueStore::new();

    for key in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
        store.put(key, key.wrapping_mul(3));
    }

    for key in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
        assert_eq!(store.get(key), Some(key.wrapping_mul(3)), "key {key}");
    }

    assert_eq!(store.delete(i64::MIN), Some(i64::MIN.wrapping_mul(3)));
    assert_eq!(store.get(i64::MIN), None);
    assert_eq!(store.len(), 6);
}

#[test]
fn test_bucket_index_in_range_for_many_sizes() {
    for n in [1usize, 2, 3, 10, 97, 100_003] {
        for key in [i64::MIN, -100_004, -100_003, -1, 0, 1, 100_003, i64::MAX] {
            let idx = bucket_index(key, buckets(n));
            assert!(idx < n, "key {key} n {n} -> {idx}");
            assert_eq!(idx as i128, (key as i128).rem_euclid(n as i128));
        }
    }
}

#[test]
fn test_single_bucket_degenerate_table() {
    let mut d = FixedDict::with_buckets(buckets(1));
    const N: i64 = 2_000;

    for i in 0..N {
        assert!(d.insert(i, i));
    }

    assert_eq!(d.chain_len(0), N as usize);

    // удаляем через один: головы, середины и хвосты цепочки
    for i in (0..N).step_by(2) {
        assert_eq!(d.remove(i), Some(i), "key {i} not found while deleting");
    }

    for i in 0..N {
        let expected = if i % 2 == 0 { None } else { Some(&i) };
        assert_eq!(d.get(i), expected);
    }

    assert_eq!(d.len(), (N / 2) as usize);
}

#[test]
fn test_remove_in_reverse_order() {
    let mut d = FixedDict::with_buckets(buckets(13));

    for i in 0..1_000i64 {
        d.insert(i, i);
    }

    for i in (0..1_000i64).rev() {
        assert_eq!(d.remove(i), Some(i));
    }

    assert!(d.is_empty());
    assert_eq!(d.stats().occupied_buckets, 0);
}

#[test]
fn test_empty_dict_all_ops() {
    let mut d: FixedDict<i64> = FixedDict::new();

    assert_eq!(d.len(), 0);
    assert!(d.is_empty());
    assert_eq!(d.get(0), None);
    assert!(!d.contains_key(0));
    assert_eq!(d.remove(0), None);
    assert_eq!(d.stats().longest_chain, 0);
}

#[test]
fn test_overwrite_same_key_many_times() {
    let mut d = FixedDict::new();

    d.insert(42, 0u32);

    for v in 1..=1_000u32 {
        let is_new = d.insert(42, v);
        assert!(!is_new, "reinsert should return false");
    }

    assert_eq!(d.len(), 1);
    assert_eq!(d.get(42), Some(&1_000));
}

#[test]
fn test_reinsert_after_delete_appends_again() {
    let mut d = FixedDict::with_buckets(buckets(1));

    d.insert(1, 1);
    d.insert(2, 2);
    assert_eq!(d.remove(1), Some(1));
    assert!(d.insert(1, 10));

    assert_eq!(d.chain_len(0), 2);
    assert_eq!(d.get(1), Some(&10));
    assert_eq!(d.get(2), Some(&2));
}

#[test]
fn test_bucket_isolation() {
    let mut store = KeyValueStore::with_buckets(buckets(10));

    store.put(3, 30);
    store.put(4, 40);

    store.put(3, 31);
    assert_eq!(store.delete(3), Some(31));

    assert_eq!(store.get(4), Some(40));
}
