//! BitSet64 membership and iteration tests.

use lucent_core::alloc::BitSet64;

#[test]
fn test_insert_and_contains() {
    let mut set = BitSet64::new();

    assert!(set.is_empty());
    assert!(!set.contains(0));

    set.insert(0);
    set.insert(5);
    set.insert(63);

    assert!(set.contains(0));
    assert!(set.contains(5));
    assert!(set.contains(63));
    assert!(!set.contains(4));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_remove() {
    let mut set = BitSet64::new();

    set.insert(7);
    set.insert(8);
    set.remove(7);

    assert!(!set.contains(7));
    assert!(set.contains(8));
    assert_eq!(set.len(), 1);

    // Removing an absent index is a no-op
    set.remove(7);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_insert_is_idempotent() {
    let mut set = BitSet64::new();

    set.insert(12);
    set.insert(12);

    assert_eq!(set.len(), 1);
}

#[test]
fn test_clear() {
    let mut set = BitSet64::new();

    set.insert(1);
    set.insert(2);
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.bits(), 0);
}

#[test]
fn test_iter_ascending() {
    let mut set = BitSet64::new();

    set.insert(40);
    set.insert(3);
    set.insert(17);

    let indices: Vec<u32> = set.iter().collect();
    assert_eq!(indices, vec![3, 17, 40]);
}

#[test]
fn test_iter_empty() {
    let set = BitSet64::new();
    assert_eq!(set.iter().count(), 0);
}

#[test]
fn test_copy_semantics() {
    let mut set = BitSet64::new();
    set.insert(9);

    let snapshot = set;
    set.remove(9);

    assert!(snapshot.contains(9));
    assert!(!set.contains(9));
}
