// tests/integration_tests.rs
//! Integration tests exercising the public container API end to end

use dynarr::prelude::*;

#[test]
fn test_push_growth_path_from_empty() {
    // Start empty, push 1..=5: capacity path is 0 -> 4 -> 8
    let mut arr = DynArray::new();
    assert_eq!(arr.capacity(), 0);

    for i in 1..=4 {
        arr.push_back(i);
        assert_eq!(arr.capacity(), 4);
    }

    arr.push_back(5);

    assert_eq!(arr.len(), 5);
    assert_eq!(arr.capacity(), 8);
    assert_eq!(arr.back().copied(), Ok(5));
    assert_eq!(
        arr.at(5).unwrap_err(),
        ArrayError::IndexOutOfRange { index: 5, len: 5 }
    );
}

#[test]
fn test_resize_shrink_scenario() {
    // Capacity 10 with elements [0, 1, 2, 3, 4]; resize(3, 0) drops the tail
    let mut arr: DynArray<i32> = DynArray::with_capacity(10);
    for i in 0..5 {
        arr.push_back(i);
    }

    arr.resize(3, 0);

    assert_eq!(arr.capacity(), 3);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.as_slice(), &[0, 1, 2]);
}

#[test]
fn test_reserve_rounds_up_to_double() {
    // reserve(15) on a capacity-10 array: 15 < 20, so the capacity doubles
    let mut arr: DynArray<i32> = DynArray::with_capacity(10);
    for i in 0..5 {
        arr.push_back(i);
    }

    arr.reserve(15);

    assert_eq!(arr.capacity(), 20);
    assert_eq!(arr.len(), 5);
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_resize_fill_and_preserve() {
    let mut arr: DynArray<i32> = DynArray::new();
    for i in 0..4 {
        arr.push_back(i * 10);
    }

    arr.resize(9, -1);

    assert_eq!(arr.len(), 9);
    for i in 0..4 {
        assert_eq!(arr[i], (i as i32) * 10);
    }
    for i in 4..9 {
        assert_eq!(arr[i], -1);
    }
}

#[test]
fn test_deep_copy_assignment() {
    let mut a: DynArray<i32> = DynArray::with_capacity(6);
    for i in 0..6 {
        a.push_back(i);
    }

    let mut b: DynArray<i32> = DynArray::new();
    b.clone_from(&a);

    assert_eq!(b.len(), a.len());
    assert_eq!(b.capacity(), a.capacity());

    // Mutating the source never leaks into the copy
    *a.at_mut(0).unwrap() = 999;
    a.pop_back();
    assert_eq!(b.as_slice(), &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_buffer_copy_truncation_guard() {
    let src: Buffer<u8> = Buffer::new(7);

    // Asking for more elements than the source holds is rejected up front
    let err = Buffer::copy_truncated(10, 8, &src).unwrap_err();
    assert_eq!(
        err,
        ArrayError::CopyExceedsSource {
            requested: 8,
            available: 7,
        }
    );

    // A zero-capacity target skips allocation and copy entirely
    let empty = Buffer::copy_truncated(0, 8, &src).unwrap();
    assert_eq!(empty.size(), 0);
}

#[test]
fn test_clear_is_full_release() {
    let mut arr: DynArray<String> = DynArray::new();
    for i in 0..20 {
        arr.push_back(i.to_string());
    }
    assert!(arr.capacity() >= 20);

    arr.clear();

    assert_eq!(arr.len(), 0);
    assert_eq!(arr.capacity(), 0);
    assert!(arr.is_empty());
}

#[test]
fn test_pop_back_never_fails() {
    let mut arr: DynArray<i32> = DynArray::with_capacity(3);
    arr.push_back(1);
    arr.push_back(2);

    for _ in 0..10 {
        arr.pop_back();
    }

    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 3);
}

#[test]
fn test_front_back_across_mutations() {
    let mut arr: DynArray<&str> = DynArray::new();
    assert_eq!(arr.front().unwrap_err(), ArrayError::Empty);
    assert_eq!(arr.back().unwrap_err(), ArrayError::Empty);

    arr.push_back("a");
    assert_eq!(arr.front().copied(), Ok("a"));
    assert_eq!(arr.back().copied(), Ok("a"));

    arr.push_back("b");
    arr.push_back("c");
    assert_eq!(arr.front().copied(), Ok("a"));
    assert_eq!(arr.back().copied(), Ok("c"));

    arr.pop_back();
    assert_eq!(arr.back().copied(), Ok("b"));
}

#[test]
fn test_reuse_after_clear_and_shrink() {
    let mut arr: DynArray<i32> = DynArray::new();
    for i in 0..100 {
        arr.push_back(i);
    }

    arr.reserve(10);
    assert_eq!(arr.len(), 10);
    assert_eq!(arr.capacity(), 10);

    arr.clear();
    for i in 0..5 {
        arr.push_back(-i);
    }

    assert_eq!(arr.len(), 5);
    assert_eq!(arr.capacity(), 8);
    assert_eq!(arr.as_slice(), &[0, -1, -2, -3, -4]);
}

#[test]
fn test_owned_element_types() {
    // The container only requires Default + Clone from its element type
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Record {
        id: u32,
        name: String,
    }

    let mut arr: DynArray<Record> = DynArray::new();
    for id in 0..10 {
        arr.push_back(Record {
            id,
            name: format!("record-{id}"),
        });
    }

    let copy = arr.clone();
    arr.resize(2, Record::default());

    assert_eq!(copy.len(), 10);
    assert_eq!(copy.back().unwrap().name, "record-9");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1].name, "record-1");
}
