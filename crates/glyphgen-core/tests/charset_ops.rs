use glyphgen_core::{CharSet, RangeSpec};

#[test]
fn expands_ranges_into_deduplicated_points() {
    let set = CharSet::from_specs(&[
        RangeSpec::interval('a', 'd'),
        RangeSpec::interval('c', 'f'),
        RangeSpec::single('a'),
    ]);
    assert_eq!(set.iter().collect::<String>(), "abcdef");
}

#[test]
fn empty_input_yields_the_empty_set() {
    assert!(CharSet::from_specs(&[]).is_empty());
}

#[test]
fn difference_removes_members() {
    let set = CharSet::from_specs(&[RangeSpec::interval('0', '5'), RangeSpec::single('7')]);
    let excluded = CharSet::from_specs(&[RangeSpec::single('4')]);
    let effective = set.difference(&excluded);
    assert!(!effective.contains('4'));
    assert_eq!(effective.iter().collect::<String>(), "012357");
}

#[test]
fn union_merges_without_duplicates() {
    let left = CharSet::from_specs(&[RangeSpec::interval('a', 'c')]);
    let right = CharSet::from_specs(&[RangeSpec::interval('b', 'e')]);
    assert_eq!(left.union(&right).len(), 5);
}

#[test]
fn surrogate_code_points_are_dropped() {
    let set = CharSet::from_specs(&[RangeSpec::interval(0xD7FE_u32, 0xE001_u32)]);
    let points: Vec<char> = set.iter().collect();
    assert_eq!(
        points,
        vec!['\u{D7FE}', '\u{D7FF}', '\u{E000}', '\u{E001}']
    );
}

#[test]
fn plane_wide_range_materializes() {
    let set = CharSet::from_specs(&[RangeSpec::interval(0x0000_u32, 0xFFFF_u32)]);
    // Full plane minus the 2048 surrogate code points.
    assert_eq!(set.len(), 0x10000 - 0x0800);
    assert!(set.contains('\u{0}'));
    assert!(set.contains('\u{FFFF}'));
}
