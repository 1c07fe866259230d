//! Tests for marker label allocation

use crate::app::models::Status;
use crate::app::services::map_renderer::LabelAllocator;

#[test]
fn test_first_marker_in_each_category_is_labelled_a() {
    let mut allocator = LabelAllocator::new();

    let enrolled = allocator.style_for(Status::Enrolled);
    let skilled = allocator.style_for(Status::Skilled);
    let placed = allocator.style_for(Status::Placed);

    assert_eq!(enrolled.color, "green");
    assert_eq!(enrolled.label, 'A');
    assert_eq!(skilled.color, "yellow");
    assert_eq!(skilled.label, 'A');
    assert_eq!(placed.color, "pink");
    assert_eq!(placed.label, 'A');
}

#[test]
fn test_labels_walk_the_alphabet_within_a_category() {
    let mut allocator = LabelAllocator::new();

    let labels: Vec<char> = (0..4)
        .map(|_| allocator.style_for(Status::Enrolled).label)
        .collect();

    assert_eq!(labels, vec!['A', 'B', 'C', 'D']);
}

#[test]
fn test_category_counters_are_independent() {
    let mut allocator = LabelAllocator::new();

    allocator.style_for(Status::Enrolled);
    allocator.style_for(Status::Enrolled);
    let skilled = allocator.style_for(Status::Skilled);

    // Two enrolled allocations must not advance the skilled sequence
    assert_eq!(skilled.label, 'A');
    assert_eq!(allocator.allocated(Status::Enrolled), 2);
    assert_eq!(allocator.allocated(Status::Skilled), 1);
    assert_eq!(allocator.allocated(Status::Placed), 0);
}

#[test]
fn test_labels_wrap_after_z() {
    let mut allocator = LabelAllocator::new();

    let mut last = ' ';
    for _ in 0..26 {
        last = allocator.style_for(Status::Placed).label;
    }
    assert_eq!(last, 'Z');

    // The 27th marker wraps back to the start of the alphabet
    assert_eq!(allocator.style_for(Status::Placed).label, 'A');
    assert_eq!(allocator.style_for(Status::Placed).label, 'B');
}

#[test]
fn test_unknown_status_has_its_own_gray_sequence() {
    let mut allocator = LabelAllocator::new();

    allocator.style_for(Status::Enrolled);
    let first = allocator.style_for(Status::Unknown);
    let second = allocator.style_for(Status::Unknown);

    assert_eq!(first.color, "gray");
    assert_eq!(first.label, 'A');
    assert_eq!(second.label, 'B');
}

#[test]
fn test_style_icon_path_includes_color_and_label() {
    let mut allocator = LabelAllocator::new();

    let style = allocator.style_for(Status::Skilled);

    assert_eq!(style.icon_path("markers"), "markers/yellow_MarkerA.png");
}
