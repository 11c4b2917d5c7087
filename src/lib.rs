//! In-place partition-family algorithms over mutable slices.
//!
//! The core operations are [`partition`], which reorders a slice so that all
//! elements satisfying a predicate precede all elements that do not,
//! [`partition_point`], which locates that boundary in an already-partitioned
//! slice, and [`sort_subrange`], which sorts only a window of a larger slice
//! without paying for a full sort.
//!
//! `sort_subrange` is composed from two independently useful building blocks
//! that are exported as well: [`select_nth`], a quickselect that moves the
//! element at a chosen index into its final sorted position, and
//! [`partial_sort`], a heap-select that orders the `k` smallest elements.
//!
//! All operations swap within the input slice, allocate nothing and never
//! change the multiset of elements.

pub mod partial_sort;
pub mod partition;
pub mod partition_point;
pub mod patterns;
pub mod select;
pub mod sort_subrange;

pub use crate::partial_sort::{partial_sort, partial_sort_by};
pub use crate::partition::partition;
pub use crate::partition_point::partition_point;
pub use crate::select::{select_nth, select_nth_by};
pub use crate::sort_subrange::{sort_subrange, sort_subrange_by};
