pub mod bubble_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
