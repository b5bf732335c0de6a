pub mod longest_repeat;

pub use longest_repeat::{
    longest_repeating_substring_length, Repeat, RepeatFinder, RepeatFinderBuilder,
};
