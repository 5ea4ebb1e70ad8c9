mod modifier;
mod normalizer;

pub use {
    modifier::{ModifierFlags, ModifierKey},
    normalizer::{KeyEventNormalizer, NormalizedKeyEvent, RawKeyEvent},
};
