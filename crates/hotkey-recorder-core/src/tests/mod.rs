mod normalizer;
mod registry;
mod support;
