use std::collections::BTreeMap;

/// Story links keyed by front-page rank across all fetched pages.
/// An empty string marks a story whose link could not be extracted;
/// a missing key marks a duplicate that was dropped.
pub type StoryLinks = BTreeMap<usize, String>;
