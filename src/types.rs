/// Zero-based position of an observation in the parallel group-id/label arrays.
/// Example: `3` refers to `group_ids[3]` and `labels[3]`.
pub type ObservationIndex = usize;
/// Relevance/target value attached to an observation.
/// Examples: `0.0`, `1.0`, `3.5`
pub type Label = f32;
/// Group identifier used by the file reader and CLI (queries, sessions, ...).
/// Examples: `1`, `42`, `900017`
pub type GroupId = u64;
/// Exact number of valid pairs a group can produce.
/// Example: `6` for a group of four observations with distinct labels.
pub type PairCount = u64;
/// Pair weight handed to the ranking loss.
/// Example: `1.0`
pub type PairWeight = f32;
