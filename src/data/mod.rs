/// Data layer: core types, loading, and the two chart queries.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/category/payload indices
///   └───────────────┘
///        │
///        ├────────────────────────┐
///        ▼                        ▼
///   ┌───────────┐           ┌──────────┐
///   │ aggregate  │           │  filter   │
///   └───────────┘           └──────────┘
///    outcome counts          payload range
///    → PieSpec               → ScatterSpec
/// ```
///
/// The dataset is built once and only ever read afterwards; both queries are
/// pure functions of `&LaunchDataset` plus their inputs.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
