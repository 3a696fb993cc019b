/// Data layer: typed peak records, loading, projection, partitioning.
///
/// Architecture:
/// ```text
///  CSV over HTTP
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + decode + parse → Vec<PeakRow>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   geo     │  attach a Point per row → PeakSet (EPSG 27700)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ partition  │  exact classification match → (Munros, Munro Tops)
///   └───────────┘
/// ```

pub mod geo;
pub mod loader;
pub mod model;
pub mod partition;
