/// Data ingestion for the stat tracker.
///
/// The ingest layer is the only part of the crate that touches I/O. It
/// turns delimited text sources into the typed tables in `model`, doing
/// all field coercion in a single pass so the query layer never sees a
/// raw string where a number belongs.
///
/// Submodules:
/// - `csv_source` — CSV-backed Tabular Data Source.

pub mod csv_source;
