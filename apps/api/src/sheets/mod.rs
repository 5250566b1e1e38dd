// Spreadsheet ingestion: export fetching, delimiter sniffing, tokenizing and
// row normalization. Everything here is tolerant: bad input degrades to fewer
// rows, never to an error the caller has to handle.

pub mod csv;
pub mod fetcher;
pub mod rows;

pub use fetcher::{fetch_section, HttpSheetSource, Section, SectionFetch, SheetError, SheetSource};
pub use rows::SheetRow;
