//! CSV writer

use std::fs;
use std::io::Write;
use std::path::Path;

use tabcalc_core::Table;

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvWriteOptions, LineTerminator};

/// Table file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a resolved table to a file
    ///
    /// The file is only created once the whole grid has rendered, so an
    /// unresolved table leaves an existing file untouched.
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let mut buffer = Vec::new();
        Self::write(table, &mut buffer, options)?;
        fs::write(path, buffer)?;
        Ok(())
    }

    /// Write a resolved table to a string
    pub fn write_to_string(table: &Table, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buffer = Vec::new();
        Self::write(table, &mut buffer, options)?;
        String::from_utf8(buffer).map_err(|e| {
            CsvError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Write a resolved table to a writer
    ///
    /// The header is an empty row-label field followed by the column names;
    /// then one line per declared row, in declaration order. Every declared
    /// cell must have a value: a cell still holding a formula (or nothing)
    /// fails with [`CsvError::MissingValue`] before anything is flushed.
    pub fn write<W: Write>(table: &Table, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        // Collect every record first so a missing value produces no output
        let mut records: Vec<Vec<String>> = Vec::with_capacity(table.rows().len() + 1);

        let mut header = Vec::with_capacity(table.columns().len() + 1);
        header.push(String::new());
        header.extend(table.columns().iter().cloned());
        records.push(header);

        let mut cells = table.addresses();
        for row in table.rows() {
            let mut record = Vec::with_capacity(table.columns().len() + 1);
            record.push(row.to_string());
            for addr in cells.by_ref().take(table.columns().len()) {
                let value = table.value(&addr).ok_or(CsvError::MissingValue(addr))?;
                record.push(value.to_string());
            }
            records.push(record);
        }

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .terminator(terminator)
            .from_writer(writer);

        for record in &records {
            csv_writer.write_record(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
