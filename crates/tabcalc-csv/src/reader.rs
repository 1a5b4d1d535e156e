//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info};
use tabcalc_core::{CellAddress, CellInt, Table};
use tabcalc_formula::parse_formula;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use crate::token::{classify, TokenKind};

/// Table file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a table file
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read a table from a string
    pub fn read_str(input: &str, options: &CsvReadOptions) -> CsvResult<Table> {
        Self::read(input.as_bytes(), options)
    }

    /// Read a table from a reader
    ///
    /// Literal cells land in the table's value store and formula cells in its
    /// formula store; nothing is resolved yet. The first offending line stops
    /// the read. Empty lines are rejected: an empty first line means there
    /// are no columns.
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        check_empty_lines(&input)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(input.as_bytes());

        let mut records = csv_reader.records();

        let header = match records.next() {
            Some(result) => result?,
            None => {
                return Err(CsvError::Table {
                    line: 1,
                    source: tabcalc_core::Error::NoColumns,
                })
            }
        };
        let mut table = Self::read_header(&header)?;
        let columns = table.columns().to_vec();

        for result in records {
            let record = result?;
            Self::read_row(&mut table, &columns, &record)?;
        }

        info!(
            "Read {} columns x {} rows ({} literals, {} formulas)",
            columns.len(),
            table.rows().len(),
            table.values().len(),
            table.formulas().len()
        );
        Ok(table)
    }

    /// Read the column names from the first line
    fn read_header(record: &StringRecord) -> CsvResult<Table> {
        let line = line_of(record);
        let mut fields = record.iter().peekable();

        // The row-label column may be left empty, once
        if fields.peek() == Some(&"") {
            fields.next();
        }

        let names: Vec<&str> = fields.collect();
        for name in &names {
            if classify(name) != Some(TokenKind::Column) {
                return Err(CsvError::Table {
                    line,
                    source: tabcalc_core::Error::InvalidColumnName(name.to_string()),
                });
            }
        }

        let table = Table::new(names).map_err(|source| CsvError::Table { line, source })?;
        debug!("Columns: {:?}", table.columns());
        Ok(table)
    }

    /// Read one `<row>,<cell>,...` line
    fn read_row(table: &mut Table, columns: &[String], record: &StringRecord) -> CsvResult<()> {
        let line = line_of(record);

        let expected = columns.len() + 1;
        if record.len() != expected {
            return Err(CsvError::FieldCount {
                line,
                expected,
                found: record.len(),
            });
        }

        let label = &record[0];
        let row = match classify(label) {
            Some(TokenKind::Literal) => label.parse::<u32>().ok().filter(|row| *row >= 1),
            _ => None,
        }
        .ok_or_else(|| CsvError::InvalidRowLabel {
            line,
            label: label.to_string(),
        })?;
        table
            .add_row(row)
            .map_err(|source| CsvError::Table { line, source })?;

        for (column, token) in columns.iter().zip(record.iter().skip(1)) {
            let addr = CellAddress::new(column.as_str(), row)
                .map_err(|source| CsvError::Table { line, source })?;

            let assigned = match classify(token) {
                Some(TokenKind::Literal) => {
                    let value: CellInt =
                        token.parse().map_err(|_| CsvError::LiteralOutOfRange {
                            line,
                            token: token.to_string(),
                        })?;
                    table.set_value(addr, value)
                }
                Some(TokenKind::Formula) => {
                    let formula =
                        parse_formula(token).map_err(|source| CsvError::Formula { line, source })?;
                    table.set_formula(addr, formula)
                }
                Some(TokenKind::Column) | None => {
                    return Err(CsvError::InvalidToken {
                        line,
                        token: token.to_string(),
                    })
                }
            };
            assigned.map_err(|source| CsvError::Table { line, source })?;
        }

        debug!("Row {} read from line {}", row, line);
        Ok(())
    }
}

/// Reject empty lines, which the csv reader would skip silently
///
/// A final line terminator does not start an empty line.
fn check_empty_lines(input: &str) -> CsvResult<()> {
    match input.lines().position(str::is_empty) {
        Some(0) => Err(CsvError::Table {
            line: 1,
            source: tabcalc_core::Error::NoColumns,
        }),
        Some(index) => Err(CsvError::EmptyLine {
            line: index as u64 + 1,
        }),
        None => Ok(()),
    }
}

/// 1-based input line of a record
fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tabcalc_core::Operator;

    fn read(input: &str) -> CsvResult<Table> {
        CsvReader::read_str(input, &CsvReadOptions::default())
    }

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_read_table() {
        let table = read(",A,B,Cell\n1,1,0,1\n2,2,=A1+Cell30,0\n30,0,=B1+A1,5\n").unwrap();

        assert_eq!(table.columns(), ["A", "B", "Cell"]);
        assert_eq!(table.rows(), [1, 2, 30]);
        assert_eq!(table.values().len(), 7);
        assert_eq!(table.formulas().len(), 2);
        assert_eq!(table.value(&addr("Cell30")), Some(5));

        let formula = table.formula(&addr("B2")).unwrap();
        assert_eq!(formula.left, addr("A1"));
        assert_eq!(formula.op, Operator::Add);
        assert_eq!(formula.right, addr("Cell30"));
    }

    #[test]
    fn test_header_without_leading_field() {
        let table = read("A,B\n1,3,4\n").unwrap();
        assert_eq!(table.columns(), ["A", "B"]);
        assert_eq!(table.value(&addr("B1")), Some(4));
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(
            read(""),
            Err(CsvError::Table {
                source: tabcalc_core::Error::NoColumns,
                ..
            })
        ));
        assert!(matches!(
            read(",A,A\n"),
            Err(CsvError::Table {
                source: tabcalc_core::Error::DuplicateColumn(_),
                ..
            })
        ));
        // Only one leading empty field is tolerated
        assert!(matches!(
            read(",,A\n"),
            Err(CsvError::Table {
                source: tabcalc_core::Error::InvalidColumnName(_),
                ..
            })
        ));
        assert!(matches!(
            read(",A,B1\n"),
            Err(CsvError::Table {
                source: tabcalc_core::Error::InvalidColumnName(_),
                ..
            })
        ));
    }

    #[test]
    fn test_row_errors() {
        assert!(matches!(
            read(",A,B\n1,1\n"),
            Err(CsvError::FieldCount {
                line: 2,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            read(",A\n0,1\n"),
            Err(CsvError::InvalidRowLabel { line: 2, .. })
        ));
        assert!(matches!(
            read(",A\n-3,1\n"),
            Err(CsvError::InvalidRowLabel { .. })
        ));
        assert!(matches!(
            read(",A\nx,1\n"),
            Err(CsvError::InvalidRowLabel { .. })
        ));
        assert!(matches!(
            read(",A\n1,1\n1,2\n"),
            Err(CsvError::Table {
                line: 3,
                source: tabcalc_core::Error::DuplicateRow(1)
            })
        ));
    }

    #[test]
    fn test_token_errors() {
        assert!(matches!(
            read(",A,B\n1,4,=A1/0lit\n"),
            Err(CsvError::InvalidToken { line: 2, .. })
        ));
        assert!(matches!(
            read(",A\n1,B\n"),
            Err(CsvError::InvalidToken { .. })
        ));
        assert!(matches!(
            read(",A\n1,99999999999999999999\n"),
            Err(CsvError::LiteralOutOfRange { .. })
        ));
    }

    #[test]
    fn test_formula_operands_are_not_checked_on_read() {
        let table = read(",A\n1,4\n2,=A1/C9\n").unwrap();
        assert_eq!(table.formula(&addr("A2")).unwrap().right, addr("C9"));
    }

    #[test]
    fn test_empty_lines_are_rejected() {
        assert!(matches!(
            read(",A\n1,4\n\n2,5\n"),
            Err(CsvError::EmptyLine { line: 3 })
        ));
        assert!(matches!(
            read(",A\r\n1,4\r\n\r\n"),
            Err(CsvError::EmptyLine { line: 3 })
        ));
        assert!(matches!(
            read(",A\n1,4\n\n"),
            Err(CsvError::EmptyLine { line: 3 })
        ));
        // An empty first line leaves no header
        assert!(matches!(
            read("\n,A\n1,4\n"),
            Err(CsvError::Table {
                line: 1,
                source: tabcalc_core::Error::NoColumns
            })
        ));
    }

    #[test]
    fn test_final_line_terminator_is_optional() {
        assert_eq!(read(",A\n1,4\n2,5\n").unwrap().rows(), [1, 2]);
        assert_eq!(read(",A\n1,4\n2,5").unwrap().rows(), [1, 2]);
    }

    #[test]
    fn test_trim_option() {
        let options = CsvReadOptions {
            trim: true,
            ..Default::default()
        };
        let table = CsvReader::read_str(" , A , B\n1, 2 , =A1*A1\n", &options).unwrap();
        assert_eq!(table.columns(), ["A", "B"]);
        assert_eq!(table.value(&addr("A1")), Some(2));

        assert!(read(",A\n1, 2\n").is_err());
    }

    #[test]
    fn test_custom_delimiter() {
        let options = CsvReadOptions {
            delimiter: b';',
            ..Default::default()
        };
        let table = CsvReader::read_str(";A;B\n1;2;=A1-A1\n", &options).unwrap();
        assert_eq!(table.formulas().len(), 1);
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ",A,B").unwrap();
        writeln!(file, "1,5,10").unwrap();
        writeln!(file, "2,=A1+B1,3").unwrap();

        let table = CsvReader::read_file(file.path(), &CsvReadOptions::default()).unwrap();
        assert_eq!(table.rows(), [1, 2]);
        assert_eq!(table.formulas().len(), 1);
    }
}
