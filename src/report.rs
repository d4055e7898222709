// Thu Aug 27 2026 - Alex

use crate::aggregate::SymbolAggregator;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Renders the aggregator's final state as the stable text report
pub struct ReportEmitter;

impl ReportEmitter {
    pub fn write_report<W: Write>(aggregator: &SymbolAggregator, out: &mut W) -> io::Result<()> {
        for (component, symbols) in aggregator.components() {
            writeln!(out, "COMPONENT: {}", component)?;
            for symbol in &symbols.public {
                writeln!(out, "{} public: {};", component, symbol)?;
            }
            for symbol in &symbols.private {
                writeln!(out, "{} private: {};", component, symbol)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn save_report(aggregator: &SymbolAggregator, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_report(aggregator, &mut writer)?;
        writer.flush()
    }

    pub fn render(aggregator: &SymbolAggregator) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        Self::write_report(aggregator, &mut buffer).expect("in-memory write");
        String::from_utf8(buffer).expect("report is valid utf-8")
    }
}
