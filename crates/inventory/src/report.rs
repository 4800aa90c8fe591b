//! Console listing of the whole inventory.

use std::io::{self, Write};
use std::path::Path;

use stockroom_core::StockError;

use crate::log::StockLog;
use crate::store::InventoryStore;

pub const REPORT_HEADER: &str = "Items Report:";

impl<L: StockLog> InventoryStore<L> {
    /// Report body: blank line, header, one `item -> qty` line per item, blank line.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len() + 3);
        lines.push(String::new());
        lines.push(REPORT_HEADER.to_string());
        lines.extend(self.iter().map(|(item, qty)| format!("{item} -> {qty}")));
        lines.push(String::new());
        lines
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.report_lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    /// Print the report to stdout.
    pub fn report(&self) {
        let stdout = io::stdout();
        self.report_to(&mut stdout.lock(), Path::new("<stdout>"));
    }

    /// Write the report to `out`, logging a failure against `target` instead of returning it.
    pub fn report_to<W: Write>(&self, out: &mut W, target: &Path) {
        if let Err(err) = self.write_report(out) {
            self.log().failure(&StockError::io(target, err));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::path::Path;

    use stockroom_core::Severity;

    use crate::log::MemoryLog;
    use crate::store::InventoryStore;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_goes_to_log_sink() {
        let log = MemoryLog::new();
        let mut s = InventoryStore::with_log(&log);
        s.add("apple", 1, None);
        log.clear();

        s.report_to(&mut BrokenPipe, Path::new("<stdout>"));
        let errors = log.at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, Some("io"));
        assert!(errors[0].message.contains("<stdout>"), "{}", errors[0].message);
    }

    #[test]
    fn lists_every_item_once_in_order() {
        let log = MemoryLog::new();
        let mut s = InventoryStore::with_log(&log);
        s.add("apple", 7, None);
        s.add("banana", -2, None);
        s.add("apple", 1, None);

        let mut out = Vec::new();
        s.write_report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nItems Report:\napple -> 8\nbanana -> -2\n\n"
        );
    }

    #[test]
    fn empty_inventory_has_header_only() {
        let log = MemoryLog::new();
        let s = InventoryStore::with_log(&log);
        assert_eq!(s.report_lines(), ["", "Items Report:", ""]);
    }
}
