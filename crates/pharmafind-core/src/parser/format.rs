//! Upload-format template and serializer.

use std::fmt::Write;

use crate::models::InventorySnapshot;

/// Example upload document offered for download.
pub const TEMPLATE: &str = "\
Paracetamol:0 [Crocin Dolo]
Crocin:0
Dolo:3
Ibuprofen:10
Cetirizine:4 [Levocetirizine Loratadine]
Levocetirizine:0
Loratadine:2
Aspirin:0 [Disprin]
Disprin:0
";

/// Suggested file name for the downloadable template.
pub const TEMPLATE_FILE_NAME: &str = "inventory_template.txt";

/// Render a snapshot back into the upload format, one line per medicine
/// ordered by name.
///
/// Alternatives keyed by a medicine with no stock entry cannot be expressed
/// in the line format and are dropped.
pub fn to_upload_text(snapshot: &InventorySnapshot) -> String {
    let mut out = String::new();
    for (name, quantity) in &snapshot.inventory {
        let _ = write!(out, "{}:{}", name, quantity);
        if let Some(alts) = snapshot.alternatives.get(name) {
            if !alts.is_empty() {
                let _ = write!(out, " [{}]", alts.join(" "));
            }
        }
        out.push('\n');
    }
    out
}
