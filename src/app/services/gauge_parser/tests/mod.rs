//! Tests for the gauge file parser


/// Standard 9-line station metadata block used across parser tests
pub const METADATA_BLOCK: &str = "\
Port:              P038
Site:              Aberdeen
Latitude:          57.14543
Longitude:         -2.07450
Start Date:        01JAN1946-00.00.00
End Date:          31DEC1946-23.00.00
Contributor:       National Oceanography Centre, Liverpool
Datum information: The data refer to Admiralty Chart Datum (ACD)
Parameter:         Surface elevation (unspecified datum) of the water body
";

/// Column-name and units rows matching the BODC layout
pub const COLUMN_AND_UNITS_ROWS: &str = "\
  Cycle    Date      Time   ASLVTD02   Residual
 Number yyyy mm dd hh mi ssf        f          f
";

/// Build a complete gauge file from data rows
pub fn gauge_file(rows: &[&str]) -> String {
    let mut content = String::new();
    content.push_str(METADATA_BLOCK);
    content.push_str(COLUMN_AND_UNITS_ROWS);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}
