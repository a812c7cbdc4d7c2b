//! Formatting functions for disassembly rows

use crate::disassembler::Row;

/// Format a row as assembly text, without address or label
///
/// # Examples
///
/// ```
/// use minimon_trace::disassembler::{Operand, Row, RowKind};
/// use minimon_trace::disassembler::formatter::format_row;
///
/// let row = Row {
///     address: 0x1000,
///     kind: RowKind::Instruction,
///     mnemonic: "LD",
///     operands: vec![Operand::Register("A"), Operand::Immediate8(0x42)],
///     raw: vec![0xB0, 0x42],
///     label: None,
/// };
/// assert_eq!(format_row(&row), "LD A, #042h");
/// ```
pub fn format_row(row: &Row) -> String {
    if row.operands.is_empty() {
        return row.mnemonic.to_string();
    }

    let operands: Vec<String> = row.operands.iter().map(|op| op.to_string()).collect();
    format!("{} {}", row.mnemonic, operands.join(", "))
}

/// Format the bytes a row covers as space-separated hex
pub fn format_raw(row: &Row) -> String {
    row.raw
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a row as one listing line: address, raw bytes, label and text
pub fn format_line(row: &Row) -> String {
    let label = match &row.label {
        Some(label) => format!("{}:", label),
        None => String::new(),
    };

    format!(
        "{:06X}  {:<29} {:<12} {}",
        row.address,
        format_raw(row),
        label,
        format_row(row)
    )
    .trim_end()
    .to_string()
}

/// Format a full bank listing, one line per row
pub fn format_listing(rows: &[Row]) -> String {
    let mut listing = String::new();

    for row in rows {
        listing.push_str(&format_line(row));
        listing.push('\n');
    }

    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disassembler::{Operand, RowKind};

    fn row(mnemonic: &'static str, kind: RowKind, operands: Vec<Operand>, raw: Vec<u8>) -> Row {
        Row {
            address: 0x2150,
            kind,
            mnemonic,
            operands,
            raw,
            label: None,
        }
    }

    #[test]
    fn test_format_implied() {
        let r = row("RET", RowKind::Instruction, vec![], vec![0xF8]);
        assert_eq!(format_row(&r), "RET");
        assert_eq!(format_raw(&r), "F8");
    }

    #[test]
    fn test_format_branch_with_label() {
        let r = row(
            "CARL",
            RowKind::Instruction,
            vec![Operand::Target {
                address: 0x2200,
                label: Some("loc_2200".to_string()),
            }],
            vec![0xF2, 0xAD, 0x00],
        );
        assert_eq!(format_row(&r), "CARL loc_2200");
    }

    #[test]
    fn test_format_data_rows() {
        let words = row(
            "DW",
            RowKind::Words,
            vec![
                Operand::Word { value: 0x1234, label: None },
                Operand::Word { value: 0xABCD, label: None },
            ],
            vec![0x34, 0x12, 0xCD, 0xAB],
        );
        assert_eq!(format_row(&words), "DW 01234h, 0ABCDh");
        assert_eq!(format_raw(&words), "34 12 CD AB");

        let bytes = row("DB", RowKind::Bytes, vec![Operand::Byte(0x7F)], vec![0x7F]);
        assert_eq!(format_row(&bytes), "DB 07Fh");
    }

    #[test]
    fn test_format_illegal() {
        let r = row("NDEF", RowKind::Illegal, vec![], vec![0xFE]);
        assert_eq!(format_row(&r), "NDEF");
    }

    #[test]
    fn test_format_line_with_label() {
        let mut r = row("RET", RowKind::Instruction, vec![], vec![0xF8]);
        r.label = Some("loc_2150".to_string());

        let line = format_line(&r);
        assert!(line.starts_with("002150  F8"));
        assert!(line.ends_with("loc_2150:    RET"));
    }

    #[test]
    fn test_format_listing() {
        let rows = vec![
            row("NOP", RowKind::Instruction, vec![], vec![0xFF]),
            row("RET", RowKind::Instruction, vec![], vec![0xF8]),
        ];
        assert_eq!(format_listing(&rows).lines().count(), 2);
    }
}
