//! JSON export.

use std::io::Write;

use csf_core::Record;

pub fn write<W: Write>(records: &[Record], writer: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_key_first() {
        let record =
            csf_core::process_text("a.pdf", "CONSTANCIA DE SITUACIÓN FISCAL\nRFC:\nAAA010101AAA\n")
                .unwrap();
        let mut buf = Vec::new();
        write(&[record], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let archivo = text.find("\"Archivo\"").unwrap();
        let cedula = text.find("\"Cédula de Identificación fiscal\"").unwrap();
        assert!(archivo < cedula);

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["RFC"], "AAA010101AAA");
        assert_eq!(parsed[0]["CURP"], "N/A");
    }

    #[test]
    fn test_empty_collection() {
        let mut buf = Vec::new();
        write(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]");
    }
}
