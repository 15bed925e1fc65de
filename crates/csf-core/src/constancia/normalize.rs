//! Boilerplate removal for constancia text.

/// Heading of the economic activities table. Nothing after it is extracted.
pub const ACTIVITIES_HEADING: &str = "Actividades Económicas:";

/// First sentence of the privacy notice, as the text layer spells it.
pub const PRIVACY_NOTICE: &str = "Susdatospersonales sonincorporados yprotegidos enlossistemas delSAT,deconformidad conlosLineamientos deProtección deDatos";

/// Page footers that can land in the middle of the address block.
pub const PAGE_FOOTERS: [&str; 5] = [
    "Página  [2] de [2]",
    "Página  [2] de [3]",
    "Página  [2] de [4]",
    "Página  [2] de [5]",
    "Página  [2] de [6]",
];

/// Strip trailing sections and page footers from raw document text.
pub fn normalize(raw: &str) -> String {
    let text = truncate_at(raw, ACTIVITIES_HEADING);
    let text = truncate_at(text, PRIVACY_NOTICE);

    PAGE_FOOTERS
        .iter()
        .fold(text.to_string(), |acc, footer| acc.replace(footer, ""))
}

fn truncate_at<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(pos) => &text[..pos],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncates_at_activities() {
        let raw = "RFC:\nAAA010101AAA\nActividades Económicas:\nOrden Actividad\nRFC:\nZZZ";
        assert_eq!(normalize(raw), "RFC:\nAAA010101AAA\n");
    }

    #[test]
    fn test_truncates_at_privacy_notice() {
        let raw = format!("CURP:\nX\n{} Personales.", PRIVACY_NOTICE);
        assert_eq!(normalize(&raw), "CURP:\nX\n");
    }

    #[test]
    fn test_removes_all_footer_variants() {
        let raw = PAGE_FOOTERS
            .iter()
            .map(|f| format!("a{}b", f))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(normalize(&raw), "ab\nab\nab\nab\nab");
    }

    #[test]
    fn test_other_footers_kept() {
        // Only page 2 footers are known to interrupt fields
        let raw = "Página  [1] de [2]\nPágina [2] de [2]\nPágina  [2] de [7]";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn test_footer_removed_every_time() {
        let raw = "xPágina  [2] de [3]yPágina  [2] de [3]z";
        assert_eq!(normalize(raw), "xyz");
    }

    #[test]
    fn test_no_markers_unchanged() {
        let raw = "CONSTANCIA DE SITUACIÓN FISCAL\nCURP:\nABCD010101HDFRRL09";
        assert_eq!(normalize(raw), raw);
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "plain text",
            "a\nPágina  [2] de [4]\nb\nActividades Económicas:\nc",
            "Actividades Económicas:",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
